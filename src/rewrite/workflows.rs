//! GitHub Actions workflows: interpreter version and trigger branch

use super::rule::{apply_all, escape_replacement, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::targets;
use crate::error::Result;
use std::path::{Path, PathBuf};

const PYTHON_VERSION: &str = r#"python-version:\s*"[^"]*""#;
/// First list item under each `branches:` key.
const BRANCHES: &str = r"(?m)(?P<head>branches:[ \t]*\r?\n)(?P<indent>[ \t]*)-[ \t]*[^\s#]+";

pub struct Workflows;

/// Rules for every workflow file.
pub fn python_version_rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![Rule::new(
        "python-version",
        PYTHON_VERSION,
        format!(r#"python-version: "{}""#, config.python_min_version),
    )?])
}

/// Extra rule for the test workflow only.
pub fn branch_rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![Rule::with_template(
        "branches",
        BRANCHES,
        format!("${{head}}${{indent}}- {}", escape_replacement(&config.default_branch)),
    )?])
}

fn is_test_workflow(target: &Path) -> bool {
    target.file_name().is_some_and(|name| name == targets::TEST_WORKFLOW)
}

impl FileRewriter for Workflows {
    fn name(&self) -> &'static str {
        "workflows"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        let dir = Path::new(targets::WORKFLOWS_DIR);
        vec![dir.join(targets::TEST_WORKFLOW), dir.join(targets::PUBLISH_WORKFLOW)]
    }

    fn rewrite(&self, target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        let mut rules = python_version_rules(context.config)?;
        if is_test_workflow(target) {
            rules.extend(branch_rules(context.config)?);
        }
        Ok(apply_all(&rules, text))
    }
}
