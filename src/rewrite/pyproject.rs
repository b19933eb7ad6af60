//! `pyproject.toml` tool settings

use super::rule::{apply_all, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::targets;
use crate::error::Result;
use std::path::{Path, PathBuf};

const TARGET_VERSION: &str = r#"\btarget-version\s*=\s*"[^"]*""#;
const KNOWN_FIRST_PARTY: &str = r"\bknown-first-party\s*=\s*\[[^\]]*\]";

pub struct PyprojectToml;

pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    let target_version = config.target_version()?;
    Ok(vec![
        Rule::new(
            "target-version",
            TARGET_VERSION,
            format!(r#"target-version = "{target_version}""#),
        )?,
        Rule::new(
            "known-first-party",
            KNOWN_FIRST_PARTY,
            format!(r#"known-first-party = ["{}", "tests"]"#, config.import_name),
        )?,
    ])
}

impl FileRewriter for PyprojectToml {
    fn name(&self) -> &'static str {
        "pyproject.toml"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![PathBuf::from(targets::PYPROJECT_TOML)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        Ok(apply_all(&rules(context.config)?, text))
    }
}
