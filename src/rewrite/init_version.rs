//! `__version__` marker inside the package directory

use super::rule::{apply_all, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::targets;
use crate::error::Result;
use std::path::{Path, PathBuf};

const VERSION: &str = r#"__version__\s*=\s*"[^"]*""#;

pub struct PackageInit;

pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![Rule::new("__version__", VERSION, format!(r#"__version__ = "{}""#, config.version))?])
}

impl FileRewriter for PackageInit {
    fn name(&self) -> &'static str {
        "package __init__"
    }

    fn targets(&self, context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![context.package_dir.join(targets::PACKAGE_INIT)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        Ok(apply_all(&rules(context.config)?, text))
    }
}
