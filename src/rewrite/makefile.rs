//! `Makefile` help text: project name and interpreter version

use super::rule::{apply_all, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::{targets, PLACEHOLDER_PACKAGE};
use crate::error::Result;
use std::path::{Path, PathBuf};

const PYTHON_PIN: &str = r"python=[0-9]+\.[0-9]+";

pub struct Makefile;

pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::placeholder("distribution name", PLACEHOLDER_PACKAGE, &config.distribution_name)?,
        Rule::new("python pin", PYTHON_PIN, format!("python={}", config.python_min_version))?,
    ])
}

impl FileRewriter for Makefile {
    fn name(&self) -> &'static str {
        "Makefile"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![PathBuf::from(targets::MAKEFILE)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        Ok(apply_all(&rules(context.config)?, text))
    }
}
