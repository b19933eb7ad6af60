//! `MANIFEST.in` inclusion directives

use super::rule::{apply_all, Rule};
use super::{FileRewriter, RewriteContext};
use crate::config::SetupConfig;
use crate::constants::{targets, PLACEHOLDER_PACKAGE};
use crate::error::Result;
use std::path::{Path, PathBuf};

pub struct ManifestIn;

pub fn rules(config: &SetupConfig) -> Result<Vec<Rule>> {
    Ok(vec![Rule::literal(
        "recursive-include",
        &format!("recursive-include {PLACEHOLDER_PACKAGE}/"),
        format!("recursive-include {}/", config.import_name),
    )?])
}

impl FileRewriter for ManifestIn {
    fn name(&self) -> &'static str {
        "MANIFEST.in"
    }

    fn targets(&self, _context: &RewriteContext<'_>) -> Vec<PathBuf> {
        vec![PathBuf::from(targets::MANIFEST_IN)]
    }

    fn rewrite(&self, _target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String> {
        Ok(apply_all(&rules(context.config)?, text))
    }
}
