//! In-place rewriting of the template's project files.
//!
//! Every target file has its own [`FileRewriter`] made of named [`Rule`]s.
//! Rewriters never parse their file format; they edit known `key = value`
//! lines and leave everything else byte-for-byte intact.

pub mod init_version;
pub mod license;
pub mod makefile;
pub mod manifest;
pub mod operation;
pub mod processor;
pub mod pyproject;
pub mod rule;
pub mod setup_py;
pub mod workflows;

use crate::config::SetupConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub use operation::{SetupOperation, SetupReport};
pub use processor::RewriteProcessor;
pub use rule::Rule;

/// What a rewriter can see while transforming a file.
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    pub config: &'a SetupConfig,
    /// Package directory relative to the root, where it currently lives on disk
    pub package_dir: &'a Path,
}

/// A text transform for one category of project file.
pub trait FileRewriter {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Files this rewriter handles, relative to the repository root.
    /// Files that do not exist are skipped by the caller.
    fn targets(&self, context: &RewriteContext<'_>) -> Vec<PathBuf>;

    /// Pure transform of one target's text.
    fn rewrite(&self, target: &Path, text: &str, context: &RewriteContext<'_>) -> Result<String>;
}

/// All rewriters, in the order they run.
pub fn default_rewriters() -> Vec<Box<dyn FileRewriter>> {
    vec![
        Box::new(setup_py::SetupPy),
        Box::new(pyproject::PyprojectToml),
        Box::new(manifest::ManifestIn),
        Box::new(makefile::Makefile),
        Box::new(license::License),
        Box::new(workflows::Workflows),
        Box::new(init_version::PackageInit),
    ]
}
