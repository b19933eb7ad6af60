//! The settings record every step reads from

use crate::error::Result;
use crate::validation::{python_target_version, validate_import_name};

/// Project metadata supplied by the user, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Name published to the package index
    pub distribution_name: String,
    /// Name the package is imported under; also the package directory name
    pub import_name: String,
    pub description: String,
    pub url: String,
    pub author: String,
    /// `None` means "leave email lines alone", never "write an empty email"
    pub author_email: Option<String>,
    /// Minimum supported interpreter, `major.minor`
    pub python_min_version: String,
    pub version: String,
    pub default_branch: String,
    pub year: String,
}

impl SetupConfig {
    /// Runs every check that can fail before the first filesystem mutation.
    pub fn validate(&self) -> Result<()> {
        validate_import_name(&self.import_name)?;
        python_target_version(&self.python_min_version)?;
        Ok(())
    }

    /// Compact version token for `pyproject.toml`, e.g. `py311`.
    pub fn target_version(&self) -> Result<String> {
        python_target_version(&self.python_min_version)
    }
}

#[cfg(test)]
pub(crate) fn sample_config() -> SetupConfig {
    SetupConfig {
        distribution_name: "acme-widgets".to_string(),
        import_name: "acme_widgets".to_string(),
        description: "Widgets for Acme".to_string(),
        url: "https://github.com/acme/widgets".to_string(),
        author: "Jane Roe".to_string(),
        author_email: Some("jane@acme.test".to_string()),
        python_min_version: "3.11".to_string(),
        version: "0.2.0".to_string(),
        default_branch: "develop".to_string(),
        year: "2025".to_string(),
    }
}
