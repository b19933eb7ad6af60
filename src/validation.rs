//! Checks applied to configuration values before anything on disk changes.

use crate::constants::TARGET_VERSION_PREFIX;
use crate::error::{Error, Result};
use regex::Regex;

/// Bare Python identifier: letter or underscore, then letters, digits, underscores.
const IMPORT_NAME_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";

/// Two numeric components, e.g. `3.11`.
const PYTHON_VERSION_PATTERN: &str = r"^([0-9]+)\.([0-9]+)$";

/// Fails with [`Error::InvalidImportName`] unless `name` is a legal import identifier.
pub fn validate_import_name(name: &str) -> Result<()> {
    let re = Regex::new(IMPORT_NAME_PATTERN)?;
    if !re.is_match(name) {
        return Err(Error::InvalidImportName(name.to_string()));
    }
    Ok(())
}

/// Derives the compact interpreter token used by build tooling.
///
/// Surrounding whitespace is ignored, so `" 3.11 "` yields `py311`.
///
/// # Errors
/// * [`Error::InvalidPythonVersion`] when the value is not `major.minor`
pub fn python_target_version(python_min_version: &str) -> Result<String> {
    let re = Regex::new(PYTHON_VERSION_PATTERN)?;
    let caps = re
        .captures(python_min_version.trim())
        .ok_or_else(|| Error::InvalidPythonVersion(python_min_version.to_string()))?;
    Ok(format!("{TARGET_VERSION_PREFIX}{}{}", &caps[1], &caps[2]))
}
