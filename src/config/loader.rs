//! Configuration loading and key extraction

use crate::config::types::SetupConfig;
use crate::constants::keys;
use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

impl SetupConfig {
    /// Reads and parses the YAML configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound { path: path.display().to_string() });
        }
        log::debug!("Loading configuration from '{}'", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Parses configuration text. `path` is only used in error messages.
    pub fn from_yaml_str<P: AsRef<Path>>(content: &str, path: P) -> Result<Self> {
        let path = path.as_ref().display().to_string();
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigParseError { path: path.clone(), e: e.to_string() })?;

        let data = match value {
            Value::Mapping(mapping) => mapping,
            // An empty document behaves like an empty mapping.
            Value::Null => Mapping::new(),
            _ => {
                return Err(Error::ConfigParseError {
                    path,
                    e: "top-level value must be a mapping".to_string(),
                })
            }
        };

        let fields = Fields { data: &data, path: &path };
        Ok(SetupConfig {
            distribution_name: fields.require(keys::DISTRIBUTION_NAME)?,
            import_name: fields.require(keys::IMPORT_NAME)?,
            description: fields.require(keys::DESCRIPTION)?,
            url: fields.require(keys::URL)?,
            author: fields.require(keys::AUTHOR)?,
            author_email: fields.optional(keys::AUTHOR_EMAIL),
            python_min_version: fields.require(keys::PYTHON_MIN_VERSION)?,
            version: fields.require(keys::VERSION)?,
            default_branch: fields.require(keys::DEFAULT_BRANCH)?,
            year: fields.require(keys::YEAR)?,
        })
    }
}

struct Fields<'a> {
    data: &'a Mapping,
    path: &'a str,
}

impl Fields<'_> {
    fn require(&self, key: &str) -> Result<String> {
        self.data.get(key).and_then(scalar_to_string).ok_or_else(|| Error::ConfigKeyError {
            key: key.to_string(),
            path: self.path.to_string(),
        })
    }

    fn optional(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(scalar_to_string)
    }
}

/// Non-empty strings and non-zero integers; anything else counts as absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            let rendered = n.to_string();
            (rendered != "0").then_some(rendered)
        }
        _ => None,
    }
}
