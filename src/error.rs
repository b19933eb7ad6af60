use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file '{path}'. Original error: {e}")]
    ConfigParseError { path: String, e: String },

    /// A required key is absent, empty, or has a type other than string/integer.
    #[error("Missing or invalid '{key}' in {path}.")]
    ConfigKeyError { key: String, path: String },

    #[error("Invalid Python import name: {0}.")]
    InvalidImportName(String),

    #[error("python_min_version must be like '3.11', got '{0}'.")]
    InvalidPythonVersion(String),

    #[error("Cannot proceed: target package directory '{target}' already exists.")]
    TargetDirectoryExists { target: String },

    #[error("Invalid regular expression. Original error: {0}")]
    RegexError(#[from] regex::Error),

    /// A substitution rule whose pattern fails to compile.
    #[error("Invalid substitution rule '{rule}'. Original error: {e}")]
    RuleError { rule: String, e: regex::Error },

    #[error("Cannot rewrite the target path: '{target_path}'. Original error: {e}")]
    ProcessError { target_path: String, e: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
