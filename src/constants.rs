//! Constants used throughout repo-setup

/// Configuration file name, resolved against the repository root
pub const CONFIG_FILENAME: &str = "one_time_setup_config.yaml";

/// Stand-in package directory and distribution name shipped with the template
pub const PLACEHOLDER_PACKAGE: &str = "template_package";

/// Prefix of the compact interpreter version token ("3.11" -> "py311")
pub const TARGET_VERSION_PREFIX: &str = "py";

/// Printed once every step has finished
pub const COMPLETION_MESSAGE: &str = "One-time setup complete. Review changes and commit them.";

/// Prefix for operation messages when nothing is written
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Files rewritten in place, relative to the repository root
pub mod targets {
    pub const SETUP_PY: &str = "setup.py";
    pub const PYPROJECT_TOML: &str = "pyproject.toml";
    pub const MANIFEST_IN: &str = "MANIFEST.in";
    pub const MAKEFILE: &str = "Makefile";
    pub const LICENSE: &str = "LICENSE";
    pub const WORKFLOWS_DIR: &str = ".github/workflows";
    pub const TEST_WORKFLOW: &str = "test.yml";
    pub const PUBLISH_WORKFLOW: &str = "publish.yml";
    pub const PACKAGE_INIT: &str = "__init__.py";
}

/// Configuration keys
pub mod keys {
    pub const DISTRIBUTION_NAME: &str = "distribution_name";
    pub const IMPORT_NAME: &str = "import_name";
    pub const DESCRIPTION: &str = "description";
    pub const URL: &str = "url";
    pub const AUTHOR: &str = "author";
    pub const AUTHOR_EMAIL: &str = "author_email";
    pub const PYTHON_MIN_VERSION: &str = "python_min_version";
    pub const VERSION: &str = "version";
    pub const DEFAULT_BRANCH: &str = "default_branch";
    pub const YEAR: &str = "year";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
