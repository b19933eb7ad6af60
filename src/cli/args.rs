use crate::constants::{verbosity, CONFIG_FILENAME};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for repo-setup.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Repository root holding the template files.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Configuration file, relative to ROOT.
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Report what would change without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    /// Location of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config)
    }
}

/// Parse command line arguments, exiting with usage on malformed input.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
