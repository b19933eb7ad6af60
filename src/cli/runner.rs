use crate::{
    cli::Args,
    config::SetupConfig,
    constants::{COMPLETION_MESSAGE, PLACEHOLDER_PACKAGE},
    error::Result,
    ioutils::rename_package_dir,
    rewrite::{default_rewriters, RewriteContext, RewriteProcessor, SetupOperation, SetupReport},
};
use std::path::{Path, PathBuf};

/// Runs the one-time setup: load, validate, rename, rewrite, report.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes every step in order. The first error aborts the run; files
    /// rewritten before it stay rewritten.
    pub fn run(self) -> Result<SetupReport> {
        let root = self.args.root.as_path();
        let dry_run = self.args.dry_run;

        let config = self.load_and_validate_config()?;

        let mut report = SetupReport::default();

        // Rename first: later rewriters address files inside the package dir.
        let rename = rename_package_dir(root, PLACEHOLDER_PACKAGE, &config.import_name, dry_run)?;
        log::info!("{}", rename.get_message(dry_run));
        let package_dir = self.current_package_dir(&rename, &config);
        report.push(rename);

        let context = RewriteContext { config: &config, package_dir: &package_dir };
        let processor = RewriteProcessor::new(root, context, dry_run);
        report.extend(processor.process_all(&default_rewriters())?);

        log::debug!("{} of {} steps changed the tree", report.changed(), report.operations.len());

        println!("{COMPLETION_MESSAGE}");
        Ok(report)
    }

    /// Loads the configuration and runs every check before anything is mutated.
    fn load_and_validate_config(&self) -> Result<SetupConfig> {
        let config = SetupConfig::load(self.args.config_path())?;
        config.validate()?;
        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// A dry run leaves the placeholder in place, so its files are read there.
    fn current_package_dir(&self, rename: &SetupOperation, config: &SetupConfig) -> PathBuf {
        match rename {
            SetupOperation::RenameDirectory { source, .. } if self.args.dry_run => source.clone(),
            _ => Path::new(&config.import_name).to_path_buf(),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<SetupReport> {
    let runner = Runner::new(args);
    runner.run()
}
