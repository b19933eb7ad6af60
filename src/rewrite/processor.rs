use super::operation::SetupOperation;
use super::{FileRewriter, RewriteContext};
use crate::error::Result;
use crate::ioutils::rewrite_file;
use std::path::Path;

/// Drives [`FileRewriter`]s against files under a repository root.
pub struct RewriteProcessor<'a> {
    root: &'a Path,
    context: RewriteContext<'a>,
    dry_run: bool,
}

impl<'a> RewriteProcessor<'a> {
    pub fn new(root: &'a Path, context: RewriteContext<'a>, dry_run: bool) -> Self {
        Self { root, context, dry_run }
    }

    /// Runs one rewriter over each of its targets. Each operation is logged
    /// as soon as it completes, so earlier steps are visible if a later one fails.
    pub fn process(&self, rewriter: &dyn FileRewriter) -> Result<Vec<SetupOperation>> {
        let mut operations = Vec::new();
        for target in rewriter.targets(&self.context) {
            let path = self.root.join(&target);
            if !path.is_file() {
                log::debug!("[{}] '{}' not found", rewriter.name(), target.display());
                self.record(&mut operations, SetupOperation::Missing { target });
                continue;
            }

            let changed = rewrite_file(
                &path,
                |text| rewriter.rewrite(&target, text, &self.context),
                self.dry_run,
            )?;
            log::debug!("[{}] '{}' changed: {}", rewriter.name(), target.display(), changed);

            let operation = if changed {
                SetupOperation::Rewrite { target }
            } else {
                SetupOperation::Unchanged { target }
            };
            self.record(&mut operations, operation);
        }
        Ok(operations)
    }

    fn record(&self, operations: &mut Vec<SetupOperation>, operation: SetupOperation) {
        log::info!("{}", operation.get_message(self.dry_run));
        operations.push(operation);
    }

    /// Runs `rewriters` in order, stopping at the first error.
    pub fn process_all(&self, rewriters: &[Box<dyn FileRewriter>]) -> Result<Vec<SetupOperation>> {
        let mut operations = Vec::new();
        for rewriter in rewriters {
            operations.extend(self.process(rewriter.as_ref())?);
        }
        Ok(operations)
    }
}
