use crate::constants::DRY_RUN_PREFIX;
use std::path::PathBuf;

/// Outcome of one setup step. Paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOperation {
    RenameDirectory { source: PathBuf, target: PathBuf },
    /// Placeholder directory is absent or already carries the import name.
    AlreadyRenamed { target: PathBuf },
    Rewrite { target: PathBuf },
    Unchanged { target: PathBuf },
    /// Optional artifact not present in this repository.
    Missing { target: PathBuf },
}

impl SetupOperation {
    /// Whether this step changes (or, in a dry run, would change) the tree.
    pub fn is_change(&self) -> bool {
        matches!(self, SetupOperation::RenameDirectory { .. } | SetupOperation::Rewrite { .. })
    }

    /// Returns a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };

        match self {
            SetupOperation::RenameDirectory { source, target } => {
                format!("{}Renaming '{}' to '{}'", prefix, source.display(), target.display())
            }
            SetupOperation::AlreadyRenamed { target } => {
                format!(
                    "{}Skipping rename to '{}' (nothing to rename)",
                    prefix,
                    target.display()
                )
            }
            SetupOperation::Rewrite { target } => {
                format!("{}Rewriting '{}'", prefix, target.display())
            }
            SetupOperation::Unchanged { target } => {
                format!("{}Skipping '{}' (already up to date)", prefix, target.display())
            }
            SetupOperation::Missing { target } => {
                format!("{}Skipping '{}' (not present)", prefix, target.display())
            }
        }
    }
}

/// Ordered record of everything a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub operations: Vec<SetupOperation>,
}

impl SetupReport {
    pub fn push(&mut self, operation: SetupOperation) {
        self.operations.push(operation);
    }

    pub fn extend(&mut self, operations: impl IntoIterator<Item = SetupOperation>) {
        self.operations.extend(operations);
    }

    /// Number of renames and rewrites.
    pub fn changed(&self) -> usize {
        self.operations.iter().filter(|op| op.is_change()).count()
    }
}
