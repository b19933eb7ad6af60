use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::rewrite::operation::SetupOperation;

/// Renames `root/current` to `root/new`.
///
/// No-op when the names match or the source is gone (a previous run already
/// renamed it). Refuses to touch an existing destination.
pub fn rename_package_dir<P: AsRef<Path>>(
    root: P,
    current: &str,
    new: &str,
    dry_run: bool,
) -> Result<SetupOperation> {
    let root = root.as_ref();
    if current == new {
        return Ok(SetupOperation::AlreadyRenamed { target: PathBuf::from(new) });
    }

    let source = root.join(current);
    let target = root.join(new);
    if !source.exists() {
        log::debug!("'{}' does not exist, assuming it was already renamed", source.display());
        return Ok(SetupOperation::AlreadyRenamed { target: PathBuf::from(new) });
    }
    if target.exists() {
        return Err(Error::TargetDirectoryExists { target: target.display().to_string() });
    }

    if !dry_run {
        std::fs::rename(&source, &target)?;
    }
    Ok(SetupOperation::RenameDirectory {
        source: PathBuf::from(current),
        target: PathBuf::from(new),
    })
}

/// Reads `path`, applies `transform`, and writes the result back only when it
/// differs from the original. Returns whether the content changed.
pub fn rewrite_file<P, F>(path: P, transform: F, dry_run: bool) -> Result<bool>
where
    P: AsRef<Path>,
    F: FnOnce(&str) -> Result<String>,
{
    let path = path.as_ref();
    let original = std::fs::read_to_string(path).map_err(|e| Error::ProcessError {
        target_path: path.display().to_string(),
        e: e.to_string(),
    })?;

    let updated = transform(&original)?;
    if updated == original {
        return Ok(false);
    }

    if !dry_run {
        std::fs::write(path, updated).map_err(|e| Error::ProcessError {
            target_path: path.display().to_string(),
            e: e.to_string(),
        })?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_placeholder_directory() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("template_package")).unwrap();
        fs::write(root.path().join("template_package/__init__.py"), "").unwrap();

        let op = rename_package_dir(root.path(), "template_package", "pkg", false).unwrap();

        assert_eq!(
            op,
            SetupOperation::RenameDirectory {
                source: PathBuf::from("template_package"),
                target: PathBuf::from("pkg"),
            }
        );
        assert!(!root.path().join("template_package").exists());
        assert!(root.path().join("pkg/__init__.py").exists());
    }

    #[test]
    fn same_name_is_a_noop_even_if_directory_exists() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("template_package")).unwrap();

        let op =
            rename_package_dir(root.path(), "template_package", "template_package", false).unwrap();

        assert!(matches!(op, SetupOperation::AlreadyRenamed { .. }));
        assert!(root.path().join("template_package").exists());
    }

    #[test]
    fn missing_source_with_existing_target_is_a_noop() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("pkg")).unwrap();

        let op = rename_package_dir(root.path(), "template_package", "pkg", false).unwrap();

        assert_eq!(op, SetupOperation::AlreadyRenamed { target: PathBuf::from("pkg") });
        assert!(root.path().join("pkg").is_dir());
    }

    #[test]
    fn existing_target_is_a_conflict() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("template_package")).unwrap();
        fs::create_dir(root.path().join("pkg")).unwrap();

        let err = rename_package_dir(root.path(), "template_package", "pkg", false).unwrap_err();

        assert!(matches!(err, Error::TargetDirectoryExists { .. }));
        assert!(root.path().join("template_package").is_dir());
    }

    #[test]
    fn dry_run_rename_leaves_tree_alone() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("template_package")).unwrap();

        let op = rename_package_dir(root.path(), "template_package", "pkg", true).unwrap();

        assert!(op.is_change());
        assert!(root.path().join("template_package").is_dir());
        assert!(!root.path().join("pkg").exists());
    }

    #[test]
    fn rewrite_writes_changed_content() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("file.txt");
        fs::write(&path, "hello").unwrap();

        let changed = rewrite_file(&path, |s| Ok(s.replace("hello", "bye")), false).unwrap();

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "bye");
    }

    #[test]
    fn rewrite_skips_write_when_unchanged() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("file.txt");
        fs::write(&path, "hello").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let changed = rewrite_file(&path, |s| Ok(s.to_string()), false).unwrap();

        assert!(!changed);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn rewrite_dry_run_reports_without_writing() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("file.txt");
        fs::write(&path, "hello").unwrap();

        let changed = rewrite_file(&path, |_| Ok("bye".to_string()), true).unwrap();

        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn rewrite_of_missing_file_is_a_process_error() {
        let root = TempDir::new().unwrap();
        let err = rewrite_file(root.path().join("nope"), |s| Ok(s.to_string()), false).unwrap_err();
        assert!(matches!(err, Error::ProcessError { .. }));
    }
}
