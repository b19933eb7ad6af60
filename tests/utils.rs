#![allow(dead_code)]

use repo_setup::cli::{run, Args};
use repo_setup::constants::CONFIG_FILENAME;
use repo_setup::rewrite::SetupReport;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const TEMPLATE_FIXTURE: &str = "tests/fixtures/template_repo";
pub const EXPECTED_FIXTURE: &str = "tests/fixtures/expected_repo";

/// Copies the template repository fixture into a fresh temp directory.
pub fn copy_template_repo() -> TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let fixture = Path::new(TEMPLATE_FIXTURE);
    for entry in WalkDir::new(fixture).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(fixture).unwrap();
        let dest = tmp_dir.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
    tmp_dir
}

pub fn args_for(root: &Path, dry_run: bool) -> Args {
    Args { root: root.to_path_buf(), config: PathBuf::from(CONFIG_FILENAME), verbose: 2, dry_run }
}

pub fn run_setup(root: &Path) -> repo_setup::error::Result<SetupReport> {
    run(args_for(root, false))
}

/// Every path under `root` mapped to its bytes (directories map to `None`).
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = entry.file_type().is_file().then(|| fs::read(entry.path()).unwrap());
            (rel, content)
        })
        .collect()
}

/// Rewrites one `key: value` line of the copied configuration file.
pub fn set_config_line(root: &Path, key: &str, line: Option<&str>) {
    let path = root.join(CONFIG_FILENAME);
    let content = fs::read_to_string(&path).unwrap();
    let prefix = format!("{key}:");
    let updated: Vec<String> = content
        .lines()
        .filter_map(|l| {
            if l.starts_with(&prefix) {
                line.map(str::to_string)
            } else {
                Some(l.to_string())
            }
        })
        .collect();
    fs::write(&path, updated.join("\n") + "\n").unwrap();
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> HashSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", content1);
            println!("  --- Expected content:\n{}", content2);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` matches the expected repository fixture.
pub fn assert_matches_expected(actual: &Path) {
    let different = dir_diff::is_different(actual, EXPECTED_FIXTURE).unwrap();
    if different {
        print_dir_diff(actual, Path::new(EXPECTED_FIXTURE));
        panic!("Directories differ. See above for details.");
    }
}
