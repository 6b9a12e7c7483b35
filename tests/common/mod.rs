//! Shared helpers for the img-sequence integration tests.
//!
//! Tests build a throwaway image folder and drive the binary through
//! `assert_cmd`, the same way a user would.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a folder holding the given (empty-ish) image files.
#[allow(unused)]
pub fn create_image_dir(names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in names {
        write_file(temp.path(), name);
    }
    temp
}

/// Writes `name` with its own name as content, so moves can be traced.
#[allow(unused)]
pub fn write_file(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).unwrap();
}

/// Sorted file names in `dir`.
#[allow(unused)]
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

/// Runs `img-sequence rename DIR --prefix PREFIX ...`.
#[allow(unused)]
pub fn run_rename(dir: &Path, prefix: &str, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("img-sequence");
    cmd.env("NO_COLOR", "1")
        .arg("rename")
        .arg(dir)
        .arg("--prefix")
        .arg(prefix)
        .args(extra_args);

    cmd.assert()
}

/// Runs `img-sequence undo DIR ...`.
#[allow(unused)]
pub fn run_undo(dir: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("img-sequence");
    cmd.env("NO_COLOR", "1").arg("undo").arg(dir).args(extra_args);

    cmd.assert()
}
