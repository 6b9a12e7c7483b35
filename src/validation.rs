//! Validation rules for rename inputs.
//!
//! Pure functions apart from the directory check, which stats the path.

use crate::error::{RenameError, Result};
use std::path::Path;

/// Characters that would let a destination name escape the directory.
const FORBIDDEN_PREFIX_CHARS: &[char] = &['/', '\\', '\0'];

/// Checks that `dir` exists and is a directory.
pub fn validate_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || !dir.is_dir() {
        return Err(RenameError::InvalidDirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Validates the prefix used to build `{prefix}_{index}{ext}`.
///
/// ## Rules
/// - Not empty
/// - No path separators or NUL
/// - Not `.` or `..`
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(RenameError::InvalidPrefix(
            prefix.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if let Some(ch) = prefix.chars().find(|c| FORBIDDEN_PREFIX_CHARS.contains(c)) {
        return Err(RenameError::InvalidPrefix(
            prefix.to_string(),
            format!("contains forbidden character {:?}", ch),
        ));
    }

    if prefix == "." || prefix == ".." {
        return Err(RenameError::InvalidPrefix(
            prefix.to_string(),
            "cannot be a relative path component".to_string(),
        ));
    }

    Ok(())
}

/// True when `name` is a single path component naming an entry of the
/// directory itself (no separators, not `.` or `..`).
pub fn is_plain_file_name(name: &str) -> bool {
    let path = Path::new(name);
    !name.contains(FORBIDDEN_PREFIX_CHARS)
        && path.file_name().is_some_and(|file_name| file_name == name)
}
