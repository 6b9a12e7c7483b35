//! Candidate enumeration.

use crate::config::ExtensionSet;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// An image file directly inside the managed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full file name, e.g. `Beach.JPG`.
    pub name: String,
    /// File name without the extension, e.g. `Beach`.
    pub stem: String,
    /// Lowercased extension with leading dot, e.g. `.jpg`.
    pub extension: String,
}

/// Lists regular files in `dir` (non-recursive) whose extension is selected.
///
/// The result is sorted by file name. `excluded` names a file that is never a
/// candidate (the undo log). Names that are not valid UTF-8 are skipped.
pub fn scan_candidates(
    dir: &Path,
    extensions: &ExtensionSet,
    excluded: &str,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if name == excluded {
            continue;
        }

        let file = Path::new(&name);
        let (Some(stem), Some(ext)) = (
            file.file_stem().and_then(|s| s.to_str()),
            file.extension().and_then(|e| e.to_str()),
        ) else {
            continue;
        };

        if !extensions.matches(ext) {
            continue;
        }

        candidates.push(Candidate {
            stem: stem.to_string(),
            extension: format!(".{}", ext.to_lowercase()),
            name,
        });
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!(
        "Found {} candidate(s) in {}",
        candidates.len(),
        dir.display()
    );

    Ok(candidates)
}
