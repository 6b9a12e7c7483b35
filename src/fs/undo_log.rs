//! Single-generation undo log.
//!
//! Each managed directory holds at most one log, stored inside it under
//! [`Settings::undo_log_name`](crate::config::Settings). The file is a JSON
//! array of `[new_name, old_name]` pairs in the order the renames were
//! applied:
//!
//! ```json
//! [["img_0.jpg","beach.jpg"],["img_1.png","sunset.png"]]
//! ```
//!
//! Writing a log replaces the previous one; undoing consumes and deletes it.

use crate::config::Settings;
use crate::error::{RenameError, Result};
use crate::naming::RenamedFile;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One recorded rename, serialized as `[new, old]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry(pub String, pub String);

impl LogEntry {
    /// Name the file was given.
    pub fn new_name(&self) -> &str {
        &self.0
    }

    /// Name the file had before.
    pub fn old_name(&self) -> &str {
        &self.1
    }
}

impl From<&RenamedFile> for LogEntry {
    fn from(renamed: &RenamedFile) -> Self {
        LogEntry(renamed.new.clone(), renamed.old.clone())
    }
}

/// A loaded undo log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoLog {
    path: PathBuf,
    entries: Vec<LogEntry>,
}

impl UndoLog {
    /// Location of the log for `dir`.
    pub fn path_in(dir: &Path, settings: &Settings) -> PathBuf {
        dir.join(&settings.undo_log_name)
    }

    /// Loads the log at `path`.
    ///
    /// Returns `Ok(None)` when there is no log. A log that exists but does not
    /// parse is a [`RenameError::MalformedLog`].
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RenameError::Io(e)),
        };

        let entries =
            serde_json::from_str(&content).map_err(|source| RenameError::MalformedLog {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Some(Self {
            path: path.to_path_buf(),
            entries,
        }))
    }

    /// Writes `renames` to `path`, replacing any existing log.
    pub fn save(path: &Path, renames: &[RenamedFile]) -> Result<Self> {
        let entries: Vec<LogEntry> = renames.iter().map(LogEntry::from).collect();

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &entries).map_err(io::Error::from)?;
        writer.flush()?;

        log::info!(
            "Wrote undo log with {} entr{}: {}",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" },
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Deletes the log file. A log that is already gone is not an error.
    pub fn remove(self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RenameError::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn renamed(old: &str, new: &str) -> RenamedFile {
        RenamedFile {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    #[test]
    fn test_save_writes_new_old_pairs() {
        let temp = TempDir::new().unwrap();
        let path = UndoLog::path_in(temp.path(), &Settings::default());

        UndoLog::save(
            &path,
            &[renamed("a.jpg", "img_0.jpg"), renamed("b.png", "img_1.png")],
        )
        .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"[["img_0.jpg","a.jpg"],["img_1.png","b.png"]]"#);
    }

    #[test]
    fn test_load_accepts_spaced_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");
        fs::write(&path, r#"[["img_0.jpg", "a.jpg"], ["img_1.png", "b.png"]]"#).unwrap();

        let log = UndoLog::load(&path).unwrap().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].new_name(), "img_1.png");
        assert_eq!(log.entries()[1].old_name(), "b.png");
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");
        assert!(UndoLog::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");
        fs::write(&path, "{not json").unwrap();

        let err = UndoLog::load(&path).unwrap_err();
        assert!(matches!(err, RenameError::MalformedLog { .. }));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");
        fs::write(&path, r#"[["only-one"]]"#).unwrap();

        assert!(matches!(
            UndoLog::load(&path),
            Err(RenameError::MalformedLog { .. })
        ));
    }

    #[test]
    fn test_save_overwrites_previous_generation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");

        UndoLog::save(&path, &[renamed("a.jpg", "img_0.jpg")]).unwrap();
        UndoLog::save(&path, &[renamed("b.jpg", "img_1.jpg")]).unwrap();

        let log = UndoLog::load(&path).unwrap().unwrap();
        assert_eq!(log.entries(), &[LogEntry("img_1.jpg".into(), "b.jpg".into())]);
    }

    #[test]
    fn test_remove_deletes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".undo_log.json");

        let log = UndoLog::save(&path, &[renamed("a.jpg", "img_0.jpg")]).unwrap();
        log.remove().unwrap();
        assert!(!path.exists());
    }
}
