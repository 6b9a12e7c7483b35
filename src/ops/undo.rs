use crate::config::Settings;
use crate::error::{RenameError, Result};
use crate::fs::UndoLog;
use crate::validation::{is_plain_file_name, validate_directory};
use std::fs;
use std::path::Path;

/// Result of [`Undoer::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The directory has no undo log.
    NoHistory,
    /// The log was replayed and deleted. `restored < recorded` means some
    /// entries no longer matched the directory.
    Restored { restored: usize, recorded: usize },
}

impl UndoOutcome {
    pub fn message(&self) -> String {
        match self {
            UndoOutcome::NoHistory => "No undo history found.".to_string(),
            UndoOutcome::Restored { restored, .. } => {
                format!("Restored {} file(s) to original names.", restored)
            }
        }
    }

    pub fn restored(&self) -> usize {
        match self {
            UndoOutcome::NoHistory => 0,
            UndoOutcome::Restored { restored, .. } => *restored,
        }
    }

    /// True when at least one recorded rename could not be reversed.
    pub fn is_partial(&self) -> bool {
        matches!(self, UndoOutcome::Restored { restored, recorded } if restored < recorded)
    }
}

/// Reverses the most recent rename batch of a directory.
#[derive(Debug, Clone, Default)]
pub struct Undoer {
    settings: Settings,
}

impl Undoer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Loads the pending undo record of `dir`, if any, without applying it.
    pub fn pending(&self, dir: &Path) -> Result<Option<UndoLog>> {
        validate_directory(dir)?;
        UndoLog::load(&UndoLog::path_in(dir, &self.settings))
    }

    /// Replays the undo log backwards, then deletes it.
    ///
    /// An entry is restored only when its new name exists and its old name is
    /// free; other entries are skipped and show up as a lower restored count.
    /// A failed move aborts and leaves the log in place; entries already
    /// restored are skipped on the next attempt since their new name is gone.
    pub fn undo(&self, dir: &Path) -> Result<UndoOutcome> {
        let Some(undo_log) = self.pending(dir)? else {
            log::info!("No undo log in {}", dir.display());
            return Ok(UndoOutcome::NoHistory);
        };

        let mut restored = 0;
        for entry in undo_log.entries().iter().rev() {
            let (new_name, old_name) = (entry.new_name(), entry.old_name());

            if !is_plain_file_name(new_name) || !is_plain_file_name(old_name) {
                log::warn!(
                    "Ignoring undo entry outside {}: {} → {}",
                    dir.display(),
                    new_name,
                    old_name
                );
                continue;
            }

            let current = dir.join(new_name);
            let original = dir.join(old_name);

            if !current.exists() {
                log::debug!("Cannot restore {}: {} is gone", old_name, new_name);
                continue;
            }
            if original.exists() {
                log::debug!("Cannot restore {}: name is taken", old_name);
                continue;
            }

            fs::rename(&current, &original).map_err(|source| RenameError::RenameFailed {
                from: current.clone(),
                to: original.clone(),
                source,
            })?;
            log::debug!("Restored: {} → {}", new_name, old_name);
            restored += 1;
        }

        let recorded = undo_log.len();
        undo_log.remove()?;

        if restored < recorded {
            log::warn!(
                "Restored {} of {} recorded rename(s) in {}",
                restored,
                recorded,
                dir.display()
            );
        } else {
            log::info!("Restored {} file(s) in {}", restored, dir.display());
        }

        Ok(UndoOutcome::Restored { restored, recorded })
    }
}
