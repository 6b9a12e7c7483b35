use crate::config::{ExtensionSet, Settings};
use crate::error::{RenameError, Result};
use crate::fs::UndoLog;
use crate::naming::{
    IndexPattern, RenamePlan, RenamedFile, SkipReason, SkippedFile, build_plan, next_index,
    scan_candidates,
};
use crate::validation::{validate_directory, validate_prefix};
use std::fs;
use std::path::Path;

/// Inputs of one rename batch.
#[derive(Debug, Clone, Copy)]
pub struct RenameRequest<'a> {
    pub directory: &'a Path,
    /// New stem prefix; files become `{prefix}_{index}{ext}`.
    pub prefix: &'a str,
    /// Files whose stem starts with this are left alone. Empty means none.
    pub skip_prefix: Option<&'a str>,
    pub extensions: &'a ExtensionSet,
}

/// Result of [`Renamer::rename`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// No file in the directory has a selected extension.
    NoImages,
    /// The batch ran; `renamed` may be empty when every candidate was skipped.
    Renamed {
        renamed: Vec<RenamedFile>,
        skipped: Vec<SkippedFile>,
    },
}

impl RenameOutcome {
    /// Human-readable summary.
    pub fn message(&self) -> String {
        match self {
            RenameOutcome::NoImages => "No image files found in the selected folder.".to_string(),
            RenameOutcome::Renamed { renamed, .. } => {
                format!("Renamed {} image(s).", renamed.len())
            }
        }
    }

    /// Applied renames as `(old, new)` in application order.
    pub fn renamed(&self) -> &[RenamedFile] {
        match self {
            RenameOutcome::NoImages => &[],
            RenameOutcome::Renamed { renamed, .. } => renamed,
        }
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        match self {
            RenameOutcome::NoImages => &[],
            RenameOutcome::Renamed { skipped, .. } => skipped,
        }
    }
}

/// Renames the images of a directory to a sequential scheme.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    settings: Settings,
}

impl Renamer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Computes the batch without touching the file system.
    ///
    /// Returns `Ok(None)` when the directory holds no candidate files.
    pub fn plan(&self, request: &RenameRequest<'_>) -> Result<Option<RenamePlan>> {
        validate_directory(request.directory)?;
        validate_prefix(request.prefix)?;

        let candidates = scan_candidates(
            request.directory,
            request.extensions,
            &self.settings.undo_log_name,
        )?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let pattern = IndexPattern::new(request.prefix)?;
        let start_index = next_index(&pattern, candidates.iter().map(|c| c.stem.as_str()));
        log::debug!(
            "Numbering '{}' files from {} in {}",
            request.prefix,
            start_index,
            request.directory.display()
        );

        let plan = build_plan(
            &candidates,
            request.prefix,
            request.skip_prefix,
            start_index,
            |name| request.directory.join(name).exists(),
        );

        Ok(Some(plan))
    }

    /// Plans and applies the batch. See [`Renamer::apply`].
    pub fn rename(&self, request: &RenameRequest<'_>) -> Result<RenameOutcome> {
        let Some(plan) = self.plan(request)? else {
            log::info!("No image files in {}", request.directory.display());
            return Ok(RenameOutcome::NoImages);
        };

        self.apply(request.directory, plan)
    }

    /// Applies `plan` in `dir`, then records it as the directory's undo log
    /// (only when at least one file was renamed).
    ///
    /// The first failed move aborts the batch with
    /// [`RenameError::RenameFailed`]. Renames applied before the failure are
    /// still recorded so they can be undone. If the batch succeeds but the log
    /// cannot be written, [`RenameError::UndoLogNotWritten`] carries the
    /// applied renames.
    pub fn apply(&self, dir: &Path, plan: RenamePlan) -> Result<RenameOutcome> {
        let RenamePlan {
            renames,
            mut skipped,
            ..
        } = plan;
        let mut applied = Vec::with_capacity(renames.len());

        for step in renames {
            let from = dir.join(&step.old);
            let to = dir.join(&step.new);

            // Re-checked here: the plan's view of the directory may be stale.
            if to.exists() {
                log::debug!("Skipping {}: {} already exists", step.old, step.new);
                skipped.push(SkippedFile {
                    name: step.old,
                    reason: SkipReason::DestinationExists,
                });
                continue;
            }

            if let Err(source) = fs::rename(&from, &to) {
                log::warn!(
                    "Rename of {} failed; aborting after {} file(s)",
                    step.old,
                    applied.len()
                );
                if let Err(err) = self.record(dir, &applied) {
                    log::warn!("Could not record {} applied rename(s): {}", applied.len(), err);
                }
                return Err(RenameError::RenameFailed { from, to, source });
            }

            log::debug!("Renamed: {} → {}", step.old, step.new);
            applied.push(step);
        }

        if let Err(err) = self.record(dir, &applied) {
            return Err(RenameError::UndoLogNotWritten {
                path: UndoLog::path_in(dir, &self.settings),
                renamed: applied,
                source: Box::new(err),
            });
        }

        log::info!(
            "Renamed {} image(s), skipped {} in {}",
            applied.len(),
            skipped.len(),
            dir.display()
        );

        Ok(RenameOutcome::Renamed {
            renamed: applied,
            skipped,
        })
    }

    fn record(&self, dir: &Path, applied: &[RenamedFile]) -> Result<()> {
        if applied.is_empty() {
            return Ok(());
        }
        UndoLog::save(&UndoLog::path_in(dir, &self.settings), applied)?;
        Ok(())
    }
}
