//! Rename planning.
//!
//! Given the sorted candidates and a starting index, decides for each file
//! whether it is renamed (and to what) or skipped (and why). Planning never
//! touches the file system; destination existence is asked through a
//! caller-supplied predicate.

use super::index::SequenceIndex;
use super::scan::Candidate;

/// One rename, applied or planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    pub old: String,
    pub new: String,
}

/// Why a candidate was left under its current name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Stem starts with the user's skip prefix.
    SkipPrefix,
    /// Stem already starts with `{prefix}_`.
    AlreadyPrefixed,
    /// The computed destination name is taken.
    DestinationExists,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::SkipPrefix => "matches skip prefix",
            SkipReason::AlreadyPrefixed => "already renamed",
            SkipReason::DestinationExists => "destination exists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// Ordered rename decisions for one directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenamePlan {
    /// First index handed out.
    pub start_index: SequenceIndex,
    /// Renames in application order.
    pub renames: Vec<RenamedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

/// `{prefix}_{index}{extension}`; `extension` carries its dot.
pub fn destination_name(prefix: &str, index: &SequenceIndex, extension: &str) -> String {
    format!("{}_{}{}", prefix, index, extension)
}

/// Plans the renames for `candidates`, which must already be sorted.
///
/// An empty `skip_prefix` counts as none. Skip-prefix and already-prefixed
/// files do not consume an index. A file whose destination already exists is
/// skipped and its index is not handed to any later file, leaving a gap in
/// the numbering.
pub fn build_plan<F>(
    candidates: &[Candidate],
    prefix: &str,
    skip_prefix: Option<&str>,
    start_index: SequenceIndex,
    destination_exists: F,
) -> RenamePlan
where
    F: Fn(&str) -> bool,
{
    let skip_prefix = skip_prefix.filter(|skip| !skip.is_empty());
    let done_marker = format!("{}_", prefix);
    let mut index = start_index.clone();
    let mut plan = RenamePlan {
        start_index,
        ..RenamePlan::default()
    };

    for candidate in candidates {
        let reason = if skip_prefix.is_some_and(|skip| candidate.stem.starts_with(skip)) {
            Some(SkipReason::SkipPrefix)
        } else if candidate.stem.starts_with(&done_marker) {
            Some(SkipReason::AlreadyPrefixed)
        } else {
            None
        };

        if let Some(reason) = reason {
            log::debug!("Skipping {}: {}", candidate.name, reason.describe());
            plan.skipped.push(SkippedFile {
                name: candidate.name.clone(),
                reason,
            });
            continue;
        }

        let new = destination_name(prefix, &index, &candidate.extension);
        index = index.next();

        if destination_exists(&new) {
            log::debug!("Skipping {}: {} already exists", candidate.name, new);
            plan.skipped.push(SkippedFile {
                name: candidate.name.clone(),
                reason: SkipReason::DestinationExists,
            });
            continue;
        }

        plan.renames.push(RenamedFile {
            old: candidate.name.clone(),
            new,
        });
    }

    plan
}
