//! Sequential naming: index parsing, candidate scanning and rename planning.
//!
//! Everything here is read-only with respect to the file system. Applying a
//! plan is the job of [`crate::ops`].

pub mod index;
pub mod plan;
pub mod scan;

pub use index::{IndexPattern, SequenceIndex, next_index, parse_prefixed_index};
pub use plan::{RenamePlan, RenamedFile, SkipReason, SkippedFile, build_plan, destination_name};
pub use scan::{Candidate, scan_candidates};
