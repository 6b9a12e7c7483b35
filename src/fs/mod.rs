//! Persisted state on the file system.
//!
//! The only durable state is the per-directory undo log.

pub mod undo_log;

pub use undo_log::{LogEntry, UndoLog};
