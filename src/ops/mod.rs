//! The two operations on a managed directory.
//!
//! [`Renamer`] applies a sequential rename batch and records it;
//! [`Undoer`] replays the recorded batch backwards and discards the record.
//! Both run synchronously to completion against one directory.

mod rename;
mod undo;

pub use rename::{RenameOutcome, RenameRequest, Renamer};
pub use undo::{UndoOutcome, Undoer};
