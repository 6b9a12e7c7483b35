pub mod rename;
pub mod undo;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Rename the images in a folder to PREFIX_0.ext, PREFIX_1.ext, ...
    Rename(rename::RenameArgs),
    /// Restore the names changed by the last rename in a folder.
    Undo(undo::UndoArgs),
}
