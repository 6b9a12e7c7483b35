#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod ops;
pub mod validation;

pub use config::{ExtensionSet, Settings};
pub use error::*;
pub use naming::{RenamedFile, SequenceIndex, SkipReason, SkippedFile, parse_prefixed_index};
pub use ops::{RenameOutcome, RenameRequest, Renamer, UndoOutcome, Undoer};

pub fn run() -> Result<()> {
    use clap::Parser;
    use command::Command;

    let cli = cli::Cli::parse();
    if !validation::is_plain_file_name(&cli.log_name) {
        return Err(RenameError::InvalidLogName(cli.log_name));
    }
    let settings = Settings::with_undo_log_name(cli.log_name);
    match cli.command {
        Command::Rename(args) => command::rename::execute(args, settings),
        Command::Undo(args) => command::undo::execute(args, settings),
    }
}
