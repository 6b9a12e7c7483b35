use crate::config::Settings;
use crate::error::Result;
use crate::ops::{UndoOutcome, Undoer};
use crate::validation::validate_directory;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the `undo` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct UndoArgs {
    /// Folder whose last rename should be reverted
    pub directory: PathBuf,

    /// Show what would be restored without renaming anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn execute(args: UndoArgs, settings: Settings) -> Result<()> {
    validate_directory(&args.directory)?;
    let undoer = Undoer::new(settings);

    if args.dry_run {
        let Some(pending) = undoer.pending(&args.directory)? else {
            println!("{}", UndoOutcome::NoHistory.message().yellow());
            return Ok(());
        };

        if pending.is_empty() {
            println!("{}", "Undo log is empty; nothing to restore.".yellow());
            return Ok(());
        }

        println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
        println!("\n{} Pending undo ({})", "⏪".bold(), pending.path().display());
        for entry in pending.entries().iter().rev() {
            println!(
                "   {} → {}",
                entry.new_name().yellow(),
                entry.old_name().green()
            );
        }
        println!();
        println!(
            "{} recorded rename{}. Run without {} to restore.",
            pending.len().to_string().cyan().bold(),
            if pending.len() == 1 { "" } else { "s" },
            "--dry-run".cyan()
        );
        return Ok(());
    }

    let outcome = undoer.undo(&args.directory)?;

    match outcome {
        UndoOutcome::NoHistory => println!("{}", outcome.message().yellow()),
        UndoOutcome::Restored { restored, recorded } => {
            println!("{}", outcome.message().green().bold());
            if outcome.is_partial() {
                println!(
                    "{} {} of {} recorded rename{} could not be reversed",
                    "!".yellow().bold(),
                    recorded - restored,
                    recorded,
                    if recorded == 1 { "" } else { "s" }
                );
            }
        }
    }

    Ok(())
}
