use crate::config::{ExtensionSet, Settings};
use crate::error::{RenameError, Result};
use crate::naming::{RenamedFile, SkippedFile};
use crate::ops::{RenameRequest, Renamer};
use crate::validation::{validate_directory, validate_prefix};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Rows of the rename table shown before eliding the rest.
const MAX_ROWS: usize = 50;

/// Arguments for the `rename` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenameArgs {
    /// Folder containing the images
    pub directory: PathBuf,

    /// New file name prefix; files become PREFIX_<n>.<ext>
    #[arg(long, short = 'p')]
    pub prefix: String,

    /// Leave files whose name starts with this prefix untouched
    #[arg(long, short = 's', value_name = "PREFIX")]
    pub skip_prefix: Option<String>,

    /// Image types to include (default: all)
    ///
    /// Repeat the flag or separate with commas:
    ///   --ext jpg --ext png
    ///   --ext jpg,jpeg,png
    ///
    /// Supported: jpg, jpeg, png, gif, bmp, tiff, webp
    #[arg(
        long = "ext",
        short = 'e',
        value_name = "EXT",
        value_delimiter = ',',
        verbatim_doc_comment
    )]
    pub extensions: Vec<String>,

    /// Show the planned renames without applying them
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl RenameArgs {
    /// Selected extensions; no `--ext` means every supported type.
    pub fn extension_set(&self) -> Result<ExtensionSet> {
        if self.extensions.is_empty() {
            Ok(ExtensionSet::all())
        } else {
            ExtensionSet::new(&self.extensions)
        }
    }
}

pub fn execute(args: RenameArgs, settings: Settings) -> Result<()> {
    validate_directory(&args.directory)?;
    validate_prefix(&args.prefix)?;
    let extensions = args.extension_set()?;

    log::debug!(
        "Renaming in {} with prefix '{}' for {}",
        args.directory.display(),
        args.prefix,
        extensions.iter().collect::<Vec<_>>().join(", ")
    );

    let request = RenameRequest {
        directory: &args.directory,
        prefix: &args.prefix,
        skip_prefix: args.skip_prefix.as_deref(),
        extensions: &extensions,
    };
    let renamer = Renamer::new(settings);

    if args.dry_run {
        let Some(plan) = renamer.plan(&request)? else {
            println!("{}", "No image files found in the selected folder.".yellow());
            return Ok(());
        };

        println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
        print_renames(&plan.renames, true);
        print_skipped(&plan.skipped);

        println!();
        if plan.is_empty() {
            println!("{}", "Nothing to rename.".yellow());
            return Ok(());
        }
        println!(
            "{} {} would be renamed. Run without {} to apply.",
            plan.renames.len().to_string().cyan().bold(),
            if plan.renames.len() == 1 { "image" } else { "images" },
            "--dry-run".cyan()
        );
        return Ok(());
    }

    let outcome = match renamer.rename(&request) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let RenameError::UndoLogNotWritten { renamed, .. } = &err {
                print_renames(renamed, false);
            }
            return Err(err);
        }
    };

    if outcome.renamed().is_empty() {
        println!("{}", outcome.message().yellow());
    } else {
        println!("{}", outcome.message().green().bold());
    }
    print_renames(outcome.renamed(), false);
    print_skipped(outcome.skipped());

    Ok(())
}

fn print_renames(renames: &[RenamedFile], dry_run: bool) {
    if renames.is_empty() {
        return;
    }

    println!("\n{} Renamed files", "📝".bold());
    for renamed in renames.iter().take(MAX_ROWS) {
        if dry_run {
            println!("   {} → {}", renamed.old.yellow(), renamed.new.green());
        } else {
            println!("   {} {} → {}", "✓".green(), renamed.old, renamed.new.green());
        }
    }
    if renames.len() > MAX_ROWS {
        println!("   • ... and {} more", renames.len() - MAX_ROWS);
    }
}

fn print_skipped(skipped: &[SkippedFile]) {
    if skipped.is_empty() {
        return;
    }

    println!(
        "\n{} Skipped ({} file{})",
        "⏭".bold(),
        skipped.len(),
        if skipped.len() == 1 { "" } else { "s" }
    );
    for file in skipped.iter().take(MAX_ROWS) {
        println!("   • {} {}", file.name.dimmed(), file.reason.describe().dimmed());
    }
    if skipped.len() > MAX_ROWS {
        println!("   • ... and {} more", skipped.len() - MAX_ROWS);
    }
}
