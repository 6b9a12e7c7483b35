use crate::command::Command;
use crate::config::DEFAULT_UNDO_LOG;
use clap::Parser;

#[derive(Parser)]
#[command(name = "img-sequence", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Name of the undo log kept inside the folder
    #[arg(long, global = true, value_name = "FILE", default_value = DEFAULT_UNDO_LOG)]
    pub log_name: String,
}
