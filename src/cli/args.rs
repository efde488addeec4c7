//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Verify localized .resx files contain all keys from the default file
//! - `sync`: Copy missing `<data>` entries from the default file into localized files

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the default .resx file (e.g. FloweryStrings.resx)
    pub default_resx: PathBuf,

    /// Directory containing localized .resx files (defaults to the default file's parent)
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: CommonArgs,

    /// Only sync keys that start with this prefix (e.g. Theme_)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Print what would change, but do not write files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify that all localized .resx files contain all keys from the default file
    Check(CheckCommand),
    /// Copy missing <data> entries from the default .resx file into localized files
    Sync(SyncCommand),
}
