use anyhow::Result;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, SyncCommand};
pub use exit_status::ExitStatus;

mod args;
pub mod commands;
mod exit_status;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Sync(cmd)) => commands::sync::sync(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
