use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, classify::classify, extract::extract, init::init, sync::sync,
    },
};

/// Dispatches to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(args)) => extract(args),
        Some(Command::Sync(args)) => sync(args),
        Some(Command::Classify(args)) => classify(args),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve is handled in main.rs before run().
            bail!("Serve command should be handled before run()")
        }
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
