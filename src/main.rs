use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use harvest::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = harvest::mcp::run_server() {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match harvest::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
