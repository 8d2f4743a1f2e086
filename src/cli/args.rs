//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan sources, classify strings, assign keys and sync locales
//! - `sync`: Propagate the base locale's structure to the other locales
//! - `classify`: Show how individual strings are classified
//! - `init`: Write a default `.harvestrc.json`
//! - `serve`: Start the MCP server

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Overrides;

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(args)) => args.common.verbose,
            Some(Command::Sync(args)) => args.common.verbose,
            Some(Command::Classify(args)) => args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Base locale (overrides config file)
    #[arg(long)]
    pub base_locale: Option<String>,

    /// Number of extraction workers (overrides config file)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source_root: self.source_root.clone(),
            messages_root: self.messages_root.clone(),
            base_locale: self.base_locale.clone(),
            workers: self.workers,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write locale files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually write locale files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Texts to classify
    #[arg(required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into the base locale and sync the others
    Extract(ExtractArgs),
    /// Copy keys missing from other locales over from the base locale
    Sync(SyncArgs),
    /// Show whether each text would be accepted for translation, and why not
    Classify(ClassifyArgs),
    /// Initialize a new .harvestrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
