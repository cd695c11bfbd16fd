//! CLI module for UserVault
//!
//! `serve` runs the HTTP API and is the default when no subcommand is given.

pub mod serve;

use clap::{Parser, Subcommand};

/// UserVault - CRUD service for user records
#[derive(Debug, Parser)]
#[command(name = "uservault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// The subcommand to run, falling back to `serve` with no overrides
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(serve::ServeArgs::default()))
    }
}
