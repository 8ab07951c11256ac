//! CLI module for the identity API

pub mod serve;

use clap::{Parser, Subcommand};

/// Identity API - user registration and JWT session service
#[derive(Parser)]
#[command(name = "identity-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
