//! CLI module for the account API

pub mod serve;

use clap::{Parser, Subcommand};

/// Account API - minimal user-account HTTP service
#[derive(Parser)]
#[command(name = "account-api")]
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
