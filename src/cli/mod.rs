//! CLI module for the user service

pub mod serve;

use clap::{Parser, Subcommand};

/// User service - CRUD HTTP API for the User resource
#[derive(Parser)]
#[command(name = "user-service")]
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
