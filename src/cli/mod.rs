//! CLI module for the Tabshare backend
//!
//! Provides subcommands for the two ways the backend runs:
//! - `serve`: the API server
//! - `backfill-profiles`: one-off creation of missing public profiles

pub mod backfill;
pub mod serve;

use clap::{Parser, Subcommand};

/// Tabshare backend - shared transaction groups and public profiles
#[derive(Parser)]
#[command(name = "tabshare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Create public profiles for users that do not have one yet
    BackfillProfiles,
}
