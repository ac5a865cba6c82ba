//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::check::CheckArgs;

#[derive(Parser, Debug)]
#[command(name = "envgate")]
#[command(about = "Envgate - validate the startup environment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the environment, printing the result
    Check(CheckArgs),

    /// Print the fields the environment must provide
    Schema,
}
