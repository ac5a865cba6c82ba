//! Envgate CLI entry point.

use anyhow::Result;
use clap::Parser;

use envgate::cli::commands::{check, schema};
use envgate::cli::{handle_error, Cli, Commands};
use envgate::infrastructure::config::ConfigLoader;
use envgate::infrastructure::logging::LoggerImpl;

fn run(cli: &Cli) -> Result<()> {
    let settings = ConfigLoader::load()?;
    LoggerImpl::init(&ConfigLoader::log_config(&settings)?)?;

    match &cli.command {
        Commands::Check(args) => check::execute(args, &settings.dotenv, cli.json),
        Commands::Schema => schema::execute(cli.json),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        handle_error(&err, cli.json);
    }
}
