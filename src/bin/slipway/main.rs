//! Slipway CLI - configure, build, and package netCDF-C

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("slipway=debug")
    } else {
        EnvFilter::new("slipway=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Deps(args) => commands::deps::execute(args),
        Commands::Flags(args) => commands::flags::execute(args),
        Commands::Describe(args) => commands::describe::execute(args),
        Commands::Configure(args) => commands::configure::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
