//! EdgeBinder - Entry Point
//!
//! Loads the configuration, initializes logging and runs one subcommand.

// Force-link edgebinder-providers to ensure linkme registrations are included
extern crate edgebinder_providers;

use std::io;

use clap::Parser;
use edgebinder::cli::{Cli, execute, load_config};
use edgebinder_infrastructure::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    execute(&cli.command, &config, &mut io::stdout().lock())
}
