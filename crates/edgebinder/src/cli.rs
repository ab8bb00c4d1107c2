//! Subcommands of the `edgebinder` binary
//!
//! | Command | Description |
//! |---------|-------------|
//! | `resolve [--instance NAME]` | Resolve an instance and report its adapter |
//! | `adapters` | List adapter types known to the registry and container |
//! | `instances` | List configured instance names |

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use edgebinder_application::{EdgeBinderFactory, global_registry};
use edgebinder_domain::constants::{ADAPTER_SERVICE_PREFIX, DEFAULT_INSTANCE};
use edgebinder_infrastructure::{AppConfig, ConfigLoader, init_services};

/// Command line interface for EdgeBinder
#[derive(Parser, Debug)]
#[command(name = "edgebinder")]
#[command(about = "EdgeBinder - Persistence adapter resolution")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve an instance and print the adapter backing it
    Resolve {
        /// Instance name
        #[arg(short, long, default_value = DEFAULT_INSTANCE)]
        instance: String,
    },
    /// List available adapter types
    Adapters,
    /// List configured instances
    Instances,
}

/// Load the configuration named on the command line (or discovered)
pub fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    loader.load().context("Failed to load configuration")
}

/// Run `command` against `config`, writing results to `out`
pub fn execute<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Resolve { instance } => {
            let services = init_services(config);
            let resolved = EdgeBinderFactory::new()
                .resolve_adapter(&services.as_container(), instance)
                .with_context(|| format!("Failed to resolve instance \"{instance}\""))?;
            writeln!(
                out,
                "{instance}: {} via {} ({})",
                resolved.adapter_type,
                resolved.strategy,
                resolved.adapter.adapter_name()
            )?;
        }
        Command::Adapters => {
            for (name, description) in global_registry().describe() {
                writeln!(out, "{name}\tregistry\t{description}")?;
            }
            for service in init_services(config).service_names() {
                if let Some(name) = service.strip_prefix(ADAPTER_SERVICE_PREFIX) {
                    writeln!(out, "{name}\tcontainer\t{service}")?;
                }
            }
        }
        Command::Instances => {
            for name in config.instance_names() {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}
