//! # BIOS Task Configuration Validator
//!
//! Checks an SCP topology file the same way the task does before it runs,
//! and prints the endpoint the updateComponents request would go to.

use anyhow::Context;
use bios_config_task::config::ConfigManager;
use bios_config_task::task::TaskDefinition;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "bios-config-validator")]
#[command(about = "Validate the SCP service topology used by the configure-BIOS task")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Topology file (default: $BIOS_TASK_SMI_CONFIG or config/smiConfig.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the topology and print the updateComponents endpoint
    Validate,

    /// Print the task registration metadata as JSON
    Definition,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _ = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    let result = match &cli.command {
        Some(Commands::Definition) => print_definition(),
        Some(Commands::Validate) | None => validate(&cli),
    };

    if let Err(e) = result {
        error!("Configuration validation failed: {:#}", e);
        eprintln!("Configuration validation failed: {e:#}");
        process::exit(1);
    }
}

fn validate(cli: &Cli) -> anyhow::Result<()> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::load_from_file(path),
        None => ConfigManager::load(),
    }
    .context("loading topology")?;

    let topology = manager
        .resolver()
        .resolve()
        .context("resolving SCP configuration service")?;
    let endpoint = &topology.endpoint;

    println!("Source:   {}", manager.source().display());
    println!("Protocol: {}", endpoint.protocol);
    println!("Host:     {}", endpoint.host);
    match endpoint.port {
        Some(port) => println!("Port:     {port}"),
        None => println!("Port:     (scheme default)"),
    }
    println!("Path:     {}", topology.update_components_path());

    if cli.verbose > 0 {
        let sanitized = serde_json::to_string_pretty(&manager.debug_config())
            .context("serializing loaded configuration")?;
        println!("Loaded configuration:\n{sanitized}");
    }

    info!("Configuration validation completed successfully");
    Ok(())
}

fn print_definition() -> anyhow::Result<()> {
    let definition = serde_json::to_string_pretty(&TaskDefinition::configure_bios())
        .context("serializing task definition")?;
    println!("{definition}");
    Ok(())
}
