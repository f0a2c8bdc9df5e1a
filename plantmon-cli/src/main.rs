//! Plantmon CLI - command-line interface
//!
//! This binary runs the plant monitor daemon and a few helper commands on
//! top of the `plantmon` library.

mod commands;
mod error;

use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "plantmon", version, about = "Temperature and soil moisture monitor for a single plant")]
struct Cli {
    /// Configuration file (default: ~/.plantmon/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the monitoring daemon and HTTP API
    Start {
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<IpAddr>,

        /// HTTP port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// BCM pin of the soil moisture sensor (overrides config)
        #[arg(long)]
        soil_pin: Option<u32>,
    },

    /// Take a single reading and print it as JSON
    Read {
        /// Calibration offset to apply, clamped to ±10 °C
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset: f64,
    },

    /// Create the default configuration file
    Init,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Start {
            bind,
            port,
            soil_pin,
        } => commands::start::run(
            config_path,
            commands::start::StartArgs {
                bind,
                port,
                soil_pin,
            },
        ),
        Commands::Read { offset } => commands::read::run(config_path, offset),
        Commands::Init => commands::init::run(config_path),
        Commands::Config { command } => commands::config::run(config_path, command),
    }
}
