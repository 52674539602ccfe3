//! `connectsafely` command-line entry point.
//!
//! Composition root: loads configuration, installs the tracing subscriber,
//! builds the HTTP client and node registry, and dispatches a subcommand.
//! Result JSON goes to stdout; logs go to stderr.

mod config;
mod input;
mod parameters;
mod report;
mod telemetry;

use std::path::PathBuf;

use anyhow::{bail, Result};
use api_client::ConnectSafelyClient;
use clap::{Parser, Subcommand};
use nodes::{run_node, NodeRegistry};
use tracing::info;

use crate::config::Config;
use crate::parameters::ItemOverlay;
use crate::telemetry::Telemetry;

/// Run ConnectSafely LinkedIn nodes from the command line.
#[derive(Parser)]
#[command(name = "connectsafely")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "connectsafely.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered nodes
    Nodes,

    /// Print a node's parameter schema as JSON
    Describe {
        /// Registry name, e.g. `linkedInActions`
        node: String,
    },

    /// Execute a node over a list of items
    Run {
        /// Registry name of the node to run
        #[arg(long)]
        node: String,

        /// JSON object with the node's parameter values
        #[arg(long)]
        parameters: PathBuf,

        /// JSON array of input items; each object's fields override the parameters
        #[arg(long)]
        items: Option<PathBuf>,

        /// Record upstream failures as results instead of stopping
        #[arg(long)]
        continue_on_fail: bool,
    },

    /// Check the configured API key against the API
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let telemetry = Telemetry::init(&config.telemetry, cli.verbose)?;

    let outcome = dispatch(cli.command, &config).await;

    telemetry.shutdown();
    outcome
}

async fn dispatch(command: Commands, config: &Config) -> Result<()> {
    let registry = NodeRegistry::with_overrides(&config.base_url_overrides());

    match command {
        Commands::Nodes => {
            for node in registry.iter() {
                let description = node.description();
                println!(
                    "{:<24} {:<26} {}",
                    description.name, description.display_name, description.base_url
                );
            }
            Ok(())
        }
        Commands::Describe { node } => {
            let node = registry.get(&node)?;
            println!("{}", serde_json::to_string_pretty(node.description())?);
            Ok(())
        }
        Commands::Run {
            node,
            parameters,
            items,
            continue_on_fail,
        } => {
            let node = registry.get(&node)?;
            let source = ItemOverlay::new(input::parameters_from(input::read_json(&parameters)?)?);
            let items = match items {
                Some(path) => input::items_from(input::read_json(&path)?)?,
                None => input::default_items(),
            };
            let client = ConnectSafelyClient::new(config.credential()?, &config.client())?;

            let outcome = run_node(node, &source, &client, &items, continue_on_fail).await;
            if let Ok(output) = &outcome {
                info!(
                    run_id = %output.summary.run_id,
                    succeeded = output.summary.succeeded,
                    failed = output.summary.failed,
                    "run finished"
                );
            }

            let report = report::report(&outcome)?;
            println!("{}", report.stdout);
            match report.abort {
                Some(message) => bail!(message),
                None => Ok(()),
            }
        }
        Commands::Verify => {
            let client = ConnectSafelyClient::new(config.credential()?, &config.client())?;
            let base_url = client.credential().base_url().to_owned();
            match client.verify().await {
                Ok(payload) => {
                    info!(%base_url, "API key accepted");
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                    Ok(())
                }
                Err(failure) => {
                    let status = failure
                        .status
                        .map_or_else(|| "Unknown".to_owned(), |s| s.to_string());
                    bail!(
                        "credential verification failed (Status: {status}): {}",
                        failure.api_message()
                    )
                }
            }
        }
    }
}
