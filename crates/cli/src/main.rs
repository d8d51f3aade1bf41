//! Elegant Context CLI - Catalog and cart session tools.
//!
//! # Usage
//!
//! ```bash
//! # List the products in the catalog
//! ec-cli catalog
//!
//! # Replay a scripted cart session
//! ec-cli cart run session.yaml
//!
//! # Walk through the add/decrement demo on product p1
//! ec-cli cart demo
//! ```
//!
//! # Commands
//!
//! - `catalog` - List products with formatted prices
//! - `cart run` - Dispatch a YAML/JSON list of actions and show the cart
//! - `cart demo` - Built-in add, add, decrement, decrement walkthrough

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, LogFormat};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "ec-cli")]
#[command(author, version, about = "Elegant Context CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalog
    Catalog,
    /// Run cart sessions
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Replay a YAML or JSON list of cart actions
    Run {
        /// Path to the script (`.json` for JSON, anything else is YAML)
        script: PathBuf,

        /// Log and skip actions the cart rejects instead of stopping
        #[arg(short, long)]
        keep_going: bool,
    },
    /// Add p1 twice, then decrement it back to an empty cart
    Demo,
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "elegant_context_cli=info,elegant_context_core=info".into());

    let json_layer = (format == LogFormat::Json)
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (format == LogFormat::Text).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Catalog => commands::catalog::list(config).await?,
        Commands::Cart { action } => match action {
            CartCommand::Run { script, keep_going } => {
                commands::cart::run(config, &script, keep_going).await?;
            }
            CartCommand::Demo => commands::cart::demo(config).await?,
        },
    }
    Ok(())
}
