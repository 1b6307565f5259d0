//! auth-server - bootstrap host for the auth provider registry
//!
//! Loads configuration, seeds the data tree, builds the provider registry and
//! acts as the connection layer for diagnostic commands.

mod config;
mod registered_providers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use auth_provider::{InMemorySecretStore, ProviderCatalog, ProviderRegistry};
use auth_provider_sdk::{ConnectionAuth, ConnectionContext, ServiceHandle};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "auth-server")]
#[command(version, about = "Pluggable authentication provider host")]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the registered schemes
    Providers,
    /// Authenticate one connection with one or more credentials
    Authenticate {
        /// Authentication scheme
        #[arg(short, long)]
        scheme: String,
        /// Credential bytes, sent in order on the same connection
        #[arg(required = true)]
        credentials: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting auth-server");

    let store: Arc<InMemorySecretStore> = Arc::new(config.secrets.into_iter().collect());
    let service = ServiceHandle::new(store);
    let registry = ProviderRegistry::builder()
        .with_catalog(ProviderCatalog::from_inventory())
        .with_config(config.auth_provider)
        .build(&service);

    match cli.command {
        Command::Providers => {
            for scheme in registry.list_providers() {
                println!("{scheme}");
            }
        }
        Command::Authenticate {
            scheme,
            credentials,
        } => {
            let mut conn = ConnectionAuth::new();
            for credential in &credentials {
                let status = registry.authenticate(&mut conn, &scheme, credential.as_bytes());
                println!("{credential}: {status} ({})", status.code());
            }
            for identity in conn.auth_info() {
                println!("identity {identity}");
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    // Priority: --verbose, then RUST_LOG, then the configured level.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
