//! Tripwise - Terminal travel planner
//!
#![doc = "Tripwise - Terminal travel planner"]
#![doc = "Main entry point for the Tripwise application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tripwise::cli::{Cli, Commands};
use tripwise::commands;
use tripwise::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    // Execute command
    match cli.command {
        Commands::Search { search } => commands::search::run_search(config, search.into()).await,
        Commands::Autobook { search, passenger } => {
            commands::booking::run_autobook(config, search.into(), passenger).await
        }
        Commands::Book {
            flight_id,
            passenger,
        } => commands::booking::run_book(config, flight_id, passenger).await,
        Commands::Chat => commands::chat::run_chat(config).await,
        Commands::History => commands::account::run_history(config).await,
        Commands::Profile => commands::account::run_profile(config).await,
        Commands::Health => commands::health::run_health(config).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "tripwise=debug" } else { "tripwise=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
