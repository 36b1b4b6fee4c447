mod demo;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_catalog_core::{load_config, validate_config, Config, ConfigError};

/// Environment variable naming the config file
const CONFIG_ENV: &str = "MOVIE_CATALOG_CONFIG";

/// Config file used when `MOVIE_CATALOG_CONFIG` is unset
const DEFAULT_CONFIG_PATH: &str = "movie-catalog.toml";

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout carries the demo output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config_path = std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    info!("Loading configuration from {:?}", config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(path)) => {
            info!("No configuration at {}, using defaults", path);
            Config::default()
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to load config from {:?}", config_path))
        }
    };

    validate_config(&config).context("Configuration validation failed")?;

    let catalog = demo::build_catalog(&config);
    info!(
        "Catalog ready: {} movies, {} collections",
        catalog.len(),
        catalog.collections().len()
    );

    let stdout = io::stdout();
    demo::run_demo(&catalog, &config.display, &mut stdout.lock())
        .context("Failed to write demo output")?;

    Ok(())
}
