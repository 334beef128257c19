//! Number classifier HTTP server binary.
//!
//! Loads configuration, builds the Numbers API client, sets up the HTTP router
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin numclass-server
//!
//! # With a TOML configuration file
//! NUMCLASS_CONFIG=numclass.toml cargo run --bin numclass-server
//! ```
//!
//! See [`numclass::config`] for the recognized environment variables.
//! `RUST_LOG` sets the log level (default: info).

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use numclass::config::{self, ServiceConfig};
use numclass::facts::NumbersApiClient;
use numclass::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` may set RUST_LOG, so apply it before the subscriber reads the filter
    let dotenv_path = config::load_dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting number classifier HTTP server");
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = ServiceConfig::load()?;
    info!(max_magnitude = config.server.max_magnitude, "Configuration loaded");

    let facts = NumbersApiClient::new(&config.facts)?;
    info!(
        base_url = %config.facts.base_url,
        timeout_ms = config.facts.timeout_ms,
        fallback = config.facts.fallback_fact.is_some(),
        "Numbers API client initialized"
    );

    let state = AppState::from_config(&config, Arc::new(facts));
    let app = create_router(state, &config.server.allowed_origins);

    let addr = config.server.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Try: http://{}/api/classify-number?number=371", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
