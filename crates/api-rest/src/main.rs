//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server from this crate alone.
//!
//! ## Intended use
//! Useful when developing the API crate in isolation. The workspace's main `taskboard-run`
//! binary serves the same router and additionally loads a `.env` file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the taskboard REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:8000).
/// See [`api_rest::settings_from_env`] for the environment variables read.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the settings are invalid or the store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("taskboard_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = api_rest::settings_from_env()?;
    tracing::info!("-- Starting taskboard REST API on {}", settings.addr);

    api_rest::serve(settings).await
}
