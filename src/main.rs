use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the taskboard service
///
/// Loads `.env`, opens the configured task store once, and serves the REST API until Ctrl-C.
///
/// # Environment Variables
/// - `TASKBOARD_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `TASK_DATA_DIR`: Directory for task documents (default: "task_data")
/// - `TASKBOARD_STORE`: `file` or `memory` (default: "file")
///
/// # Returns
/// * `Ok(())` - If the server starts, runs and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, store startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taskboard_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("taskboard_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = api_rest::settings_from_env()?;
    tracing::info!("++ Starting taskboard REST on {}", settings.addr);

    api_rest::serve(settings).await
}
