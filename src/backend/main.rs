/**
 * Chatline Server Entry Point
 *
 * Loads configuration from the environment (and `.env` if present),
 * initializes tracing and serves the Axum app until the process exits.
 */

use chatline::backend::server::{create_app, load_config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = load_config().inspect_err(|e| {
        tracing::error!("[STARTUP] Invalid configuration: {}", e);
    })?;
    let addr = config.bind_address();
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
