use anyhow::Result;
use dotenv::dotenv;

use category_api::{config::AppConfig, observability, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    observability::init()?;

    let config = AppConfig::from_env();
    let state = AppState::from_config(&config);
    let app = category_api::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
