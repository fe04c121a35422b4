use std::sync::Arc;

use music_library::infra::config::Config;
use music_library::infra::logger::Logger;
use music_library::infra::state::AppState;
use music_library::presentation;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let config = Config::init()?;

    Logger::init(config.app.env)?;

    let state = AppState::init(&config).await?;

    let listener =
        TcpListener::bind((config.app.host.as_str(), config.app.port)).await?;

    tracing::info!(
        "Starting server on http://{}/v{}",
        listener.local_addr()?,
        config.api.version
    );

    presentation::rest::listen(listener, Arc::new(state)).await?;

    Ok(())
}
