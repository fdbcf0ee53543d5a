//! HTTP server for Times of Fashion: serves the bundled article catalogue,
//! relays newsletter signups and guards the admin facade routes.

mod auth;
mod config;
mod handlers;
mod newsletter;
mod routes;
mod state;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env()?;
    tracing::info!("Starting Times of Fashion backend server");

    let app_state = state::AppState::new(&config)?;
    tracing::info!("Loaded {} articles", app_state.article_count());
    tracing::info!("Newsletter provider: {}", app_state.newsletter().provider());

    let app = routes::create_router(app_state);

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
