#![recursion_limit = "256"]

mod config;
mod mail;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::mail::MailRelay;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // Initialize mail relay (non-fatal: contact form answers 503 if config missing).
    let mail: Option<Arc<dyn MailRelay>> = match mail::MailClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider(), "mail relay initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "mail relay not configured, contact form disabled");
            None
        }
    };

    let state = state::AppState::new(mail);

    let app = routes::app(state, &config.assets_dir).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
