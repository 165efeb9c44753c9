//! OMNIA connectivity test server - Main entry point
//!
//! Stand-in for the real GPIO device API: every route returns fixed, simulated
//! JSON so frontends can verify reachability before the device is wired up.

mod api;
mod config;
mod router;

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Shared application state
pub struct AppState {
    /// Process start time, used for the simulated uptime reading
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self { started_at: Utc::now() }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,omnia_test_server=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let state = Arc::new(AppState::new());

    let app = router::create_router(state);

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Test server attivo su porta {}", config.port);
    tracing::info!("Questo è solo un test per verificare la connettività");

    axum::serve(listener, app).await?;

    Ok(())
}
