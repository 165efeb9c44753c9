//! Route table for the test server
//!
//! Mirrors the device API surface with simulated handlers. CORS is wide open so
//! browser frontends on other origins can probe the server; anything not listed
//! here falls through to the framework's 404.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::AppState;

/// Build the application router with the global middleware applied
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::server_status))
        // LED (simulated)
        .route("/api/led/status", get(api::led_status))
        .route("/api/led/toggle", post(api::led_toggle))
        .route("/api/led/on", post(api::led_on))
        .route("/api/led/off", post(api::led_off))
        // System monitor (simulated)
        .route("/api/system/info", get(api::system_info))
        .route("/api/system/temperature", get(api::system_temperature))
        // System
        .route("/health", get(api::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
