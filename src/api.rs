//! Simulated API endpoints
//!
//! Every handler returns a fixed payload; the "toggle" route deliberately flips
//! nothing. The only per-request computation is the root timestamp and the
//! uptime field of the system info reading.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Root status payload
#[derive(Serialize)]
pub struct ServerStatus {
    pub message: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// LED state as reported by the status route
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedStatus {
    pub is_on: bool,
    pub message: &'static str,
}

/// Result of an LED command (toggle, on, off)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedAction {
    pub is_on: bool,
    pub message: &'static str,
    pub success: bool,
}

/// Simulated system monitor reading
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub cpu_temperature: f64,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub uptime: u64,
    pub kernel_version: &'static str,
    pub fan_status: bool,
    pub fan_speed: u8,
}

/// Simulated CPU temperature reading
#[derive(Serialize)]
pub struct TemperatureReading {
    pub temperature: f64,
    pub unit: &'static str,
    pub status: &'static str,
}

/// API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }
}

/// `GET /` - reachability check with a fresh timestamp
pub async fn server_status() -> Json<ServerStatus> {
    Json(ServerStatus {
        message: "Test Server Attivo",
        service: "Node.js Test Server",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// `GET /api/led/status` - always reports the LED as off
pub async fn led_status() -> Json<LedStatus> {
    Json(LedStatus {
        is_on: false,
        message: "LED spento (simulato)",
    })
}

/// `POST /api/led/toggle` - fixed reply, flips no state
///
/// The request body is never read, so any payload (including malformed JSON)
/// gets the same response.
pub async fn led_toggle() -> Json<LedAction> {
    Json(LedAction {
        is_on: true,
        message: "LED toggle simulato",
        success: true,
    })
}

/// `POST /api/led/on`
pub async fn led_on() -> Json<LedAction> {
    Json(LedAction {
        is_on: true,
        message: "LED acceso (simulato)",
        success: true,
    })
}

/// `POST /api/led/off`
pub async fn led_off() -> Json<LedAction> {
    Json(LedAction {
        is_on: false,
        message: "LED spento (simulato)",
        success: true,
    })
}

/// `GET /api/system/info` - fixed readings plus process uptime
pub async fn system_info(State(state): State<Arc<AppState>>) -> Json<SystemInfo> {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(SystemInfo {
        cpu_temperature: 42.0,
        cpu_usage: 12.5,
        memory_usage: 35.0,
        disk_usage: 20.0,
        uptime,
        kernel_version: "simulato",
        fan_status: false,
        fan_speed: 0,
    })
}

/// `GET /api/system/temperature`
pub async fn system_temperature() -> Json<TemperatureReading> {
    Json(TemperatureReading {
        temperature: 42.0,
        unit: "°C",
        status: "OK",
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::ok("healthy"))
}
