//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the listener binds to
    pub bind: String,

    /// TCP port for the test server
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind: env::var("TEST_SERVER_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("TEST_SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
        }
    }
}
