//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::constants::{DEFAULT_SESSION_TTL_HOURS, DEFAULT_SHORT_CODE_LENGTH};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL for generating short links
    pub base_url: String,
    /// Length of generated short codes
    pub short_code_length: usize,
    /// Secret used to sign session tokens
    pub session_secret: String,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
    /// Seed the store with demo users and URLs at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `BASE_URL`: Base URL for short links (default: "http://{host}:{port}")
    /// - `SHORT_CODE_LENGTH`: Length of generated codes (default: 6)
    /// - `SESSION_SECRET`: Secret for signing session tokens (default: dev secret)
    /// - `SESSION_TTL_HOURS`: Session lifetime in hours (default: 24)
    /// - `SEED_DEMO_DATA`: Seed demo users and URLs at startup (default: true)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Self {
            host,
            port,
            base_url,
            short_code_length: env::var("SHORT_CODE_LENGTH")
                .unwrap_or_else(|_| DEFAULT_SHORT_CODE_LENGTH.to_string())
                .parse()
                .expect("SHORT_CODE_LENGTH must be a valid number"),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "tinylink-dev-secret-change-me".to_string()),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_HOURS.to_string())
                .parse()
                .expect("SESSION_TTL_HOURS must be a valid number"),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            short_code_length: DEFAULT_SHORT_CODE_LENGTH,
            session_secret: "tinylink-dev-secret-change-me".to_string(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            seed_demo_data: true,
        }
    }
}
