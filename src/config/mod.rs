//! Configuration module for the roster client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

use reqwest::Url;

use crate::errors::{ClientError, Result};

/// Default location of the roster service.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the roster service
    pub api_base_url: Url,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Plain text or JSON log lines
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw_url =
            env::var("ROSTER_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(&raw_url).map_err(|e| {
            ClientError::Config(format!("Invalid ROSTER_API_BASE_URL {:?}: {}", raw_url, e))
        })?;
        if api_base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "ROSTER_API_BASE_URL {:?} cannot carry a path",
                raw_url
            )));
        }

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("ROSTER_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            api_base_url,
            log_level,
            log_format,
        })
    }
}
