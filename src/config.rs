use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};
use crate::scan::ScanStrategy;

/// Placeholder value shipped in example configs. A key equal to this was never
/// set by the operator, so startup refuses it outright.
pub const PLACEHOLDER_API_KEY: &str = "PASTE_YOUR_API_KEY_HERE";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TRENDS_BASE_URL: &str = "https://trends.google.com";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub trends_base_url: String,
    pub trends_geo: String,
    pub strategy: ScanStrategy,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Credential is validated once here; handlers assume it is usable
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;
        validate_api_key(&gemini_api_key)?;

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let strategy = match env::var("SCAN_STRATEGY") {
            Ok(value) => ScanStrategy::from_str(&value)?,
            Err(_) => ScanStrategy::LiveTrends,
        };

        let gemini_base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let trends_base_url = env::var("TRENDS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TRENDS_BASE_URL.to_string());
        let trends_geo = env::var("TRENDS_GEO").unwrap_or_else(|_| "US".to_string());

        Ok(Config {
            server_addr,
            gemini_api_key,
            gemini_base_url,
            trends_base_url,
            trends_geo,
            strategy,
        })
    }
}

/// Rejects unusable credentials at startup instead of on the first request.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(AppError::ConfigError("GEMINI_API_KEY is empty".to_string()));
    }
    if key == PLACEHOLDER_API_KEY {
        return Err(AppError::ConfigError(
            "GEMINI_API_KEY is still the placeholder value".to_string(),
        ));
    }
    Ok(())
}
