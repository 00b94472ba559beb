//! Configuration module for the relief console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConsoleError;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    /// Path to the SQLite file mirroring the admin session
    pub session_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Per-request timeout
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConsoleError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("RELIEF_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConsoleError::Validation(format!(
                "Invalid RELIEF_API_URL: {}",
                api_base_url
            )));
        }

        let session_path = env::var("RELIEF_SESSION_PATH")
            .unwrap_or_else(|_| "./data/session.sqlite".to_string())
            .into();

        let log_level = env::var("RELIEF_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let timeout_secs = match env::var("RELIEF_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConsoleError::Validation(format!("Invalid RELIEF_HTTP_TIMEOUT_SECS: {}", raw))
            })?,
            Err(_) => 15,
        };

        Ok(Self {
            api_base_url,
            session_path,
            log_level,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ENV_LOCK;

    const VARS: [&str; 4] = [
        "RELIEF_API_URL",
        "RELIEF_SESSION_PATH",
        "RELIEF_LOG_LEVEL",
        "RELIEF_HTTP_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.session_path, PathBuf::from("./data/session.sqlite"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.http_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("RELIEF_API_URL", "https://relief.example.org/");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.api_base_url, "https://relief.example.org");
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("RELIEF_HTTP_TIMEOUT_SECS", "soon");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConsoleError::Validation(_))));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("RELIEF_API_URL", "localhost:5000");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConsoleError::Validation(_))));
    }
}
