//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and passed explicitly into the components that need it. There is
//! no ambient global lookup after boot.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (e.g. `sqlite://webmonitor.db`); if unset,
//!   built from `DB_PATH` (default: `webmonitor.db`)
//! - `GROQ_API_KEY` - Summarization credential (optional; summaries degrade
//!   to a fixed placeholder without it)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Summarization credential. `None` disables the external service.
    pub groq_api_key: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let groq_api_key = env::var("GROQ_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            groq_api_key,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Loads the database URL with fallback to a plain file path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `DB_PATH` (default: `webmonitor.db`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| "webmonitor.db".to_string());
        format!("sqlite://{path}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether a summarization credential is configured.
    pub fn is_llm_enabled(&self) -> bool {
        self.groq_api_key.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);

        match &self.groq_api_key {
            Some(key) => {
                tracing::info!("  Summarization: enabled (key {})", mask_api_key(key));
            }
            None => tracing::info!("  Summarization: disabled (GROQ_API_KEY not set)"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping just enough of the prefix and
/// suffix to tell keys apart.
fn mask_api_key(key: &str) -> String {
    if key.chars().count() <= 11 {
        return "***".to_string();
    }

    let prefix: String = key.chars().take(7).collect();
    let suffix: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{prefix}...{suffix}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(
            mask_api_key("gsk_1234567890abcdefgh"),
            "gsk_123...efgh"
        );
        assert_eq!(mask_api_key("short"), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            database_url: "sqlite://test.db".to_string(),
            groq_api_key: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Non-SQLite database URL
        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite://test.db".to_string();

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_database_url_from_db_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("DB_PATH", "custom.db");
        }

        assert_eq!(Config::load_database_url(), "sqlite://custom.db");

        // Cleanup
        unsafe {
            env::remove_var("DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("DB_PATH", "from-path.db");
        }

        let url = Config::load_database_url();
        assert_eq!(url, "sqlite://from-url.db");

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_blank_api_key_counts_as_unset() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("GROQ_API_KEY", "   ");
        }

        let config = Config::from_env().unwrap();
        assert!(!config.is_llm_enabled());

        // Cleanup
        unsafe {
            env::remove_var("GROQ_API_KEY");
        }
    }
}
