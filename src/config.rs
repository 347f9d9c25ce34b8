//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from
//! environment variables, with an optional `.env` file loaded first.
//! Everything has a default; bad values fail startup instead of being
//! silently corrected.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of records per `show all` page.
const DEFAULT_PAGE_SIZE: usize = 2;

/// Runtime configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per page for the `show all` listing (default: 2)
    pub page_size: usize,

    /// Fallback tracing filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_PAGE_SIZE`: records per `show all` page (default: 2, minimum 1)
    /// - `LOG_LEVEL`: fallback tracing filter (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("ROLODEX_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
