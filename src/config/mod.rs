//! Configuration module.
//!
//! Loads configuration from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // MongoDB
    pub mongodb_uri: String,
    pub mongodb_database: String,

    /// Fill the directory lists at start-up.
    pub warm_on_start: bool,

    /// Breed whose horses get their own cached list.
    pub breed_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns error if `MONGODB_URI` is not set.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mongodb_uri = env::var("MONGODB_URI").context("MONGODB_URI must be set")?;

        let mongodb_database =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| "directory".to_string());

        let warm_on_start = env::var("WARM_ON_START")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        let breed_filter = env::var("BREED_FILTER")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            mongodb_uri,
            mongodb_database,
            warm_on_start,
            breed_filter,
        })
    }
}

/// Parse a boolean flag, `None` for anything unrecognised.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
