//! Realtime Database client configuration.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Environment variable holding the database endpoint URL.
pub const ENV_DATABASE_URL: &str = "FIRESYNC_DATABASE_URL";
/// Environment variable holding the database secret.
pub const ENV_SECRET: &str = "FIRESYNC_SECRET";

/// Configuration for the Realtime Database REST client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeDbConfig {
    /// Database endpoint URL (e.g. `https://myapp.firebaseio.com`).
    pub database_url: String,
    /// Database secret, appended as `?auth=…`. Empty means unauthenticated
    /// (public rules or emulator).
    pub secret: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RealtimeDbConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            secret: String::new(),
            timeout_secs: 30,
        }
    }
}

impl RealtimeDbConfig {
    /// Creates a config from an endpoint URL and secret.
    pub fn new(database_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Loads the config from `FIRESYNC_DATABASE_URL` / `FIRESYNC_SECRET`.
    ///
    /// The URL is required; a missing secret defaults to unauthenticated.
    pub fn from_env() -> StoreResult<Self> {
        let database_url = std::env::var(ENV_DATABASE_URL)
            .map_err(|_| StoreError::Config(format!("{ENV_DATABASE_URL} is not set")))?;
        let secret = std::env::var(ENV_SECRET).unwrap_or_default();
        Ok(Self::new(database_url, secret))
    }

    /// Validates that the endpoint URL is present and plausible.
    pub fn validate(&self) -> StoreResult<()> {
        if self.database_url.is_empty() {
            return Err(StoreError::Config("database_url is empty".to_string()));
        }
        if !self.database_url.starts_with("http://") && !self.database_url.starts_with("https://") {
            return Err(StoreError::Config(format!(
                "database_url must be an http(s) URL, got {:?}",
                self.database_url
            )));
        }
        Ok(())
    }
}
