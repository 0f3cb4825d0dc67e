//! Firebase Realtime Database REST client.
//!
//! Every node in the database tree is addressable as
//! `{database_url}/{path}.json`; PUT overwrites, PATCH merges, DELETE
//! removes. The legacy database-secret scheme passes the credential as
//! an `auth` query parameter.

use crate::config::RealtimeDbConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::RemoteStore;
use async_trait::async_trait;
use firesync_types::{Attributes, RemotePath};
use reqwest::{Client, Method, Response};
use std::time::Duration;
use tracing::debug;

/// REST client for a Firebase Realtime Database.
///
/// Thread-safe and intended to be constructed once at startup and
/// shared (`Arc<dyn RemoteStore>`) by every replicator instance.
pub struct RealtimeDbClient {
    config: RealtimeDbConfig,
    client: Client,
}

impl RealtimeDbClient {
    /// Creates a new client from a validated config.
    pub fn new(config: RealtimeDbConfig) -> StoreResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");
        Ok(Self { config, client })
    }

    /// Creates a client from `FIRESYNC_DATABASE_URL` / `FIRESYNC_SECRET`.
    pub fn from_env() -> StoreResult<Self> {
        Self::new(RealtimeDbConfig::from_env()?)
    }

    /// The configured endpoint URL.
    pub fn database_url(&self) -> &str {
        &self.config.database_url
    }

    fn node_url(&self, path: &RemotePath) -> String {
        let base = self.config.database_url.trim_end_matches('/');
        format!("{base}/{path}.json")
    }

    async fn send(
        &self,
        method: Method,
        path: &RemotePath,
        payload: Option<&Attributes>,
    ) -> StoreResult<()> {
        let mut request = self.client.request(method.clone(), self.node_url(path));
        if !self.config.secret.is_empty() {
            request = request.query(&[("auth", self.config.secret.as_str())]);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        debug!("{} {} -> {}", method, path, response.status());
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> StoreResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(1);
            return Err(StoreError::RateLimited { retry_after_secs });
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteStore for RealtimeDbClient {
    fn provider_name(&self) -> &'static str {
        "Firebase Realtime Database"
    }

    async fn set(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()> {
        self.send(Method::PUT, path, Some(payload)).await
    }

    async fn update(&self, path: &RemotePath, payload: &Attributes) -> StoreResult<()> {
        self.send(Method::PATCH, path, Some(payload)).await
    }

    async fn delete(&self, path: &RemotePath) -> StoreResult<()> {
        self.send(Method::DELETE, path, None).await
    }
}
