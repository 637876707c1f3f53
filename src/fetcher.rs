use crate::config::Config;
use crate::errors::{Result, TrackerError};
use crate::storage;
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Minimal Renshuu API client: one authenticated profile fetch per run.
#[derive(Debug)]
pub struct RenshuuClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RenshuuClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TrackerError::Config("RENSHUU_API_KEY is not set".to_string()))?;

        Ok(Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetches the profile object. Keeps the raw body on decode failure so
    /// the operator can see what the API actually returned.
    pub async fn fetch_profile(&self) -> Result<Value> {
        let url = format!("{}/profile", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TrackerError::Http { status, body });
        }

        serde_json::from_str(&body).map_err(|source| TrackerError::Decode {
            source,
            payload: body,
        })
    }

    /// One fetch-and-append run; a failed fetch never touches the log.
    pub async fn fetch_and_log(&self, log_path: &Path) -> Result<()> {
        let profile = self.fetch_profile().await?;
        storage::append_snapshot(log_path, profile).await?;
        info!("logged snapshot to {}", log_path.display());
        Ok(())
    }
}
