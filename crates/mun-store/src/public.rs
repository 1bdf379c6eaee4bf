//! Anonymous client for the public datastore's REST interface.
//!
//! Construction never fails. A client built without a URL or key logs a
//! warning and reports [`StoreError::NotConfigured`] on its first request.

use async_trait::async_trait;
use mun_core::{Committee, PublicConfig, School};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::LookupDirectory;
use crate::error::StoreError;

/// Unprivileged handle to the secondary datastore.
#[derive(Clone)]
pub struct PublicClient {
    http: reqwest::Client,
    url: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct TeamRow {
    name: String,
}

impl PublicClient {
    pub fn new(url: impl Into<String>, key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        Self {
            http,
            url: url.into().trim_end_matches('/').to_string(),
            key: key.into(),
        }
    }

    /// Build the client from configuration, warning about missing values.
    pub fn from_config(config: &PublicConfig) -> Self {
        let url = config.resolve_url();
        let key = config.resolve_key();

        if url.is_none() {
            tracing::warn!(env = %config.url_env, "Public datastore URL is not set");
        }
        if key.is_none() {
            tracing::warn!(envs = ?config.key_envs, "Public datastore key is not set");
        }

        Self::new(
            url.unwrap_or_default(),
            key.unwrap_or_default(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET /rest/v1/{table}` with the given query parameters.
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        if self.url.is_empty() {
            return Err(StoreError::NotConfigured("url"));
        }
        if self.key.is_empty() {
            return Err(StoreError::NotConfigured("key"));
        }

        let endpoint = format!("{}/rest/v1/{}", self.url, table);
        tracing::debug!(%endpoint, "Querying public datastore");

        let response = self
            .http
            .get(&endpoint)
            .query(params)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%endpoint, status = status.as_u16(), "Public datastore request failed");
            return Err(StoreError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LookupDirectory for PublicClient {
    async fn list_schools(&self) -> Result<Vec<School>, StoreError> {
        self.select("schools", &[("select", "id,name"), ("order", "name.asc")])
            .await
    }

    async fn list_committees(&self) -> Result<Vec<Committee>, StoreError> {
        self.select("committees", &[("select", "id,name"), ("order", "name.asc")])
            .await
    }

    async fn system_staff_teams(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<TeamRow> = self
            .select("system_staff_teams", &[("select", "name"), ("order", "name.asc")])
            .await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}
