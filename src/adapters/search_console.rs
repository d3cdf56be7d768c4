use crate::domain::model::{AccessToken, SitesListResponse};
use crate::domain::ports::SitesApi;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::Client;

const SITES_PATH: &str = "webmasters/v3/sites";

pub struct SearchConsoleClient {
    base_url: String,
    client: Client,
}

impl SearchConsoleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn sites_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), SITES_PATH)
    }

    async fn request_sites(&self, token: &AccessToken) -> Result<SitesListResponse> {
        let url = self.sites_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(body);
            return Err(CheckError::api(format!("HTTP {}: {}", status, detail.trim())));
        }

        let sites: SitesListResponse = response.json().await?;
        Ok(sites)
    }
}

#[async_trait]
impl SitesApi for SearchConsoleClient {
    async fn list_sites(&self, token: &AccessToken) -> Result<SitesListResponse> {
        self.request_sites(token).await.map_err(|e| match e {
            CheckError::ApiError { .. } => e,
            other => CheckError::api(other.to_string()),
        })
    }
}
