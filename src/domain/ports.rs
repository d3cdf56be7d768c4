use crate::domain::model::{AccessToken, ServiceAccountKey, SitesListResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn fetch_token(&self, key: &ServiceAccountKey, scope: &str) -> Result<AccessToken>;
}

#[async_trait]
pub trait SitesApi: Send + Sync {
    async fn list_sites(&self, token: &AccessToken) -> Result<SitesListResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn key_path(&self) -> Option<&str>;
    fn api_base_url(&self) -> &str;
}
