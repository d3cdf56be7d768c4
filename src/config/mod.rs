pub mod credentials;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_base_url, validate_key_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gsc-check")]
#[command(about = "Test Google Search Console connection with a service-account key")]
pub struct CheckConfig {
    #[arg(long, help = "Path to service account JSON key file")]
    pub key_path: Option<String>,

    #[arg(long, env = "GSC_API_BASE_URL", default_value = DEFAULT_API_BASE_URL, hide = true)]
    pub api_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            key_path: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CheckConfig {
    /// An empty `--key-path` counts as not given.
    fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref().filter(|path| !path.is_empty())
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.key_path() {
            validate_key_path("key_path", Path::new(path))?;
        }
        validate_api_base_url("api_base_url", &self.api_base_url)?;
        Ok(())
    }
}
