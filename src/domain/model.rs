use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// A service-account key file, kept exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceAccountKey {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl ServiceAccountKey {
    pub fn new(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    pub fn client_email(&self) -> Option<&str> {
        self.get("client_email")
    }

    pub fn project_id(&self) -> Option<&str> {
        self.get("project_id")
    }

    pub fn private_key(&self) -> Option<&str> {
        self.get("private_key")
    }

    pub fn private_key_id(&self) -> Option<&str> {
        self.get("private_key_id")
    }

    pub fn token_uri(&self) -> &str {
        self.get("token_uri").unwrap_or(DEFAULT_TOKEN_URI)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesListResponse {
    #[serde(default)]
    pub site_entry: Vec<SiteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub permission_level: Option<String>,
}

impl SiteEntry {
    pub fn site_url_or_unknown(&self) -> &str {
        self.site_url.as_deref().unwrap_or("UNKNOWN")
    }

    pub fn permission_or_unknown(&self) -> &str {
        self.permission_level.as_deref().unwrap_or("UNKNOWN")
    }
}
