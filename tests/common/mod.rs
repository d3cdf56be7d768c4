#![allow(dead_code)]

use serde_json::json;
use std::path::{Path, PathBuf};

pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_private_key.pem");
pub const CLIENT_EMAIL: &str = "checker@demo-project.iam.gserviceaccount.com";

/// Writes a service-account key whose token endpoint is `token_uri`.
pub fn write_key_file(dir: &Path, token_uri: &str) -> PathBuf {
    write_key_json(
        dir,
        &json!({
            "type": "service_account",
            "project_id": "demo-project",
            "private_key_id": "kid-123",
            "private_key": TEST_PRIVATE_KEY,
            "client_email": CLIENT_EMAIL,
            "client_id": "1234567890",
            "token_uri": token_uri,
        }),
    )
}

pub fn write_key_json(dir: &Path, value: &serde_json::Value) -> PathBuf {
    let path = dir.join("service-account-key.json");
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

pub fn token_body() -> serde_json::Value {
    json!({
        "access_token": "ya29.integration-token",
        "expires_in": 3599,
        "token_type": "Bearer"
    })
}
