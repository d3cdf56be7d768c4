use crate::domain::model::ServiceAccountKey;
use crate::utils::error::{CheckError, Result};
use directories::BaseDirs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Locations searched, in order, when no key path is given.
pub fn default_key_paths() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    default_key_paths_in(home.as_deref(), &cwd)
}

pub fn default_key_paths_in(home: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Some(home) = home {
        paths.push(home.join(".gsc-credentials").join("service-account-key.json"));
    }
    paths.push(cwd.join("service-account-key.json"));
    paths.push(cwd.join(".env.json"));
    paths
}

/// A non-empty explicit path always wins, even if it does not exist; loading reports that.
pub fn resolve_key_path(explicit: Option<&str>, candidates: &[PathBuf]) -> Result<PathBuf> {
    if let Some(path) = explicit.filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .ok_or_else(|| CheckError::NoDefaultCredentials {
            searched: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        })
}

pub fn load_key(path: &Path) -> Result<ServiceAccountKey> {
    let shown = path.display().to_string();
    tracing::debug!("Reading credentials from {}", shown);

    let data = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CheckError::CredentialsNotFound {
            path: shown.clone(),
        },
        _ => CheckError::IoError(e),
    })?;

    let fields = serde_json::from_slice(&data).map_err(|source| CheckError::InvalidJson {
        path: shown.clone(),
        source,
    })?;

    Ok(ServiceAccountKey::new(fields))
}
