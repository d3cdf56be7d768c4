use crate::utils::error::{CheckError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl Into<String>, reason: impl Into<String>) -> CheckError {
    CheckError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// The sites path is appended to this URL, so it must be a plain http(s) base.
pub fn validate_api_base_url(field_name: &str, url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "Base URL cannot carry a query or fragment",
        ));
    }
    Ok(url)
}

/// A key path that does not exist is fine here; loading reports it as not found.
pub fn validate_key_path(field_name: &str, path: &Path) -> Result<()> {
    let shown = path.display().to_string();
    if shown.contains('\0') {
        return Err(invalid(field_name, shown, "Path contains null bytes"));
    }
    if path.is_dir() {
        return Err(invalid(field_name, shown, "Path is a directory, expected a JSON key file"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
