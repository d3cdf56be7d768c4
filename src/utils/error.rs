use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Credentials file not found at {path}")]
    CredentialsNotFound { path: String },

    #[error("Could not find credentials file.")]
    NoDefaultCredentials { searched: Vec<String> },

    #[error("Invalid JSON in credentials file {path}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Authentication failed - {message}")]
    AuthenticationError { message: String },

    #[error("Failed to connect to GSC API - {message}")]
    ApiError { message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Token signing failed: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::ApiError {
            message: message.into(),
        }
    }

    /// Whether the check can still print a report after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    /// The line printed to stdout for this error.
    pub fn user_friendly_message(&self) -> String {
        format!("Error: {}", self)
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
