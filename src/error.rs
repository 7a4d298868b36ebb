use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid network profile `{name}`: {reason}")]
    InvalidProfile { name: String, reason: String },
    #[error("network profile `{0}` is already registered")]
    DuplicateProfile(String),
    #[error("unknown network profile `{0}`")]
    UnknownProfile(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
