use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BetfairError>;

#[derive(Debug, Error)]
pub enum BetfairError {
    #[error("invalid credential params: expected 4 or 5 values, got {0}")]
    InvalidCredentialArity(usize),

    #[error("unknown endpoint {endpoint} for region {region}")]
    UnknownEndpoint { region: String, endpoint: String },

    #[error("certificate file not found: {}", .0.display())]
    CertificateNotFound(PathBuf),

    #[error("failed to load client certificate: {0}")]
    CertificateLoadError(String),

    #[error("login failed: {0}")]
    LoginFailed(String),

    #[error("HTTP error: {0}")]
    HttpError(StatusCode),

    #[error("failed to decode response: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("failed to encode request: {0}")]
    EncodeError(#[source] serde_json::Error),

    #[error("{0} application not found")]
    ApplicationNotFound(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
