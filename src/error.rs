use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Forbidden - Access denied")]
    Forbidden,

    #[error("Unexpected status code: {0}")]
    Status(reqwest::StatusCode),

    #[error("Maximum retries exceeded")]
    MaxRetriesExceeded,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Price node missing: {0}")]
    MissingPriceNode(&'static str),

    #[error("Invalid price text: {text:?}")]
    InvalidPrice { text: String },
}
