use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("api returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode response: {source}; raw payload: {payload}")]
    Decode {
        source: serde_json::Error,
        payload: String,
    },
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("malformed log record: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
