// Error types for leaguedex.
// Covers HTTP transport, non-success statuses, JSON parsing, and cache I/O.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaguedexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network response was not ok: HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LeaguedexError>;
