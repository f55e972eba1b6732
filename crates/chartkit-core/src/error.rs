use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Chart has no BPM marker to anchor beat zero")]
    MissingTempoAnchor,

    #[error("Invalid chart document: {0}")]
    InvalidChart(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
