use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("reveal threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("visibility observation unavailable: {0}")]
    ObserverUnavailable(String),

    #[error("reveal container was not attached to the document")]
    MissingTarget,

    #[error("failed to parse portfolio content: {0}")]
    Content(#[from] serde_json::Error),
}
