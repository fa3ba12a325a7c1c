use crate::models::Metric;

#[derive(Debug, thiserror::Error)]
pub enum CovmapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing {metric} data for {date}")]
    MissingMetricData { metric: Metric, date: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CovmapError>;
