//! Error type shared by the dashboard crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    /// A path that is not in the route table.
    #[error("no page is registered for path `{0}`")]
    UnknownRoute(String),

    #[error("unknown dataset `{0}`")]
    UnknownDataset(String),

    #[error("unknown icon `{0}`")]
    UnknownIcon(String),

    /// Chart values must be finite and non-negative.
    #[error("dataset `{dataset}` row {row}: invalid value {value}")]
    InvalidValue {
        dataset: String,
        row: usize,
        value: f64,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("date error: {0}")]
    Date(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, DashError>;
