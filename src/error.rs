use thiserror::Error;

use crate::request::Category;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{source_category} source cannot accept a {given} request")]
    CategoryMismatch {
        source_category: Category,
        given: Category,
    },

    #[error("Unknown order key: {0} (expected \"-created_date\" or \"created_date\")")]
    UnknownOrder(String),

    #[error("Unknown request status: {0}")]
    UnknownStatus(String),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
