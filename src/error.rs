use thiserror::Error;

use crate::planner::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not authenticated, run `gymmind api login` first")]
    NotAuthenticated,
}

impl From<ValidationErrors> for DietError {
    fn from(errors: ValidationErrors) -> Self {
        DietError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
