use thiserror::Error;

#[derive(Debug, Error)]
pub enum HorseDietError {
    #[error("Please enter a valid weight: {0}")]
    InvalidWeight(String),

    #[error("Failed to load feed database: {0}")]
    CatalogLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, HorseDietError>;
