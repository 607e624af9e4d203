use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Unparseable quantity: {0}")]
    UnparseableQuantity(String),

    #[error("Invalid replacement food: {0}")]
    InvalidReplacementFood(String),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
