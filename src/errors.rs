use thiserror::Error;

/// Error type for the fallible edges of the engine: file loads, parsing and
/// text extraction. The calculators themselves never fail.
#[derive(Debug, Error)]
pub enum NextStepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset error: {0}")]
    Dataset(String),
    #[error("Text extraction failed: {0}")]
    Extraction(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type NextStepResult<T> = Result<T, NextStepError>;
