use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Anything that aborts a pipeline stage ends up here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Batch-level schema failure. Raised before any output is written.
    #[error("Missing required columns in input file: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Unsupported input format: {0} (use a .csv or .txt file)")]
    UnsupportedInput(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
