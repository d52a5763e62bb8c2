use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowgenError {
    // Store errors
    #[error("Flowchart not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Text generation errors
    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Text generation response parse error: {0}")]
    TextGenerationParse(String),

    // Config errors
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // Gateway errors
    #[error("Gateway error: {0}")]
    Gateway(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlowgenError>;
