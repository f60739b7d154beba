use thiserror::Error;

/// Errors of the layer around the schedule pipeline. The pipeline itself is
/// total and never returns one of these.
#[derive(Error, Debug)]
pub enum CourseLoadError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Row worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, CourseLoadError>;
