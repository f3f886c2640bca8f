use thiserror::Error;

/// Errors raised by the outer layers (commands, config, CLI).
///
/// The embedding core never fails: decoding and adaptation report "nothing
/// recognized" as `None` instead.
#[derive(Error, Debug)]
pub enum TextAdaptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid transformation '{input}': {reason}")]
    InvalidTransformation { input: String, reason: String },

    #[error("Unknown content size category: {0}")]
    InvalidCategory(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TextAdaptError>;
