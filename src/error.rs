//! Error handling for Clipsmith
//!
//! Every failure is immediate and synchronous. Malformed but in-range edit
//! parameters (0% fades, equal range ratios) never error; only genuinely
//! invalid metadata or parameters do.

use thiserror::Error;

/// Result type alias for Clipsmith operations
pub type Result<T> = std::result::Result<T, ClipsmithError>;

/// Main error type for Clipsmith operations
#[derive(Error, Debug)]
pub enum ClipsmithError {
    // Parameter Errors
    #[error("Invalid parameter {param}: got {value}, expected {expected}")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    // Input Errors
    #[error("Source buffer contains no samples")]
    EmptyInput,

    #[error("Invalid audio data: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    Unsupported { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClipsmithError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ClipsmithError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ClipsmithError::EmptyInput => "EMPTY_INPUT",
            ClipsmithError::InvalidAudio { .. } => "INVALID_AUDIO",
            ClipsmithError::Unsupported { .. } => "UNSUPPORTED",
            ClipsmithError::Io(_) => "IO_ERROR",
            ClipsmithError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Convenience constructor for parameter errors
    pub fn invalid_parameter(
        param: impl Into<String>,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        ClipsmithError::InvalidParameter {
            param: param.into(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}
