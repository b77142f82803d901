use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// Sanitize Error type
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SanitizeError {
    #[error("{0}")]
    Custom(String),
    #[error("Invalid value: {0}")]
    InvalidValue(Value),
    #[error("Unknown sanitizer: {0}")]
    UnknownSanitizer(String),
}

/// Sanitize Result type
pub type SanitizeResult<T> = Result<T, SanitizeError>;
