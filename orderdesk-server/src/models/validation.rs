//! Validation error types

use std::fmt;

/// Request input that could not be turned into a domain value
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Body is not valid JSON, or a field is missing or has the wrong type
    MalformedBody { reason: String },

    /// A value doesn't match its required format (e.g. a non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// PUT body names a different record than the path
    IdMismatch { path: i64, body: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::IdMismatch { path, body } => {
                write!(f, "id in body ({}) does not match id in path ({})", body, path)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
