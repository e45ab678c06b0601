//! Custom error types for finbrief
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finbrief operations
#[derive(Error, Debug)]
pub enum BriefError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Fetch errors (transport failures, non-success HTTP status)
    ///
    /// Terminal for the whole report invocation: no partial data is used.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The fetched payload is missing the expected top-level structure
    #[error("Unexpected feed shape: {0}")]
    InputShape(String),

    /// Mail submission errors
    #[error("Mail error: {0}")]
    Mail(String),

    /// Invalid sender or recipient address
    #[error("Invalid mail address: {0}")]
    Address(String),
}

impl BriefError {
    /// Check if this is a feed-shape error (treated as "no data available")
    pub fn is_input_shape(&self) -> bool {
        matches!(self, Self::InputShape(_))
    }

    /// Check if this is a fetch error (aborts the report build)
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BriefError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<ureq::Error> for BriefError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                Self::Fetch(format!("{} returned HTTP {}", response.get_url(), code))
            }
            ureq::Error::Transport(t) => Self::Fetch(t.to_string()),
        }
    }
}

impl From<lettre::transport::smtp::Error> for BriefError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Mail(err.to_string())
    }
}

impl From<lettre::error::Error> for BriefError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Mail(err.to_string())
    }
}

impl From<lettre::address::AddressError> for BriefError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::Address(err.to_string())
    }
}

/// Result type alias for finbrief operations
pub type BriefResult<T> = Result<T, BriefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BriefError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_input_shape_error() {
        let err = BriefError::InputShape("top level is not an object".into());
        assert_eq!(
            err.to_string(),
            "Unexpected feed shape: top level is not an object"
        );
        assert!(err.is_input_shape());
        assert!(!err.is_fetch());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let brief_err: BriefError = io_err.into();
        assert!(matches!(brief_err, BriefError::Io(_)));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = BriefError::Fetch("connection refused".into());
        assert_eq!(err.to_string(), "Fetch error: connection refused");
        assert!(err.is_fetch());
    }
}
