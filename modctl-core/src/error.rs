//! Structured error types for modctl-core.
//!
//! Two families per the upstream contract: validation errors raised before
//! any network call, and network errors derived from the HTTP status text or
//! the transport failure. The CLI binary wraps these with `anyhow`; library
//! consumers get the structured variants.

use thiserror::Error;

/// Main error type for modctl-core operations
#[derive(Error, Debug)]
pub enum ModError {
    /// A required field is missing or malformed; no request was sent
    #[error("{reason}")]
    Validation { reason: String },

    /// The items API answered with a non-success HTTP status
    #[error("{context}: {status}")]
    Status {
        context: String,
        status: reqwest::StatusCode,
    },

    /// The HTTP round-trip itself failed
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The response body did not match any accepted shape
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for modctl-core operations
pub type Result<T> = std::result::Result<T, ModError>;

impl ModError {
    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a status error with context
    pub fn status(context: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Status {
            context: context.into(),
            status,
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModError::validation("title and deadline are required");
        assert_eq!(err.to_string(), "title and deadline are required");

        let err = ModError::status(
            "failed to fetch items",
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        );
        assert!(err.to_string().contains("failed to fetch items"));
        assert!(err.to_string().contains("500"));
    }
}
