//! Error types for devotional API operations.

use thiserror::Error;

/// Message shown when a generation is submitted without an age group.
pub const MISSING_AGE_GROUP_MESSAGE: &str = "Please select an age group";

/// Errors that can occur while talking to the devotional service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DevotionalError {
    /// The user input was rejected before any request was made.
    #[error("{message}")]
    Validation { message: String },

    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}, detail: {detail}")]
    Request { status: u16, detail: String },

    /// The request never produced a response.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The response body did not match the expected shape.
    #[error("Malformed response body: {message}")]
    Decode { message: String },
}

impl DevotionalError {
    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new request error from a status code and the server detail.
    pub fn request(status: u16, detail: impl Into<String>) -> Self {
        Self::Request {
            status,
            detail: detail.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Validation errors are raised locally; everything else is a request failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
