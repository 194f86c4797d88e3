// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Configuration, authentication and site selection failures are fatal to
//! the run; generation failures are fatal to one article only; a rejected
//! post is not an error at all (see [`crate::model::PublishResult`]).

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("WordPress.com returned {status}: {}", preview(.body))]
    PlatformService {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Article generation failed: {message}")]
    Generation { message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid site selection '{input}': expected a number between 1 and {available}")]
    InvalidSelection { input: String, available: usize },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("{failed} of {total} articles did not complete")]
    BatchIncomplete { failed: usize, total: usize },
}

impl AppError {
    /// Builds a generation error from any displayable cause.
    pub fn generation(message: impl Into<String>) -> Self {
        AppError::Generation {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Shortens a response body for one-line error display.
fn preview(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display_truncates_long_bodies() {
        let err = AppError::PlatformService {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: "x".repeat(ERROR_BODY_PREVIEW_LENGTH * 2),
        };
        let shown = err.to_string();
        assert!(shown.starts_with("WordPress.com returned 400 Bad Request: "));
        assert!(shown.ends_with('…'));
        assert!(shown.len() < ERROR_BODY_PREVIEW_LENGTH * 2);
    }

    #[test]
    fn selection_error_names_the_valid_range() {
        let err = AppError::InvalidSelection {
            input: "7".to_string(),
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid site selection '7': expected a number between 1 and 3"
        );
    }
}
