//! Error types for the emailgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for emailgen operations.
///
/// Only `MissingMiddleName` propagates out of the core generation call;
/// every other generation problem degrades to an absent result plus a
/// diagnostic. The remaining variants belong to the CLI surface.
#[derive(Error, Debug)]
pub enum EmailError {
    /// The format requires a middle name the person does not have.
    #[error("middle name does not exist")]
    MissingMiddleName,

    /// A final placeholder is not one of `first`, `middle`, or `last`.
    #[error("unknown placeholder '{0}' in format")]
    UnknownPlaceholder(String),

    /// No address could be produced from the provided inputs.
    #[error("{0}")]
    UserError(String),

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the JSON output record failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmailError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EmailError::MissingMiddleName | EmailError::UnknownPlaceholder(_) => {
                exit_codes::GENERATION_FAILURE
            }
            EmailError::UserError(_) | EmailError::Io(_) | EmailError::Json(_) => {
                exit_codes::USER_ERROR
            }
        }
    }
}

/// Result type alias for emailgen operations.
pub type Result<T> = std::result::Result<T, EmailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_middle_name_has_generation_failure_exit_code() {
        let err = EmailError::MissingMiddleName;
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn unknown_placeholder_has_generation_failure_exit_code() {
        let err = EmailError::UnknownPlaceholder("nickname".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn user_error_has_user_error_exit_code() {
        let err = EmailError::UserError("bad input".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_user_error_exit_code() {
        let err = EmailError::Io(std::io::Error::other("stdin closed"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = EmailError::MissingMiddleName;
        assert_eq!(err.to_string(), "middle name does not exist");

        let err = EmailError::UnknownPlaceholder("nickname".to_string());
        assert_eq!(err.to_string(), "unknown placeholder 'nickname' in format");
    }
}
