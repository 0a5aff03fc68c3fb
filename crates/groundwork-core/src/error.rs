//! Unified error handling for Groundwork Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Groundwork Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GroundworkError {
    /// Errors from the domain layer (malformed manifest).
    #[error("Manifest error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem outcomes).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GroundworkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in Groundwork".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if a plain re-run could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::RaceLoss { .. })
                | Self::Application(ApplicationError::AdapterLockError)
        )
    }

    /// The application error inside, if any.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) => Some(e),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type GroundworkResult<T> = Result<T, GroundworkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn race_loss_is_retryable() {
        let err: GroundworkError = ApplicationError::RaceLoss {
            path: PathBuf::from("README.md"),
        }
        .into();
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn domain_errors_are_validation() {
        let err: GroundworkError = DomainError::EmptyManifest.into();
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.as_application().is_none());
    }

    #[test]
    fn application_message_is_not_prefixed() {
        let err: GroundworkError = ApplicationError::PathConflict {
            path: PathBuf::from("docs"),
        }
        .into();
        assert!(err.to_string().starts_with("Path conflict at docs"));
    }
}
