//! Application layer errors.
//!
//! These errors represent failures while materializing a manifest, not
//! manifest defects. Manifest defects are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{EntryFailure, FailureKind};
use crate::error::ErrorCategory;

/// Errors that occur while applying a manifest to a root.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A non-directory occupies a path that must be a directory.
    #[error("Path conflict at {path}: expected a directory but found a non-directory entry")]
    PathConflict { path: PathBuf },

    /// The file appeared between the existence check and the exclusive create.
    #[error("File at {path} was created concurrently; refusing to overwrite it")]
    RaceLoss { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Failed to {operation} at {path}: {reason}")]
    IoFailure {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// Adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter state is unavailable")]
    AdapterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathConflict { path } => vec![
                format!("'{}' is not a directory", path.display()),
                "Move or rename the conflicting file, then run groundwork again".into(),
            ],
            Self::RaceLoss { path } => vec![
                format!("Something else created '{}' during this run", path.display()),
                "Run groundwork again; existing files are always left untouched".into(),
            ],
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::AdapterLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathConflict { .. } => ErrorCategory::Conflict,
            Self::RaceLoss { .. } => ErrorCategory::Conflict,
            Self::IoFailure { .. } | Self::AdapterLockError => ErrorCategory::Internal,
        }
    }

    /// The report classification of this error.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::PathConflict { .. } => FailureKind::PathConflict,
            Self::RaceLoss { .. } => FailureKind::RaceLoss,
            Self::IoFailure { .. } | Self::AdapterLockError => FailureKind::IoFailure,
        }
    }
}

impl From<&ApplicationError> for EntryFailure {
    fn from(err: &ApplicationError) -> Self {
        EntryFailure {
            kind: err.failure_kind(),
            message: err.to_string(),
        }
    }
}
