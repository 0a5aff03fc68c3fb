// ============================================================================
// domain/error.rs - MANIFEST ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors describe a malformed manifest. The built-in manifest is
/// compiled into the binary, so any of these reaching a user is a bug.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Manifest path is empty")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the scaffold root: {path}")]
    ParentTraversal { path: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Manifest declares no directories and no files")]
    EmptyManifest,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicatePath { path } => vec![
                format!("'{}' is declared more than once", path),
                "Each manifest entry must name a distinct path".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::ParentTraversal { .. } => vec![
                "Manifest paths must stay inside the scaffold root".into(),
            ],
            _ => vec!["The built-in manifest is invalid; please report this issue".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
