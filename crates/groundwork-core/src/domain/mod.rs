// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Groundwork.
//!
//! This module contains the manifest model with ZERO I/O. Touching the
//! filesystem is handled via the `Filesystem` port defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable manifests**: built once at startup, never mutated by a run
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    manifest::{DirectorySpec, FileSpec, Manifest},
    report::{
        EntryFailure, EntryKind, EntryReport, EntryStatus, FailureKind, RunReport, RunSummary,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
