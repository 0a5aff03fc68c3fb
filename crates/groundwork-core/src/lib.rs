//! Groundwork Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Groundwork
//! knowledge-base scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         groundwork-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │   ensure directories, write if missing  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   groundwork-adapters (Infrastructure)  │
//! │ (LocalFilesystem, MemoryFilesystem, the │
//! │          built-in manifest)             │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Manifest, RelativePath, RunReport)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use groundwork_core::prelude::*;
//!
//! let manifest = Manifest::new()
//!     .with_directory(RelativePath::try_new("docs").unwrap())
//!     .with_file(RelativePath::try_new("docs/notes.md").unwrap(), "# Notes\n");
//!
//! // Filesystem adapter injected from groundwork-adapters
//! let service = ScaffoldService::new(filesystem);
//! let report = service.run("/abs/root".as_ref(), &manifest).unwrap();
//! assert!(report.is_clean());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, PathKind},
    };
    pub use crate::domain::{
        DirectorySpec, EntryKind, EntryReport, EntryStatus, FailureKind, FileSpec, Manifest,
        RelativePath, RunReport, RunSummary,
    };
    pub use crate::error::{GroundworkError, GroundworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
