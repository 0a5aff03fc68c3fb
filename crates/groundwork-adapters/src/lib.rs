//! Infrastructure adapters for Groundwork.
//!
//! This crate implements the ports defined in `groundwork-core::application::ports`
//! and ships the built-in manifest. It contains all I/O operations.

pub mod builtin_manifest;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_manifest::builtin_manifest;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
