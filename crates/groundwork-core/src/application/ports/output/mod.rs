//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `groundwork-adapters` crate provides implementations.

use std::path::Path;

use crate::error::GroundworkResult;

/// What currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing is there.
    Missing,
    /// A directory (or a link resolving to one).
    Directory,
    /// Anything else: regular file, link to a file, device, socket.
    Other,
}

impl PathKind {
    pub fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `groundwork_adapters::filesystem::LocalFilesystem` (production)
/// - `groundwork_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - Paths are absolute, already resolved against the scaffold root
/// - `create_new` must be create-exclusive: when anything already occupies
///   the path it fails with `ApplicationError::RaceLoss` and leaves the
///   existing entry untouched
/// - `create_dir_all` reports a non-directory in the way as
///   `ApplicationError::PathConflict`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Inspect what occupies `path`.
    fn probe(&self, path: &Path) -> GroundworkResult<PathKind>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()>;

    /// Create a file with `content`, failing if the path is occupied.
    fn create_new(&self, path: &Path, content: &str) -> GroundworkResult<()>;
}
