//! Scaffold Service - main application orchestrator.
//!
//! This service applies a [`Manifest`] to a root directory:
//! 1. Validate the manifest
//! 2. Ensure every manifest directory exists
//! 3. Write every manifest file that is missing, never overwriting
//!
//! Failures are isolated per entry: a conflicting or unwritable path is
//! recorded in the [`RunReport`] and the run moves on to the next entry.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PathKind},
    },
    domain::{
        DirectorySpec, DomainValidator as validator, EntryFailure, EntryReport, EntryStatus,
        FailureKind, FileSpec, Manifest, RelativePath, RunReport,
    },
    error::{GroundworkError, GroundworkResult},
};

/// Outcome of ensuring a single directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Created,
    AlreadyPresent,
}

/// Outcome of writing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Skipped,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use groundwork_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(filesystem); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Apply `manifest` under `root`.
    ///
    /// Returns `Err` only when the manifest itself is invalid. Every
    /// filesystem failure is captured per entry in the report.
    #[instrument(
        skip_all,
        fields(root = %root.display(), entries = manifest.entry_count())
    )]
    pub fn run(&self, root: &Path, manifest: &Manifest) -> GroundworkResult<RunReport> {
        validator::validate_manifest(manifest)?;
        info!("Applying manifest");

        let mut report = RunReport::new(root, false);
        report.directories = self.ensure_directories(root, manifest.directories());

        for file in manifest.files() {
            let status = match self.write_file_if_missing(root, file) {
                Ok(FileOutcome::Created) => EntryStatus::Created,
                Ok(FileOutcome::Skipped) => EntryStatus::Skipped,
                Err(e) => record_failure(&file.path, &e),
            };
            report.files.push(EntryReport::file(file.path.clone(), status));
        }

        let summary = report.summary();
        info!(
            directories_created = summary.directories_created,
            files_created = summary.files_created,
            files_skipped = summary.files_skipped,
            failed = summary.failed,
            "Manifest applied"
        );

        Ok(report)
    }

    /// Ensure every directory in `directories` exists under `root`.
    ///
    /// Directories are independent: a conflict on one entry does not stop
    /// the others.
    pub fn ensure_directories(&self, root: &Path, directories: &[DirectorySpec]) -> Vec<EntryReport> {
        directories
            .iter()
            .map(|dir| {
                let status = match self.ensure_directory(root, dir) {
                    Ok(DirectoryOutcome::Created) => EntryStatus::Created,
                    Ok(DirectoryOutcome::AlreadyPresent) => EntryStatus::AlreadyPresent,
                    Err(e) => record_failure(&dir.path, &e),
                };
                EntryReport::directory(dir.path.clone(), status)
            })
            .collect()
    }

    /// Ensure a single directory (and its missing ancestors) exists.
    pub fn ensure_directory(
        &self,
        root: &Path,
        dir: &DirectorySpec,
    ) -> GroundworkResult<DirectoryOutcome> {
        let target = dir.path.resolve(root);

        match self.filesystem.probe(&target)? {
            PathKind::Directory => {
                debug!(path = %dir.path, "Directory already present");
                return Ok(DirectoryOutcome::AlreadyPresent);
            }
            PathKind::Other => {
                return Err(ApplicationError::PathConflict { path: target }.into());
            }
            PathKind::Missing => {}
        }

        self.check_ancestors(root, &dir.path)?;
        self.filesystem.create_dir_all(&target)?;

        debug!(path = %dir.path, "Directory created");
        Ok(DirectoryOutcome::Created)
    }

    /// Create `file` under `root` unless something already occupies its path.
    ///
    /// Existing entries are never read, diffed, or replaced. The final write
    /// is create-exclusive, so losing a race to another writer surfaces as
    /// [`ApplicationError::RaceLoss`].
    pub fn write_file_if_missing(
        &self,
        root: &Path,
        file: &FileSpec,
    ) -> GroundworkResult<FileOutcome> {
        let target = file.path.resolve(root);

        if self.filesystem.probe(&target)?.exists() {
            debug!(path = %file.path, "File exists, skipping");
            return Ok(FileOutcome::Skipped);
        }

        self.check_ancestors(root, &file.path)?;
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.create_new(&target, &file.content)?;

        debug!(path = %file.path, bytes = file.size(), "File created");
        Ok(FileOutcome::Created)
    }

    /// Report what [`Self::run`] would do, without touching the filesystem.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn preview(&self, root: &Path, manifest: &Manifest) -> GroundworkResult<RunReport> {
        validator::validate_manifest(manifest)?;

        let mut report = RunReport::new(root, true);

        for dir in manifest.directories() {
            let status = match self.filesystem.probe(&dir.path.resolve(root)) {
                Ok(PathKind::Directory) => EntryStatus::AlreadyPresent,
                Ok(PathKind::Other) => record_failure(
                    &dir.path,
                    &ApplicationError::PathConflict {
                        path: dir.path.resolve(root),
                    }
                    .into(),
                ),
                Ok(PathKind::Missing) => self.pending_status(root, &dir.path),
                Err(e) => record_failure(&dir.path, &e),
            };
            report
                .directories
                .push(EntryReport::directory(dir.path.clone(), status));
        }

        for file in manifest.files() {
            let status = match self.filesystem.probe(&file.path.resolve(root)) {
                Ok(kind) if kind.exists() => EntryStatus::Skipped,
                Ok(_) => self.pending_status(root, &file.path),
                Err(e) => record_failure(&file.path, &e),
            };
            report.files.push(EntryReport::file(file.path.clone(), status));
        }

        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Fail with `PathConflict` if any ancestor of `path` under `root` is a
    /// non-directory.
    fn check_ancestors(&self, root: &Path, path: &RelativePath) -> GroundworkResult<()> {
        for ancestor in path.ancestors() {
            let candidate = root.join(ancestor);
            match self.filesystem.probe(&candidate)? {
                PathKind::Directory => continue,
                PathKind::Other => {
                    return Err(ApplicationError::PathConflict { path: candidate }.into());
                }
                // Nothing deeper can exist below a missing ancestor.
                PathKind::Missing => break,
            }
        }
        Ok(())
    }

    fn pending_status(&self, root: &Path, path: &RelativePath) -> EntryStatus {
        match self.check_ancestors(root, path) {
            Ok(()) => EntryStatus::WouldCreate,
            Err(e) => record_failure(path, &e),
        }
    }
}

/// Log a per-entry failure and convert it into a report status.
fn record_failure(path: &RelativePath, err: &GroundworkError) -> EntryStatus {
    warn!(path = %path, error = %err, "Entry failed");

    let failure = match err.as_application() {
        Some(app) => EntryFailure::from(app),
        None => EntryFailure {
            kind: FailureKind::IoFailure,
            message: err.to_string(),
        },
    };
    EntryStatus::Failed(failure)
}
