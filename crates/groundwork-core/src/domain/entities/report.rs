//! Per-entry outcomes of a scaffold run.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::common::RelativePath;

/// What kind of manifest entry a report line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// Classification of a failed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A non-directory occupies a path that must be a directory.
    PathConflict,
    /// Another actor created the file between the probe and the write.
    RaceLoss,
    /// Any other OS-level failure.
    IoFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFailure {
    #[serde(rename = "failure")]
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Created,
    /// Directory was already there.
    AlreadyPresent,
    /// File was already there and left untouched.
    Skipped,
    /// Dry run: the entry is missing and would be created.
    WouldCreate,
    Failed(EntryFailure),
}

impl EntryStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub path: RelativePath,
    pub kind: EntryKind,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryReport {
    pub fn directory(path: RelativePath, status: EntryStatus) -> Self {
        Self {
            path,
            kind: EntryKind::Directory,
            status,
        }
    }

    pub fn file(path: RelativePath, status: EntryStatus) -> Self {
        Self {
            path,
            kind: EntryKind::File,
            status,
        }
    }

    pub fn failure(&self) -> Option<&EntryFailure> {
        match &self.status {
            EntryStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Aggregate of every entry outcome in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub directories: Vec<EntryReport>,
    pub files: Vec<EntryReport>,
}

/// Counts derived from a [`RunReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub directories_created: usize,
    pub directories_present: usize,
    pub files_created: usize,
    pub files_skipped: usize,
    pub pending: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.directories_created
            + self.directories_present
            + self.files_created
            + self.files_skipped
            + self.pending
            + self.failed
    }
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn created_directories(&self) -> impl Iterator<Item = &RelativePath> {
        select(&self.directories, |s| matches!(s, EntryStatus::Created))
    }

    pub fn existing_directories(&self) -> impl Iterator<Item = &RelativePath> {
        select(&self.directories, |s| matches!(s, EntryStatus::AlreadyPresent))
    }

    pub fn created_files(&self) -> impl Iterator<Item = &RelativePath> {
        select(&self.files, |s| matches!(s, EntryStatus::Created))
    }

    pub fn skipped_files(&self) -> impl Iterator<Item = &RelativePath> {
        select(&self.files, |s| matches!(s, EntryStatus::Skipped))
    }

    pub fn pending(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries()
            .filter(|e| matches!(e.status, EntryStatus::WouldCreate))
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries().filter(|e| e.status.is_failure())
    }

    pub fn entries(&self) -> impl Iterator<Item = &EntryReport> {
        self.directories.iter().chain(self.files.iter())
    }

    /// `true` when no entry failed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for entry in self.entries() {
            match (&entry.status, entry.kind) {
                (EntryStatus::Created, EntryKind::Directory) => summary.directories_created += 1,
                (EntryStatus::Created, EntryKind::File) => summary.files_created += 1,
                (EntryStatus::AlreadyPresent, _) => summary.directories_present += 1,
                (EntryStatus::Skipped, _) => summary.files_skipped += 1,
                (EntryStatus::WouldCreate, _) => summary.pending += 1,
                (EntryStatus::Failed(_), _) => summary.failed += 1,
            }
        }
        summary
    }
}

fn select(
    entries: &[EntryReport],
    predicate: impl Fn(&EntryStatus) -> bool,
) -> impl Iterator<Item = &RelativePath> {
    entries
        .iter()
        .filter(move |e| predicate(&e.status))
        .map(|e| &e.path)
}
