use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// The set of directories and files a run guarantees to produce.
///
/// Entries are applied in declaration order. A manifest holds no
/// behaviour beyond validation; materialization is the job of
/// `ScaffoldService`.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub(crate) directories: Vec<DirectorySpec>,
    pub(crate) files: Vec<FileSpec>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manifest from static path tables.
    pub fn from_static(
        directories: &[&'static str],
        files: &[(&'static str, &'static str)],
    ) -> Result<Self, DomainError> {
        let mut manifest = Self::new();
        for dir in directories {
            manifest.add_directory(RelativePath::try_new(*dir)?);
        }
        for (path, content) in files {
            manifest.add_file(RelativePath::try_new(*path)?, *content);
        }
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.directories.push(DirectorySpec { path });
    }

    pub fn add_file(&mut self, path: RelativePath, content: impl Into<Cow<'static, str>>) {
        self.files.push(FileSpec {
            path,
            content: content.into(),
        });
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath, content: impl Into<Cow<'static, str>>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyManifest);
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .map(|d| &d.path)
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: Cow<'static, str>,
}

impl FileSpec {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
