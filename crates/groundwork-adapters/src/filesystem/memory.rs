//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use groundwork_core::{
    application::{ApplicationError, ports::Filesystem, ports::PathKind},
    error::GroundworkResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can hand one clone to a
/// `ScaffoldService` and inspect the result through another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn kind_of(&self, path: &Path) -> PathKind {
        if self.directories.contains(path) {
            PathKind::Directory
        } else if self.files.contains_key(path) {
            PathKind::Other
        } else {
            PathKind::Missing
        }
    }

    fn check_denied(&self, path: &Path, operation: &'static str) -> GroundworkResult<()> {
        if self.denied.contains(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                operation,
                reason: "permission denied".into(),
            }
            .into());
        }
        Ok(())
    }

    fn insert_directory_chain(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all of its ancestors (testing helper).
    pub fn seed_directory(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_directory_chain(path.as_ref());
        }
        self
    }

    /// Place a file, creating its ancestors (testing helper).
    pub fn seed_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> &Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_directory_chain(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make every operation on `path` fail with an I/O error.
    pub fn deny(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Whether `path` is a directory.
    pub fn is_directory(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path.as_ref()))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn probe(&self, path: &Path) -> GroundworkResult<PathKind> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::AdapterLockError)?;
        inner.check_denied(path, "inspect path")?;
        Ok(inner.kind_of(path))
    }

    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;
        inner.check_denied(path, "create directory")?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::PathConflict { path: current }.into());
            }
        }

        inner.insert_directory_chain(path);
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> GroundworkResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;
        inner.check_denied(path, "create file")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::IoFailure {
                    path: path.to_path_buf(),
                    operation: "create file",
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.kind_of(path).exists() {
            return Err(ApplicationError::RaceLoss {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
