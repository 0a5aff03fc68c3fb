//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::{trace, warn};

use groundwork_core::{
    application::{ApplicationError, ports::Filesystem, ports::PathKind},
    error::{GroundworkError, GroundworkResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn probe(&self, path: &Path) -> GroundworkResult<PathKind> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(_) => Ok(PathKind::Other),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // A dangling symlink still occupies the path.
                match std::fs::symlink_metadata(path) {
                    Ok(_) => Ok(PathKind::Other),
                    Err(_) => Ok(PathKind::Missing),
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(PathKind::Missing),
            Err(e) => Err(map_io_error(path, e, "inspect path")),
        }
    }

    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()> {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists | io::ErrorKind::NotADirectory => {
                ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                }
                .into()
            }
            _ => map_io_error(path, e, "create directory"),
        })
    }

    fn create_new(&self, path: &Path, content: &str) -> GroundworkResult<()> {
        // Fails instead of truncating when something appeared after the probe.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ApplicationError::RaceLoss {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "create file"),
            })?;

        if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.sync_all()) {
            drop(file);
            // A partial body would be skipped as existing on the next run.
            if let Err(cleanup) = std::fs::remove_file(path) {
                warn!(path = %path.display(), error = %cleanup, "Could not remove partial file");
            }
            return Err(map_io_error(path, e, "write file"));
        }

        trace!(path = %path.display(), bytes = content.len(), "File created");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> GroundworkError {
    ApplicationError::IoFailure {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probe_distinguishes_kinds() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        std::fs::write(tmp.path().join("file.txt"), "x").unwrap();

        assert_eq!(fs.probe(tmp.path()).unwrap(), PathKind::Directory);
        assert_eq!(fs.probe(&tmp.path().join("file.txt")).unwrap(), PathKind::Other);
        assert_eq!(fs.probe(&tmp.path().join("nope")).unwrap(), PathKind::Missing);
    }

    #[test]
    fn create_new_writes_exact_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("README.md");

        fs.create_new(&target, "# Hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# Hello\n");
    }

    #[test]
    fn create_new_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("README.md");
        std::fs::write(&target, "mine").unwrap();

        let err = fs.create_new(&target, "template").unwrap_err();

        assert!(matches!(
            err,
            GroundworkError::Application(ApplicationError::RaceLoss { .. })
        ));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "mine");
    }

    #[test]
    fn create_new_touches_only_the_target() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("taken");
        std::fs::write(&target, "mine").unwrap();

        let _ = fs.create_new(&target, "template");
        fs.create_new(&tmp.path().join("fresh"), "").unwrap();

        let mut names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["fresh", "taken"]);
    }

    #[test]
    fn create_new_without_parent_is_io_failure() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let err = fs
            .create_new(&tmp.path().join("missing/README.md"), "x")
            .unwrap_err();

        assert!(matches!(
            err,
            GroundworkError::Application(ApplicationError::IoFailure { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn create_new_uses_default_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        // A plain `fs::write` gets 0o666 minus the process umask.
        let reference = tmp.path().join("reference");
        std::fs::write(&reference, "").unwrap();
        let target = tmp.path().join("README.md");

        fs.create_new(&target, "# Hello\n").unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&target), mode(&reference));
    }

    #[test]
    fn create_new_empty_content_gives_empty_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join(".gitkeep");

        fs.create_new(&target, "").unwrap();

        assert_eq!(std::fs::metadata(&target).unwrap().len(), 0);
    }

    #[test]
    fn create_dir_all_through_a_file_is_a_conflict() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        std::fs::write(tmp.path().join("docs"), "not a dir").unwrap();

        let err = fs.create_dir_all(&tmp.path().join("docs/nested")).unwrap_err();

        assert!(matches!(
            err,
            GroundworkError::Application(ApplicationError::PathConflict { .. })
        ));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("prompts/system");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
