use super::DomainError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A manifest path guaranteed to stay under the scaffold root.
///
/// Invariant: non-empty, never absolute, no `..` components. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }

        for component in path.components() {
            match component {
                Component::ParentDir => {
                    return Err(DomainError::ParentTraversal {
                        path: path.display().to_string(),
                    });
                }
                Component::Prefix(_) | Component::RootDir => {
                    return Err(DomainError::AbsolutePathNotAllowed {
                        path: path.display().to_string(),
                    });
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(Self(path))
    }

    /// Resolve against a root directory.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }

    /// Every proper prefix of this path, shortest first.
    ///
    /// `a/b/c` yields `a` then `a/b`.
    pub fn ancestors(&self) -> Vec<PathBuf> {
        let mut prefixes = Vec::new();
        let mut current = PathBuf::new();
        let components: Vec<_> = self
            .0
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();

        if let Some((_, parents)) = components.split_last() {
            for component in parents {
                current.push(component);
                prefixes.push(current.clone());
            }
        }

        prefixes
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// Reports are rendered with forward slashes regardless of platform.
impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rendered = self
            .0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        serializer.serialize_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let path = RelativePath::try_new("prompts/system").unwrap();
        assert_eq!(path.as_path(), Path::new("prompts/system"));
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(RelativePath::try_new(""), Err(DomainError::EmptyPath));
    }

    #[test]
    #[cfg(unix)]
    fn rejects_absolute_path() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(matches!(
            RelativePath::try_new("docs/../../outside"),
            Err(DomainError::ParentTraversal { .. })
        ));
    }

    #[test]
    fn ancestors_exclude_the_path_itself() {
        let path = RelativePath::try_new("infra/secrets/registry.yml").unwrap();
        assert_eq!(
            path.ancestors(),
            vec![PathBuf::from("infra"), PathBuf::from("infra/secrets")]
        );
    }

    #[test]
    fn top_level_path_has_no_ancestors() {
        let path = RelativePath::try_new("README.md").unwrap();
        assert!(path.ancestors().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn resolve_joins_onto_root() {
        let path = RelativePath::try_new("docs").unwrap();
        assert_eq!(path.resolve(Path::new("/work")), PathBuf::from("/work/docs"));
    }

    #[test]
    fn serializes_with_forward_slashes() {
        let path = RelativePath::try_new("global-memory/tools.md").unwrap();
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            "\"global-memory/tools.md\""
        );
    }
}
