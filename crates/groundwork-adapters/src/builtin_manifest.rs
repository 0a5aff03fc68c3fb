//! The manifest Groundwork ships with.
//!
//! Directory and file paths are fixed tables; file bodies live under
//! `templates/` in this crate and are embedded at compile time, so a run
//! can never pick up content from anywhere else.
//!
//! # Layout
//!
//! ```text
//! <root>/
//! ├── README.md
//! ├── global-memory/   memory, glossary, standards, processes, tools
//! ├── prompts/         index.json + system, development, design,
//! │                    operations, troubleshooting, archived
//! ├── infra/secrets/   registry.yml (metadata only), policies.md
//! ├── projects/        .gitkeep
//! └── docs/            workflow.md, prompting.md
//! ```

use tracing::debug;

use groundwork_core::{domain::Manifest, error::GroundworkResult};

/// Directories created by every run, in application order.
pub const DIRECTORIES: &[&str] = &[
    "global-memory",
    "prompts/system",
    "prompts/development",
    "prompts/design",
    "prompts/operations",
    "prompts/troubleshooting",
    "prompts/archived",
    "infra/secrets",
    "projects",
    "docs",
];

/// Files created when absent, in application order.
pub const FILES: &[(&str, &str)] = &[
    ("README.md", include_str!("../templates/README.md")),
    (
        "global-memory/memory.md",
        include_str!("../templates/global-memory/memory.md"),
    ),
    (
        "global-memory/glossary.md",
        include_str!("../templates/global-memory/glossary.md"),
    ),
    (
        "global-memory/standards.md",
        include_str!("../templates/global-memory/standards.md"),
    ),
    (
        "global-memory/processes.md",
        include_str!("../templates/global-memory/processes.md"),
    ),
    (
        "global-memory/tools.md",
        include_str!("../templates/global-memory/tools.md"),
    ),
    (
        "prompts/index.json",
        include_str!("../templates/prompts/index.json"),
    ),
    (
        "infra/secrets/registry.yml",
        include_str!("../templates/infra/secrets/registry.yml"),
    ),
    (
        "infra/secrets/policies.md",
        include_str!("../templates/infra/secrets/policies.md"),
    ),
    ("docs/workflow.md", include_str!("../templates/docs/workflow.md")),
    ("docs/prompting.md", include_str!("../templates/docs/prompting.md")),
    ("projects/.gitkeep", include_str!("../templates/projects/.gitkeep")),
];

/// Build and validate the built-in manifest.
pub fn builtin_manifest() -> GroundworkResult<Manifest> {
    let manifest = Manifest::from_static(DIRECTORIES, FILES)?;
    debug!(
        directories = manifest.directories().len(),
        files = manifest.files().len(),
        "Built-in manifest loaded"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of(path: &str) -> &'static str {
        FILES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, c)| *c)
            .unwrap_or_else(|| panic!("{path} missing from manifest"))
    }

    #[test]
    fn builtin_manifest_is_valid() {
        let manifest = builtin_manifest().unwrap();
        assert_eq!(manifest.directories().len(), 10);
        assert_eq!(manifest.files().len(), 12);
    }

    #[test]
    fn prompt_index_is_an_empty_json_list() {
        let content = content_of("prompts/index.json");
        let parsed: serde_json::Value = serde_json::from_str(content).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
        assert_eq!(content, "[]\n");
    }

    #[test]
    fn gitkeep_is_empty() {
        assert!(content_of("projects/.gitkeep").is_empty());
    }

    #[test]
    fn every_file_parent_is_a_manifest_directory_or_root() {
        for (path, _) in FILES {
            let parent = std::path::Path::new(path).parent().unwrap();
            let parent = parent.to_str().unwrap();
            assert!(
                parent.is_empty()
                    || parent == "prompts"
                    || DIRECTORIES.contains(&parent),
                "{path} has an undeclared parent"
            );
        }
    }

    #[test]
    fn secret_registry_holds_placeholders_only() {
        let registry = content_of("infra/secrets/registry.yml");
        assert!(registry.contains("MUST NOT contain actual secret values"));
        assert!(registry.contains("YYYY-MM-DD"));
        for marker in ["sk-", "ghp_", "AKIA", "-----BEGIN"] {
            assert!(!registry.contains(marker), "registry contains {marker}");
        }
    }

    #[test]
    fn markdown_templates_start_with_a_heading() {
        for (path, content) in FILES.iter().filter(|(p, _)| p.ends_with(".md")) {
            assert!(content.starts_with("# "), "{path} does not start with a heading");
            assert!(content.ends_with('\n'), "{path} lacks a trailing newline");
        }
    }
}
