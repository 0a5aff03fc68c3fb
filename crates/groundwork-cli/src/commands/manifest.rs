//! Implementation of the `groundwork manifest` command.

use serde::Serialize;

use groundwork_adapters::builtin_manifest;
use groundwork_core::domain::{EntryKind, Manifest, RelativePath};

use crate::{
    cli::{ManifestArgs, ManifestFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// One row of the manifest listing.
#[derive(Debug, Serialize)]
struct ManifestRow<'a> {
    path: &'a RelativePath,
    kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<usize>,
}

pub fn execute(args: ManifestArgs, output: OutputManager) -> CliResult<()> {
    let manifest = builtin_manifest().with_cli_context(|| "loading built-in manifest")?;
    let rows = rows(&manifest);

    match args.format {
        ManifestFormat::Table => {
            output.header(&format!(
                "Groundwork manifest ({} directories, {} files):",
                manifest.directories().len(),
                manifest.files().len()
            ))?;
            let width = rows
                .iter()
                .map(|r| r.path.to_string().len())
                .max()
                .unwrap_or(0);
            for row in &rows {
                let size = row.bytes.map(|b| format!("{b} B")).unwrap_or_default();
                output.print(&format!(
                    "  {:<9} {:<width$}  {size}",
                    kind_label(row.kind),
                    row.path.to_string(),
                ))?;
            }
        }

        ManifestFormat::List => {
            for row in &rows {
                output.print(&row.path.to_string())?;
            }
        }

        ManifestFormat::Json => output.json(&rows)?,

        ManifestFormat::Csv => {
            output.print("kind,path,bytes")?;
            for row in &rows {
                output.print(&format!(
                    "{},{},{}",
                    kind_label(row.kind),
                    row.path,
                    row.bytes.map(|b| b.to_string()).unwrap_or_default()
                ))?;
            }
        }
    }

    Ok(())
}

fn rows(manifest: &Manifest) -> Vec<ManifestRow<'_>> {
    let directories = manifest.directories().iter().map(|d| ManifestRow {
        path: &d.path,
        kind: EntryKind::Directory,
        bytes: None,
    });
    let files = manifest.files().iter().map(|f| ManifestRow {
        path: &f.path,
        kind: EntryKind::File,
        bytes: Some(f.size()),
    });
    directories.chain(files).collect()
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "directory",
        EntryKind::File => "file",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_list_directories_before_files() {
        let manifest = builtin_manifest().unwrap();
        let rows = rows(&manifest);

        assert_eq!(rows.len(), 22);
        assert_eq!(rows[0].path.to_string(), "global-memory");
        assert_eq!(rows[0].bytes, None);
        assert_eq!(rows[10].path.to_string(), "README.md");
        assert!(rows[10..].iter().all(|r| r.kind == EntryKind::File));
    }

    #[test]
    fn json_rows_omit_bytes_for_directories() {
        let manifest = builtin_manifest().unwrap();
        let rows = rows(&manifest);
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value[0]["kind"], "directory");
        assert!(value[0].get("bytes").is_none());
        assert_eq!(value[16]["path"], "prompts/index.json");
        assert_eq!(value[16]["bytes"], 3);
    }
}
