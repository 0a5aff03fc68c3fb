//! Implementation of the `groundwork init` command.
//!
//! Responsibility: resolve the root, run (or preview) the built-in manifest
//! through the core scaffold service, and display the report. No
//! scaffolding rules live here.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use groundwork_adapters::{LocalFilesystem, builtin_manifest};
use groundwork_core::{
    application::ScaffoldService,
    domain::{EntryReport, EntryStatus, RelativePath, RunReport},
};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const SECRETS_REMINDER: &str =
    "Reminder: add real secrets only to your secret managers, not to this repo.";

/// JSON envelope for a run report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    report: &'a RunReport,
    reminder: &'static str,
}

/// Execute `groundwork init`.
///
/// Returns [`CliError::IncompleteScaffold`] when any entry failed, after
/// the full report has been printed.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.root.as_deref())?;
    let manifest = builtin_manifest().with_cli_context(|| "loading built-in manifest")?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = if args.dry_run {
        service.preview(&root, &manifest)
    } else {
        service.run(&root, &manifest)
    }
    .with_cli_context(|| "applying manifest")?;

    if output.is_json() {
        output.json(&JsonReport {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            report: &report,
            reminder: SECRETS_REMINDER,
        })?;
    } else {
        render(&report, &output)?;
    }

    let summary = report.summary();
    if summary.failed > 0 {
        return Err(CliError::IncompleteScaffold {
            failed: summary.failed,
            total: summary.total(),
        });
    }

    info!(root = %root.display(), "Init completed");
    Ok(())
}

/// Make `root` absolute once, defaulting to the working directory.
///
/// The directory itself need not exist yet.
pub fn resolve_root(root: Option<&Path>) -> CliResult<PathBuf> {
    let requested = root.unwrap_or(Path::new("."));
    std::path::absolute(requested).map_err(|source| CliError::RootUnavailable {
        path: requested.to_path_buf(),
        source,
    })
}

fn render(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    let root = report.root.display();
    if report.dry_run {
        output.header(&format!(
            "Dry run: previewing AI workflow structure under: {root}"
        ))?;
    } else {
        output.header(&format!("Initialising AI workflow structure under: {root}"))?;
    }

    let created_dirs: Vec<_> = report.created_directories().collect();
    let pending_dirs = pending_paths(&report.directories);

    output.print("")?;
    if !created_dirs.is_empty() {
        output.success("Created directories:")?;
        for dir in created_dirs {
            output.item(&dir.to_string())?;
        }
    } else if !pending_dirs.is_empty() {
        output.info("Would create directories:")?;
        for dir in pending_dirs {
            output.item(&dir.to_string())?;
        }
    } else if report.directories.iter().all(|e| !e.status.is_failure()) {
        output.info("All target directories already exist.")?;
    }

    let created_files: Vec<_> = report.created_files().collect();
    if !created_files.is_empty() {
        output.print("")?;
        output.success("Created files (no overwrites):")?;
        for file in created_files {
            output.item(&file.to_string())?;
        }
    }

    let pending_files = pending_paths(&report.files);
    if !pending_files.is_empty() {
        output.print("")?;
        output.info("Would create files:")?;
        for file in pending_files {
            output.item(&file.to_string())?;
        }
    }

    let skipped: Vec<_> = report.skipped_files().collect();
    if !skipped.is_empty() {
        output.print("")?;
        output.info("Skipped existing files (left untouched):")?;
        for file in skipped {
            output.item(&file.to_string())?;
        }
    }

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        output.print("")?;
        output.error("Failed entries:")?;
        for entry in failures {
            output.error(&failure_line(entry))?;
        }
    }

    output.print("")?;
    output.print(&summary_line(report))?;
    if report.is_clean() && !report.dry_run {
        output.print("Done. Review and commit the new structure to Git.")?;
    }
    output.warning(SECRETS_REMINDER)?;

    Ok(())
}

fn pending_paths(entries: &[EntryReport]) -> Vec<&RelativePath> {
    entries
        .iter()
        .filter(|e| e.status == EntryStatus::WouldCreate)
        .map(|e| &e.path)
        .collect()
}

fn failure_line(entry: &EntryReport) -> String {
    match entry.failure() {
        Some(failure) => format!("{}: {}", entry.path, failure.message),
        None => entry.path.to_string(),
    }
}

fn summary_line(report: &RunReport) -> String {
    let s = report.summary();
    if report.dry_run {
        format!(
            "Summary: {} to create, {} already present, {} failed",
            s.pending,
            s.directories_present + s.files_skipped,
            s.failed
        )
    } else {
        format!(
            "Summary: {} directories created, {} already present, {} files created, {} skipped, {} failed",
            s.directories_created, s.directories_present, s.files_created, s.files_skipped, s.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundwork_core::domain::{EntryFailure, FailureKind};

    fn rel(path: &str) -> RelativePath {
        RelativePath::try_new(path).unwrap()
    }

    #[test]
    fn resolve_root_is_absolute() {
        let root = resolve_root(Some(Path::new("kb"))).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("kb"));
        assert!(resolve_root(None).unwrap().is_absolute());
    }

    #[test]
    fn resolve_root_rejects_empty_path() {
        let err = resolve_root(Some(Path::new(""))).unwrap_err();
        assert!(matches!(err, CliError::RootUnavailable { .. }));
    }

    #[test]
    fn failure_line_names_path_and_reason() {
        let entry = EntryReport::directory(
            rel("docs"),
            EntryStatus::Failed(EntryFailure {
                kind: FailureKind::PathConflict,
                message: "Path conflict at /kb/docs".into(),
            }),
        );
        assert_eq!(failure_line(&entry), "docs: Path conflict at /kb/docs");
    }

    #[test]
    fn json_envelope_carries_the_secrets_reminder() {
        let report = RunReport::new("/kb", false);
        let value = serde_json::to_value(JsonReport {
            generated_at: "2026-01-01T00:00:00Z".into(),
            report: &report,
            reminder: SECRETS_REMINDER,
        })
        .unwrap();

        assert_eq!(value["reminder"], SECRETS_REMINDER);
        assert_eq!(value["report"]["root"], "/kb");
    }

    #[test]
    fn summary_line_counts_run_outcomes() {
        let mut report = RunReport::new("/kb", false);
        report
            .directories
            .push(EntryReport::directory(rel("docs"), EntryStatus::Created));
        report
            .files
            .push(EntryReport::file(rel("README.md"), EntryStatus::Skipped));

        assert_eq!(
            summary_line(&report),
            "Summary: 1 directories created, 0 already present, 0 files created, 1 skipped, 0 failed"
        );
    }

    #[test]
    fn summary_line_for_dry_run() {
        let mut report = RunReport::new("/kb", true);
        report
            .directories
            .push(EntryReport::directory(rel("docs"), EntryStatus::WouldCreate));
        report
            .files
            .push(EntryReport::file(rel("README.md"), EntryStatus::Skipped));

        assert_eq!(
            summary_line(&report),
            "Summary: 1 to create, 1 already present, 0 failed"
        );
    }
}
