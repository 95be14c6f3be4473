//! The `list` run: scan a directory of `.ipa` files and write the app table.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::services::config::OutputRequest;
use crate::services::ipa;
use crate::services::output::{Dialect, OutputSink, TableWriter};
use crate::services::scanner::{self, AppRecordSet};
use crate::types::app_record::AppRecord;
use crate::types::errors::{ExtractError, ExtractResult};

/// An archive that was skipped in tolerant mode.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedArchive {
    pub path: PathBuf,
    pub kind: &'static str,
    pub reason: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ListReport {
    pub archives_found: usize,
    pub records_written: usize,
    pub skipped: Vec<SkippedArchive>,
}

/// Records collected from a directory, before ordering.
#[derive(Debug)]
pub struct ScanOutcome {
    pub archives_found: usize,
    pub records: Vec<AppRecord>,
    pub skipped: Vec<SkippedArchive>,
}

/// Read one archive into a record.
pub fn process_ipa(archive_path: &Path) -> ExtractResult<AppRecord> {
    let payloads = ipa::read_ipa(archive_path)?;
    scanner::normalize_payloads(archive_path, &payloads)
}

/// Process every `.ipa` in `dir`, one at a time, into a deduplicated set.
///
/// A broken archive aborts the scan unless `tolerant` is set, in which case it
/// is logged and recorded in `skipped`.
pub fn collect_records(dir: &Path, tolerant: bool) -> ExtractResult<ScanOutcome> {
    let archives = match scanner::find_ipa_files(dir) {
        Ok(archives) => archives,
        Err(e @ ExtractError::NoArchivesFound(_)) => {
            log::error!("No .ipa files in {}", dir.display());
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let archives_found = archives.len();
    log::info!("Found {archives_found} .ipa file(s) in {}", dir.display());

    let mut set = AppRecordSet::new();
    let mut skipped = Vec::new();

    for archive in &archives {
        match process_ipa(archive) {
            Ok(record) => {
                log::debug!("Parsed {}", archive.display());
                set.insert(record);
            }
            Err(e) if tolerant && e.is_per_archive() => {
                log::warn!(
                    "Skipping '{}' ({}): {e}",
                    archive.display(),
                    e.kind()
                );
                skipped.push(SkippedArchive {
                    path: archive.clone(),
                    kind: e.kind(),
                    reason: e.to_string(),
                });
            }
            Err(e) if e.is_per_archive() => {
                return Err(e.in_archive(archive.display().to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    if set.is_empty() {
        log::error!(
            "None of the {archives_found} .ipa file(s) in {} could be read",
            dir.display()
        );
    }

    Ok(ScanOutcome {
        archives_found,
        records: set.into_records()?,
        skipped,
    })
}

/// Run the whole pipeline for `request`, writing standard-output tables to `stdout`.
pub fn list_apps_to<W: Write>(request: &OutputRequest, stdout: &mut W) -> ExtractResult<ListReport> {
    let outcome = collect_records(&request.input_dir, request.tolerant)?;
    let records = scanner::order_records(outcome.records, request.sort);

    let mut sink = OutputSink::open(&request.destination)?;
    let records_written = {
        let mut writer = TableWriter::new(
            sink.writer(),
            Dialect::default(),
            request.encoding,
            request.columns.clone(),
        );
        writer.write_all(&records)?;
        let written = writer.rows_written();
        writer.into_inner()?;
        written
    };
    sink.finish(stdout)?;

    Ok(ListReport {
        archives_found: outcome.archives_found,
        records_written,
        skipped: outcome.skipped,
    })
}

/// Run the whole pipeline for `request` against the process's standard output.
pub fn list_apps(request: &OutputRequest) -> ExtractResult<ListReport> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    list_apps_to(request, &mut lock)
}

#[cfg(test)]
#[path = "tests/list_cmds_tests.rs"]
mod tests;
