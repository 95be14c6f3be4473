use std::fs;
use std::io::{Read, Seek};
use std::path::Path;

use super::locator::{self, EntryLocation};
use crate::types::errors::{ExtractError, ExtractResult};

/// Raw payload bytes pulled out of one `.ipa`.
#[derive(Debug, Clone)]
pub struct IpaPayloads {
    pub metadata: Vec<u8>,
    pub info: Vec<u8>,
    pub bundle_path: String,
}

/// Open an `.ipa` from disk and extract its payloads.
pub fn read_ipa(archive_path: &Path) -> ExtractResult<IpaPayloads> {
    let file = fs::File::open(archive_path)
        .map_err(|e| ExtractError::NotAnArchive(format!("Failed to open archive: {e}")))?;
    extract_payloads(file)
}

/// Extract payloads from any seekable ZIP source.
pub fn extract_payloads<R: Read + Seek>(reader: R) -> ExtractResult<IpaPayloads> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let location = {
        let names: Vec<&str> = archive.file_names().collect();
        log::debug!("Archive has {} entries", names.len());
        locator::locate_entries(names)?
    };

    let EntryLocation {
        metadata_entry,
        info_entry,
        bundle_path,
    } = location;

    let metadata = read_entry(&mut archive, &metadata_entry)?;
    let info = read_entry(&mut archive, &info_entry)?;

    Ok(IpaPayloads {
        metadata,
        info,
        bundle_path,
    })
}

fn read_entry<R: Read + Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> ExtractResult<Vec<u8>> {
    let mut entry = archive.by_name(name)?;
    // Declared sizes come from the archive and are not trusted for allocation.
    let mut buf = Vec::new();
    entry
        .read_to_end(&mut buf)
        .map_err(|e| ExtractError::NotAnArchive(format!("Failed to read entry '{name}': {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
