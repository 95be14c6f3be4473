//! Discovery of `.ipa` files in the input directory.

use std::path::{Path, PathBuf};

use crate::types::errors::{ExtractError, ExtractResult};

/// Extension of candidate archives. Matched case-sensitively.
const IPA_EXTENSION: &str = "ipa";

/// List the `*.ipa` files directly inside `dir`, in directory listing order.
///
/// Fails with `InvalidPath` if `dir` is not a directory and with
/// `NoArchivesFound` if nothing matches.
pub fn find_ipa_files(dir: &Path) -> ExtractResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::InvalidPath(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| ExtractError::Io(format!("Failed to read {}: {e}", dir.display())))?;

    let mut archives = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let is_ipa = path
            .extension()
            .map(|ext| ext == IPA_EXTENSION)
            .unwrap_or(false);
        if is_ipa {
            archives.push(path);
        }
    }

    if archives.is_empty() {
        return Err(ExtractError::NoArchivesFound(dir.to_path_buf()));
    }

    Ok(archives)
}

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod tests;
