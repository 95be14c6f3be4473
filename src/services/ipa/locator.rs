//! Locates the two plist payloads inside an `.ipa` entry listing.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::errors::{ExtractError, ExtractResult};

/// `Payload/<bundle>.app/Info.plist`, anchored at the start of the entry name.
static RE_BUNDLE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\./)?payload/[^/]+\.app/info\.plist").expect("Invalid regex")
});

/// `Payload/<bundle>.app` anywhere in the entry name.
static RE_BUNDLE_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\./)?payload/[^/]+\.app").expect("Invalid regex"));

/// Accepted spellings (lowercased) of the store metadata entry.
const METADATA_NAMES: &[&str] = &["itunesmetadata.plist", "./itunesmetadata.plist"];

/// Entry names of the payloads found in one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocation {
    /// Name of the `iTunesMetadata.plist` entry.
    pub metadata_entry: String,
    /// Name of the single top-level `Info.plist` entry.
    pub info_entry: String,
    /// Last `Payload/<bundle>.app` prefix seen while scanning. Empty if none.
    pub bundle_path: String,
}

/// Find the metadata entry, the bundle `Info.plist` entry and the bundle path.
///
/// The metadata entry is matched case-insensitively; the last match in listing
/// order wins. Exactly one `Info.plist` directly under a `Payload/*.app` must
/// exist. The bundle path is the last loose `Payload/<bundle>.app` match in
/// listing order and is not required to be the `Info.plist`'s parent.
pub fn locate_entries<'a, I>(names: I) -> ExtractResult<EntryLocation>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut metadata_entry: Option<&str> = None;
    let mut possible_infos: Vec<&str> = Vec::new();
    let mut bundle_path = String::new();

    for name in names {
        let lower = name.to_lowercase();

        if METADATA_NAMES.contains(&lower.as_str()) {
            metadata_entry = Some(name);
        }

        if lower.ends_with(".app/info.plist")
            && (lower.starts_with("payload/") || lower.starts_with("./payload/"))
            && !possible_infos.contains(&name)
        {
            possible_infos.push(name);
        }

        if let Some(found) = RE_BUNDLE_DIR.find(name) {
            bundle_path = found.as_str().to_string();
        }
    }

    let metadata_entry = metadata_entry.ok_or(ExtractError::MetadataMissing)?;

    let real_infos: Vec<&str> = possible_infos
        .into_iter()
        .filter(|name| RE_BUNDLE_INFO.is_match(name))
        .collect();

    if real_infos.len() != 1 {
        log::debug!("Bundle Info.plist candidates: {real_infos:?}");
        return Err(ExtractError::AmbiguousOrMissingBundleInfo(real_infos.len()));
    }

    Ok(EntryLocation {
        metadata_entry: metadata_entry.to_string(),
        info_entry: real_infos[0].to_string(),
        bundle_path,
    })
}

/// Bundle name derived from a bundle path: last segment without its extension.
///
/// `Payload/Foo.app` becomes `Foo`; an empty path yields an empty name.
/// Only the final extension is removed, so `My.Game.app` becomes `My.Game`.
pub fn bundle_name(bundle_path: &str) -> String {
    let segment = bundle_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    match segment.rfind('.') {
        Some(dot) if dot > 0 => segment[..dot].to_string(),
        _ => segment.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/locator_tests.rs"]
mod tests;
