//! Maps decoded plist payloads onto the fixed [`AppRecord`] schema.

use std::path::Path;

use crate::services::ipa::{self, IpaPayloads};
use crate::services::payload::{decode_plist, PlistDict};
use crate::types::app_record::{AppRecord, VoipStatus};
use crate::types::errors::ExtractResult;

const KEY_ITEM_NAME: &str = "itemName";
const KEY_ITEM_ID: &str = "itemId";
const KEY_DISPLAY_NAME: &str = "CFBundleDisplayName";
const KEY_BACKGROUND_MODES: &str = "UIBackgroundModes";

const VOIP_MODE: &str = "voip";

/// Inputs available to screen-name derivation.
#[derive(Debug, Clone, Copy)]
pub struct NameSources<'a> {
    pub info: &'a PlistDict,
    pub bundle_name: &'a str,
}

/// One step of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStep {
    /// `CFBundleDisplayName` from `Info.plist`.
    DisplayName,
    /// Bundle directory name without its extension.
    BundleName,
}

impl NameStep {
    fn resolve(&self, sources: NameSources<'_>) -> ExtractResult<Option<String>> {
        match self {
            NameStep::DisplayName => Ok(sources.info.get_str(KEY_DISPLAY_NAME)?.map(str::to_string)),
            NameStep::BundleName => Ok(Some(sources.bundle_name.to_string())),
        }
    }
}

/// Ordered steps evaluated until one yields a value.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    steps: Vec<NameStep>,
}

impl FallbackChain {
    pub fn new(steps: Vec<NameStep>) -> Self {
        Self { steps }
    }

    /// Chain for the home-screen name: display name, then bundle name.
    pub fn screen_name() -> Self {
        Self::new(vec![NameStep::DisplayName, NameStep::BundleName])
    }

    pub fn resolve(&self, sources: NameSources<'_>) -> ExtractResult<Option<String>> {
        for step in &self.steps {
            if let Some(value) = step.resolve(sources)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// `VOIP-YES` if any background mode equals `voip`, ignoring case.
pub fn voip_status(info: &PlistDict) -> ExtractResult<VoipStatus> {
    let has_voip = info
        .get_string_list(KEY_BACKGROUND_MODES)?
        .iter()
        .any(|mode| mode.to_lowercase() == VOIP_MODE);

    Ok(if has_voip {
        VoipStatus::Yes
    } else {
        VoipStatus::No
    })
}

/// Build a record from already-decoded payloads.
pub fn normalize_record(
    metadata: &PlistDict,
    info: &PlistDict,
    archive_name: &str,
    bundle_path: &str,
) -> ExtractResult<AppRecord> {
    let b = ipa::bundle_name(bundle_path);
    let v = voip_status(info)?;
    let s = FallbackChain::screen_name()
        .resolve(NameSources {
            info,
            bundle_name: &b,
        })?
        .unwrap_or_default();
    let a = metadata.get_str(KEY_ITEM_NAME)?.map(str::to_string);
    let i = metadata.get_integer_like(KEY_ITEM_ID)?;

    Ok(AppRecord {
        a,
        s,
        i,
        p: archive_name.to_string(),
        b,
        v,
    })
}

/// Decode both payloads of one archive and normalize them.
pub fn normalize_payloads(archive_path: &Path, payloads: &IpaPayloads) -> ExtractResult<AppRecord> {
    let info = decode_plist(&payloads.info)?;
    let metadata = decode_plist(&payloads.metadata)?;

    let archive_name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    normalize_record(&metadata, &info, &archive_name, &payloads.bundle_path)
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
