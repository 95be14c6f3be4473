//! `.ipa` archive access: payload location and extraction.

pub mod locator;
mod reader;

pub use locator::{bundle_name, locate_entries, EntryLocation};
pub use reader::{extract_payloads, read_ipa, IpaPayloads};
