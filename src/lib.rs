//! List App Store metadata from a directory of `.ipa` archives.
//!
//! Each archive's `iTunesMetadata.plist` and `Payload/<bundle>.app/Info.plist`
//! are decoded into an [`AppRecord`](types::AppRecord); records are
//! deduplicated, ordered, and written as a tab separated table.

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use commands::{list_apps, list_apps_to, ListReport};
pub use services::config::{OutputDestination, OutputRequest};
pub use types::{AppRecord, Column, ExtractError};
