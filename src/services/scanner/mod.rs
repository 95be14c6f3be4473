//! Directory scan, record normalization, collection and ordering.

pub mod collection;
pub mod normalizer;
pub mod ordering;
pub mod walker;

pub use collection::AppRecordSet;
pub use normalizer::{normalize_payloads, normalize_record, FallbackChain, NameSources, NameStep};
pub use ordering::order_records;
pub use walker::find_ipa_files;
