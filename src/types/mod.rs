pub mod app_record;
pub mod errors;

pub use app_record::{AppRecord, Column, FieldValue, VoipStatus};
pub use errors::{ExtractError, ExtractResult};
