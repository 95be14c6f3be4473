//! Delimited table output.

mod serializer;
mod sink;

pub use serializer::{Dialect, TableWriter};
pub use sink::OutputSink;
