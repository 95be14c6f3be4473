use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::app_record::Column;
use crate::types::errors::{ExtractError, ExtractResult};

/// Where the finished table goes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputDestination {
    File(PathBuf),
    #[default]
    Stdout,
}

/// Validated configuration of one run.
#[derive(Debug, Clone)]
pub struct OutputRequest {
    pub input_dir: PathBuf,
    pub columns: Vec<Column>,
    pub sort: Option<Column>,
    pub destination: OutputDestination,
    /// Skip broken archives instead of aborting.
    pub tolerant: bool,
    pub encoding: &'static Encoding,
}

impl OutputRequest {
    /// Request with default columns, no sort, stdout, strict, UTF-8.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            columns: Column::DEFAULT_ORDER.to_vec(),
            sort: None,
            destination: OutputDestination::Stdout,
            tolerant: false,
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Build a request from raw option strings.
    pub fn from_options(
        input_dir: impl Into<PathBuf>,
        columns: Option<&str>,
        sort: Option<&str>,
        output: Option<PathBuf>,
        tolerant: bool,
        encoding: Option<&str>,
    ) -> ExtractResult<Self> {
        let mut request = Self::new(input_dir);
        if let Some(list) = columns {
            request.columns = parse_columns(list)?;
        }
        request.sort = sort.map(str::parse::<Column>).transpose()?;
        if let Some(path) = output {
            request.destination = OutputDestination::File(path);
        }
        request.tolerant = tolerant;
        if let Some(label) = encoding {
            request.encoding = parse_encoding(label)?;
        }
        Ok(request)
    }
}

/// Parse a comma separated column list such as `s,i`.
///
/// Empty items are ignored and repeated codes are kept once, at their first
/// position. At least one column is required.
pub fn parse_columns(list: &str) -> ExtractResult<Vec<Column>> {
    let mut columns: Vec<Column> = Vec::new();
    for item in list.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let column: Column = item.parse()?;
        if !columns.contains(&column) {
            columns.push(column);
        }
    }

    if columns.is_empty() {
        return Err(ExtractError::Configuration(
            "at least one attribute must be specified".to_string(),
        ));
    }

    Ok(columns)
}

/// Resolve a WHATWG encoding label such as `utf-8` or `shift_jis`.
pub fn parse_encoding(label: &str) -> ExtractResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
        ExtractError::Configuration(format!("'{label}' is not a known text encoding"))
    })
}
