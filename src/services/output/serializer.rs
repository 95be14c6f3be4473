use encoding_rs::Encoding;
use std::io::Write;

use crate::types::app_record::{AppRecord, Column, FieldValue};
use crate::types::errors::ExtractResult;

/// Field delimiter and row terminator of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: char,
    pub terminator: &'static str,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            terminator: "\n",
        }
    }
}

/// Renders records as delimited rows in a target text encoding.
///
/// Values are written as-is: delimiters or newlines inside a value are not
/// quoted or escaped.
pub struct TableWriter<W: Write> {
    out: W,
    dialect: Dialect,
    encoding: &'static Encoding,
    columns: Vec<Column>,
    rows_written: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, dialect: Dialect, encoding: &'static Encoding, columns: Vec<Column>) -> Self {
        Self {
            out,
            dialect,
            encoding,
            columns,
            rows_written: 0,
        }
    }

    /// Render one row as text, without encoding.
    pub fn render_row(&self, record: &AppRecord) -> String {
        let mut line = String::new();
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                line.push(self.dialect.delimiter);
            }
            match record.field(*column) {
                FieldValue::Text(s) => line.push_str(s),
                FieldValue::Integer(n) => line.push_str(&n.to_string()),
                FieldValue::Absent => {}
            }
        }
        line.push_str(self.dialect.terminator);
        line
    }

    pub fn write_record(&mut self, record: &AppRecord) -> ExtractResult<()> {
        let line = self.render_row(record);
        let (bytes, _, had_errors) = self.encoding.encode(&line);
        if had_errors {
            log::warn!(
                "Row for '{}' has characters not representable in {}",
                record.p,
                self.encoding.name()
            );
        }
        self.out.write_all(&bytes)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> ExtractResult<()>
    where
        I: IntoIterator<Item = &'a AppRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> ExtractResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
#[path = "tests/serializer_tests.rs"]
mod tests;
