use std::collections::HashSet;

use crate::types::app_record::AppRecord;
use crate::types::errors::{ExtractError, ExtractResult};

/// Records gathered across all archives of one run, without duplicates.
#[derive(Debug, Default)]
pub struct AppRecordSet {
    records: HashSet<AppRecord>,
}

impl AppRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns `false` if an identical record was already present.
    pub fn insert(&mut self, record: AppRecord) -> bool {
        let added = self.records.insert(record);
        if !added {
            log::debug!("Collapsed duplicate record");
        }
        added
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the set. Fails with `NoValidArchives` if nothing was collected.
    pub fn into_records(self) -> ExtractResult<Vec<AppRecord>> {
        if self.records.is_empty() {
            return Err(ExtractError::NoValidArchives);
        }
        Ok(self.records.into_iter().collect())
    }
}

impl Extend<AppRecord> for AppRecordSet {
    fn extend<T: IntoIterator<Item = AppRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
