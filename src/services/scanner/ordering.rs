//! Ordering of collected records.
//!
//! Records are always sorted by case-folded `a` first. A requested sort column
//! re-sorts that sequence stably, so ties keep the name order. Absent values
//! sort before every present value of the same column.

use std::cmp::Ordering;

use crate::types::app_record::{AppRecord, Column, FieldValue};

/// Case-folded string comparison. Absent sorts first.
fn compare_folded(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(l), Some(r)) => l.to_lowercase().cmp(&r.to_lowercase()),
    }
}

/// Type-aware comparison of one column between two records.
pub fn compare_by(column: Column, left: &AppRecord, right: &AppRecord) -> Ordering {
    match (left.field(column), right.field(column)) {
        (FieldValue::Integer(l), FieldValue::Integer(r)) => l.cmp(&r),
        (FieldValue::Absent, FieldValue::Absent) => Ordering::Equal,
        (FieldValue::Absent, _) => Ordering::Less,
        (_, FieldValue::Absent) => Ordering::Greater,
        (FieldValue::Text(l), FieldValue::Text(r)) => compare_folded(Some(l), Some(r)),
        // A column always holds a single type
        (FieldValue::Integer(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Integer(_)) => Ordering::Greater,
    }
}

/// Base order: case-folded name. Records with equal folded names are put in a
/// fixed order by their remaining fields so output does not depend on hashing.
fn compare_base(left: &AppRecord, right: &AppRecord) -> Ordering {
    compare_folded(left.a.as_deref(), right.a.as_deref())
        .then_with(|| left.a.cmp(&right.a))
        .then_with(|| left.i.cmp(&right.i))
        .then_with(|| left.p.cmp(&right.p))
        .then_with(|| left.s.cmp(&right.s))
        .then_with(|| left.b.cmp(&right.b))
        .then_with(|| left.v.cmp(&right.v))
}

/// Sort records by name, then stably by `sort` if given.
pub fn order_records(mut records: Vec<AppRecord>, sort: Option<Column>) -> Vec<AppRecord> {
    records.sort_by(compare_base);

    if let Some(column) = sort {
        records.sort_by(|l, r| compare_by(column, l, r));
    }

    records
}

#[cfg(test)]
#[path = "tests/ordering_tests.rs"]
mod tests;
