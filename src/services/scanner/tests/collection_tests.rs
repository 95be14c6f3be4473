use super::*;
use crate::types::app_record::VoipStatus;

fn record(name: &str, id: i64, archive: &str) -> AppRecord {
    AppRecord {
        a: Some(name.to_string()),
        s: name.to_string(),
        i: id,
        p: archive.to_string(),
        b: name.to_string(),
        v: VoipStatus::No,
    }
}

#[test]
fn test_identical_records_collapse() {
    let mut set = AppRecordSet::new();
    assert!(set.insert(record("Foo", 1, "Foo.ipa")));
    assert!(!set.insert(record("Foo", 1, "Foo.ipa")));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_records_differing_in_one_field_are_kept() {
    let mut set = AppRecordSet::new();
    set.extend([
        record("Foo", 1, "Foo.ipa"),
        record("Foo", 1, "Foo 1.ipa"),
        record("Foo", 2, "Foo.ipa"),
    ]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_empty_set_fails_with_no_valid_archives() {
    let set = AppRecordSet::new();
    assert!(set.is_empty());
    let err = set.into_records().unwrap_err();
    assert!(matches!(err, ExtractError::NoValidArchives));
}

#[test]
fn test_into_records() {
    let mut set = AppRecordSet::new();
    set.insert(record("Foo", 1, "Foo.ipa"));
    set.insert(record("Bar", 2, "Bar.ipa"));
    assert_eq!(set.into_records().unwrap().len(), 2);
}
