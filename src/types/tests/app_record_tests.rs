use super::*;
use std::collections::HashSet;

fn record(a: Option<&str>, i: i64) -> AppRecord {
    AppRecord {
        a: a.map(str::to_string),
        s: "Screen".to_string(),
        i,
        p: "Foo.ipa".to_string(),
        b: "Foo".to_string(),
        v: VoipStatus::No,
    }
}

#[test]
fn test_column_from_str() {
    for column in Column::ALL {
        let parsed: Column = column.code().to_string().parse().unwrap();
        assert_eq!(parsed, column);
    }
}

#[test]
fn test_column_from_str_unknown_is_configuration_error() {
    let err = "x".parse::<Column>().unwrap_err();
    assert!(matches!(err, ExtractError::Configuration(_)));
    assert!(err.to_string().contains("'x' is not an available attribute"));

    // Codes are case-sensitive
    assert!("A".parse::<Column>().is_err());
}

#[test]
fn test_structural_equality_covers_every_field() {
    let base = record(Some("Foo"), 123);
    assert_eq!(base, record(Some("Foo"), 123));

    let mut other = base.clone();
    other.v = VoipStatus::Yes;
    assert_ne!(base, other);

    let mut other = base.clone();
    other.p = "Foo copy.ipa".to_string();
    assert_ne!(base, other);

    let set: HashSet<AppRecord> = [base.clone(), base.clone(), other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_field_values() {
    let rec = record(Some("Foo"), 42);
    assert_eq!(rec.field(Column::A), FieldValue::Text("Foo"));
    assert_eq!(rec.field(Column::I), FieldValue::Integer(42));
    assert_eq!(rec.field(Column::V), FieldValue::Text("VOIP-NO"));

    let missing = record(None, 42);
    assert_eq!(missing.field(Column::A), FieldValue::Absent);
}

#[test]
fn test_voip_status_serialization() {
    assert_eq!(serde_json::to_string(&VoipStatus::Yes).unwrap(), "\"VOIP-YES\"");
    assert_eq!(VoipStatus::No.to_string(), "VOIP-NO");
}
