use super::*;
use std::str::FromStr;

#[test]
fn test_typed_id_from_raw() {
    let id = LabourId::from_raw(7);
    assert_eq!(id.into_inner(), 7);
    assert_eq!(LabourId::from(7), id);
}

#[test]
fn test_typed_id_display() {
    assert_eq!(format!("{}", ExpenseId::from_raw(42)), "42");
}

#[test]
fn test_typed_id_from_str() {
    assert_eq!(LabourId::from_str("12").unwrap(), LabourId::from_raw(12));
    assert_eq!(LabourId::from_str(" 3 ").unwrap(), LabourId::from_raw(3));
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(ExpenseId::from_str("invalid").is_err());
    assert!(ExpenseId::from_str("").is_err());
}

#[test]
fn test_typed_id_serializes_as_plain_number() {
    let json = serde_json::to_string(&LabourId::from_raw(5)).unwrap();
    assert_eq!(json, "5");

    let id: ExpenseId = serde_json::from_str("9").unwrap();
    assert_eq!(id, ExpenseId::from_raw(9));
}
