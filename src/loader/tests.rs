//! Hints file loader tests

use super::*;
use crate::number::NumType;
use pretty_assertions::assert_eq;

#[test]
fn test_load_yaml_hints() {
    let content = r"
default_number_type: float32
enums:
  - /name
  - /address/city
discriminator:
  - /-/type
";

    let hints = load_hints_from_str(content).unwrap();

    assert_eq!(hints.default_num_type(), NumType::Float32);
    assert!(hints.sub_hints("name").is_enum_active());
    assert!(hints
        .sub_hints("address")
        .sub_hints("city")
        .is_enum_active());
    assert_eq!(
        hints.sub_hints("7").peek_active_discriminator(),
        Some("type")
    );
    assert!(!hints.is_values_active());
}

#[test]
fn test_load_json_hints() {
    let content = r#"{"values": ["/"], "enums": []}"#;
    let hints = load_hints_from_str(content).unwrap();

    assert!(hints.is_values_active());
    assert_eq!(hints.default_num_type(), NumType::Uint8);
}

#[test]
fn test_missing_fields_default_to_empty() {
    let hints = load_hints_from_str("{}").unwrap();

    assert!(!hints.is_enum_active());
    assert!(!hints.is_values_active());
    assert_eq!(hints.peek_active_discriminator(), None);
    assert_eq!(hints.default_num_type(), NumType::Uint8);
}

#[test]
fn test_unknown_fields_are_rejected() {
    assert!(load_hints_from_str("enum_paths: []").is_err());
}

#[test]
fn test_load_hints_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hints.yaml");
    std::fs::write(&path, "enums:\n  - /kind\n").unwrap();

    let hints = load_hints(&path).unwrap();
    assert!(hints.sub_hints("kind").is_enum_active());
}

#[test]
fn test_load_hints_missing_file() {
    let err = load_hints("does-not-exist.yaml").unwrap_err();
    assert!(err.to_string().contains("File not found"));
}
