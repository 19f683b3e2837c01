//! Decoder tests

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_json_decoder_single_value() {
    let rows = JsonDecoder::new().decode(r#"{"name": "Joe"}"#).unwrap();
    assert_eq!(rows, vec![json!({"name": "Joe"})]);
}

#[test]
fn test_json_decoder_keeps_top_level_array_as_one_row() {
    let rows = JsonDecoder::new().decode("[1, 2, 3]").unwrap();
    assert_eq!(rows, vec![json!([1, 2, 3])]);
}

#[test]
fn test_json_decoder_rejects_malformed_input() {
    assert!(JsonDecoder::new().decode("{").is_err());
}

#[test]
fn test_jsonl_decoder_one_row_per_line() {
    let body = "{\"a\": 1}\n\n{\"a\": 2}\n";
    let rows = JsonlDecoder::new().decode(body).unwrap();
    assert_eq!(rows, vec![json!({"a": 1}), json!({"a": 2})]);
}

#[test]
fn test_jsonl_decoder_reports_offending_line() {
    let body = "{\"a\": 1}\n{oops}\n";
    let err = JsonlDecoder::new().decode(body).unwrap_err();

    match err {
        Error::RowDecode { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_format_default() {
    assert_eq!(Format::default(), Format::Jsonl);
}
