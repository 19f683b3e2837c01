//! Inference engine tests

use super::*;
use crate::hints::{HintSet, Hints};
use crate::number::NumType;
use pretty_assertions::assert_eq;
use serde_json::json;

fn infer_rows(rows: &[serde_json::Value], hints: Hints) -> Schema {
    rows.iter()
        .fold(Inferrer::new(hints), |inferrer, row| inferrer.infer(row))
        .into_schema()
}

#[test]
fn test_infer_simple_object() {
    let schema = infer_rows(
        &[json!({"name": "Joe", "age": 42, "hobbies": ["code", "animals"]})],
        Hints::new(),
    );

    assert_eq!(
        schema.to_json(),
        json!({
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "uint8"},
                "hobbies": {"elements": {"type": "string"}}
            }
        })
    );
}

#[test]
fn test_infer_with_enum_hints() {
    let hints = Hints::new().with_enums(
        HintSet::new()
            .with_pointer("/name")
            .with_pointer("/address/city"),
    );

    let schema = infer_rows(
        &[
            json!({"address": {"city": "Stockholm"}, "name": "Joe", "age": 42}),
            json!({"address": {"city": "Umeå"}, "name": "Labero", "age": 42}),
        ],
        hints,
    );

    assert_eq!(
        schema.to_json(),
        json!({
            "properties": {
                "name": {"enum": ["Joe", "Labero"]},
                "age": {"type": "uint8"},
                "address": {
                    "properties": {"city": {"enum": ["Stockholm", "Umeå"]}}
                }
            }
        })
    );
}

#[test]
fn test_infer_with_values_hint() {
    let hints = Hints::new().with_values(HintSet::new().with_pointer("/"));

    let schema = infer_rows(
        &[
            json!({"x": [1, 2, 3], "y": [4, 5, 6], "z": [7, 8, 9]}),
            json!({"x": [1, 2, 3], "y": [4, 5, -600], "z": [7, 8, 9]}),
        ],
        hints,
    );

    assert_eq!(
        schema.to_json(),
        json!({"values": {"elements": {"type": "int16"}}})
    );
}

#[test]
fn test_infer_with_discriminator_hint() {
    let hints = Hints::new().with_discriminator(HintSet::new().with_pointer("/-/type"));

    let schema = infer_rows(
        &[json!([
            {"type": "s", "value": "foo"},
            {"type": "n", "value": 3.14}
        ])],
        hints,
    );

    assert_eq!(
        schema.to_json(),
        json!({
            "elements": {
                "discriminator": "type",
                "mapping": {
                    "s": {"properties": {"value": {"type": "string"}}},
                    "n": {"properties": {"value": {"type": "float64"}}}
                }
            }
        })
    );
}

#[test]
fn test_infer_honors_default_num_type() {
    let hints = Hints::new().with_default_num_type(NumType::Float32);
    let schema = infer_rows(&[json!({"age": 42})], hints);

    assert_eq!(
        schema.to_json(),
        json!({"properties": {"age": {"type": "float32"}}})
    );
}

#[test]
fn test_infer_from_texts() {
    let rows = [
        r#"{"name": "Joe", "age": 42}"#,
        r#"{"name": "Labero", "age": 52}"#,
    ];

    let schema = infer_from_texts(rows, Hints::new()).into_schema();
    assert_eq!(
        schema.to_json(),
        json!({
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "uint8"}
            }
        })
    );
}

#[test]
fn test_infer_from_texts_stops_at_first_bad_row() {
    let rows = [
        r#"{"name": "Joe"}"#,
        r#"{"name": "#,
        r#"{"name": 42}"#,
    ];

    // The conflicting third row is never folded: name stays a string.
    let schema = infer_from_texts(rows, Hints::new()).into_schema();
    assert_eq!(
        schema.to_json(),
        json!({"properties": {"name": {"type": "string"}}})
    );
}

#[test]
fn test_empty_session_materializes_to_untyped_schema() {
    let schema = Inferrer::new(Hints::new()).into_schema();
    assert_eq!(schema.to_json(), json!({}));
}
