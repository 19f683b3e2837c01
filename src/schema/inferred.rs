//! The schema-widening automaton

use super::types::{Schema, Type};
use crate::hints::Hints;
use crate::number::{InferredNumber, NumType};
use crate::types::{JsonObject, JsonValue};
use std::collections::{BTreeMap, BTreeSet};

/// The schema while being inferred.
///
/// Each variant is one state of the widening lattice. Folding a sample in
/// either keeps the state, refines its payload, or widens it toward
/// [`InferredSchema::Any`], which accepts everything and absorbs all further
/// samples. Folding never narrows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InferredSchema {
    /// No sample seen yet at this position
    #[default]
    Unknown,
    /// Top of the lattice; accepts every value
    Any,
    Boolean,
    Number(InferredNumber),
    String,
    /// A string position where every sample parsed as RFC 3339
    Timestamp,
    /// A string position covered by an enum hint
    Enum(BTreeSet<String>),
    Array(Box<InferredSchema>),
    /// A fixed-shape object. Keys move from `required` to `optional` the
    /// first time a sample omits them and never move back.
    Properties {
        required: BTreeMap<String, InferredSchema>,
        optional: BTreeMap<String, InferredSchema>,
    },
    /// A homogeneous map: one schema for every value
    Values(Box<InferredSchema>),
    /// A tagged union keyed by the named field. Each branch is folded from
    /// the samples with the discriminant field removed.
    Discriminator {
        discriminator: String,
        mapping: BTreeMap<String, InferredSchema>,
    },
    /// Wraps exactly one non-nullable state
    Nullable(Box<InferredSchema>),
}

impl InferredSchema {
    /// Create a fresh inference state
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample value into this state and return the next state.
    ///
    /// Copy-on-write: the sample is never mutated, and the returned state
    /// shares no structure the caller could observe.
    #[must_use]
    pub fn infer(self, value: &JsonValue, hints: &Hints) -> InferredSchema {
        if value.is_null() {
            return match self {
                // Null against an already-nullable state changes nothing.
                nullable @ InferredSchema::Nullable(_) => nullable,
                other => InferredSchema::Nullable(Box::new(other)),
            };
        }

        if let InferredSchema::Nullable(inner) = self {
            return InferredSchema::Nullable(Box::new(inner.infer(value, hints)));
        }

        match (self, value) {
            (InferredSchema::Any, _) => InferredSchema::Any,

            // First sample: dispatch purely on the value shape.
            (InferredSchema::Unknown, JsonValue::Bool(_)) => InferredSchema::Boolean,
            (InferredSchema::Unknown, JsonValue::Number(n)) => match n.as_f64() {
                Some(n) => InferredSchema::Number(InferredNumber::new().observe(n)),
                None => InferredSchema::Any,
            },
            (InferredSchema::Unknown, JsonValue::String(s)) => {
                if hints.is_enum_active() {
                    InferredSchema::Enum(BTreeSet::from([s.clone()]))
                } else if is_timestamp(s) {
                    InferredSchema::Timestamp
                } else {
                    InferredSchema::String
                }
            }
            (InferredSchema::Unknown, JsonValue::Array(items)) => InferredSchema::Array(Box::new(
                fold_elements(InferredSchema::Unknown, items, hints),
            )),
            (InferredSchema::Unknown, JsonValue::Object(map)) => {
                if hints.is_values_active() {
                    InferredSchema::Values(Box::new(fold_values(
                        InferredSchema::Unknown,
                        map,
                        hints,
                    )))
                } else {
                    infer_first_object(map, hints)
                }
            }

            // Matching shapes: merge in place.
            (InferredSchema::Boolean, JsonValue::Bool(_)) => InferredSchema::Boolean,
            (InferredSchema::Number(number), JsonValue::Number(n)) => match n.as_f64() {
                Some(n) => InferredSchema::Number(number.observe(n)),
                None => InferredSchema::Any,
            },
            (InferredSchema::String, JsonValue::String(_)) => InferredSchema::String,
            (InferredSchema::Timestamp, JsonValue::String(s)) => {
                // One non-parsing sample demotes the position for good.
                if is_timestamp(s) {
                    InferredSchema::Timestamp
                } else {
                    InferredSchema::String
                }
            }
            (InferredSchema::Enum(mut variants), JsonValue::String(s)) => {
                // Membership grows unconditionally; the hint was consulted
                // once, at the transition out of Unknown.
                variants.insert(s.clone());
                InferredSchema::Enum(variants)
            }
            (InferredSchema::Array(element), JsonValue::Array(items)) => {
                InferredSchema::Array(Box::new(fold_elements(*element, items, hints)))
            }
            (
                InferredSchema::Properties {
                    mut required,
                    mut optional,
                },
                JsonValue::Object(map),
            ) => {
                let missing: Vec<String> = required
                    .keys()
                    .filter(|key| !map.contains_key(*key))
                    .cloned()
                    .collect();

                for key in missing {
                    if let Some(node) = required.remove(&key) {
                        optional.insert(key, node);
                    }
                }

                for (key, item) in map {
                    let child_hints = hints.sub_hints(key);

                    if let Some(node) = required.remove(key) {
                        required.insert(key.clone(), node.infer(item, &child_hints));
                    } else if let Some(node) = optional.remove(key) {
                        optional.insert(key.clone(), node.infer(item, &child_hints));
                    } else {
                        // First seen after the initial sample: optional.
                        optional.insert(
                            key.clone(),
                            InferredSchema::Unknown.infer(item, &child_hints),
                        );
                    }
                }

                InferredSchema::Properties { required, optional }
            }
            (InferredSchema::Values(value_node), JsonValue::Object(map)) => {
                InferredSchema::Values(Box::new(fold_values(*value_node, map, hints)))
            }
            (
                InferredSchema::Discriminator {
                    discriminator,
                    mut mapping,
                },
                JsonValue::Object(map),
            ) => match map.get(&discriminator) {
                Some(JsonValue::String(tag)) => {
                    let remainder = object_without_key(map, &discriminator);
                    let branch = mapping.remove(tag).unwrap_or(InferredSchema::Unknown);
                    mapping.insert(tag.clone(), branch.infer(&remainder, hints));

                    InferredSchema::Discriminator {
                        discriminator,
                        mapping,
                    }
                }
                _ => InferredSchema::Any,
            },

            // Shape conflict, or a runtime shape the automaton does not
            // model: widen to the top of the lattice.
            _ => InferredSchema::Any,
        }
    }

    /// Materialize the terminal state into the public JTD schema.
    pub fn into_schema(self, default_num_type: NumType) -> Schema {
        match self {
            InferredSchema::Unknown | InferredSchema::Any => Schema::new(),
            InferredSchema::Boolean => Schema::with_type(Type::Boolean),
            InferredSchema::Number(number) => {
                Schema::with_type(number.into_type(default_num_type))
            }
            InferredSchema::String => Schema::with_type(Type::String),
            InferredSchema::Timestamp => Schema::with_type(Type::Timestamp),
            InferredSchema::Enum(variants) => Schema {
                enum_values: variants.into_iter().collect(),
                ..Schema::new()
            },
            InferredSchema::Array(element) => Schema {
                elements: Some(Box::new(element.into_schema(default_num_type))),
                ..Schema::new()
            },
            InferredSchema::Properties { required, optional } => Schema {
                properties: materialize_map(required, default_num_type),
                optional_properties: materialize_map(optional, default_num_type),
                ..Schema::new()
            },
            InferredSchema::Values(value_node) => Schema {
                values: Some(Box::new(value_node.into_schema(default_num_type))),
                ..Schema::new()
            },
            InferredSchema::Discriminator {
                discriminator,
                mapping,
            } => Schema {
                discriminator: Some(discriminator),
                mapping: materialize_map(mapping, default_num_type),
                ..Schema::new()
            },
            InferredSchema::Nullable(inner) => {
                let mut schema = inner.into_schema(default_num_type);
                schema.nullable = true;
                schema
            }
        }
    }
}

/// Fold array elements into the element state. Elements use their
/// stringified index as the hint key.
fn fold_elements(element: InferredSchema, items: &[JsonValue], hints: &Hints) -> InferredSchema {
    items
        .iter()
        .enumerate()
        .fold(element, |node, (index, item)| {
            node.infer(item, &hints.sub_hints(&index.to_string()))
        })
}

/// Fold object values into the shared value state of a homogeneous map.
fn fold_values(value_node: InferredSchema, map: &JsonObject, hints: &Hints) -> InferredSchema {
    map.iter().fold(value_node, |node, (key, item)| {
        node.infer(item, &hints.sub_hints(key))
    })
}

/// First object sample at a position: a discriminated union when the hinted
/// field is present as a string, a fixed-shape object otherwise.
fn infer_first_object(map: &JsonObject, hints: &Hints) -> InferredSchema {
    if let Some(field) = hints.peek_active_discriminator() {
        if let Some(JsonValue::String(tag)) = map.get(field) {
            let remainder = object_without_key(map, field);
            let branch = InferredSchema::Unknown.infer(&remainder, hints);

            return InferredSchema::Discriminator {
                discriminator: field.to_string(),
                mapping: BTreeMap::from([(tag.clone(), branch)]),
            };
        }
    }

    let required = map
        .iter()
        .map(|(key, item)| {
            (
                key.clone(),
                InferredSchema::Unknown.infer(item, &hints.sub_hints(key)),
            )
        })
        .collect();

    InferredSchema::Properties {
        required,
        optional: BTreeMap::new(),
    }
}

/// Shallow copy of an object with one key removed, so the caller's sample
/// stays untouched.
fn object_without_key(map: &JsonObject, key: &str) -> JsonValue {
    let remainder: JsonObject = map
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    JsonValue::Object(remainder)
}

fn is_timestamp(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

fn materialize_map(
    nodes: BTreeMap<String, InferredSchema>,
    default_num_type: NumType,
) -> BTreeMap<String, Schema> {
    nodes
        .into_iter()
        .map(|(key, node)| (key, node.into_schema(default_num_type)))
        .collect()
}
