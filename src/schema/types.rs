//! JTD wire types

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// JTD primitive type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Boolean,
    String,
    Timestamp,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Float32,
    Float64,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Timestamp => "timestamp",
            Type::Uint8 => "uint8",
            Type::Int8 => "int8",
            Type::Uint16 => "uint16",
            Type::Int16 => "int16",
            Type::Uint32 => "uint32",
            Type::Int32 => "int32",
            Type::Float32 => "float32",
            Type::Float64 => "float64",
        };
        f.write_str(name)
    }
}

/// A JSON Type Definition schema.
///
/// Every field is omitted from the wire format when empty, so the untyped
/// schema serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Shared definitions referenced via `ref`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, Schema>,

    /// Free-form metadata
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, JsonValue>,

    /// Whether null is accepted in addition to the described shape
    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,

    /// Reference into `definitions`
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Primitive type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<Type>,

    /// Closed set of accepted string values
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Element schema for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Box<Schema>>,

    /// Required object properties
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    /// Optional object properties
    #[serde(
        rename = "optionalProperties",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub optional_properties: BTreeMap<String, Schema>,

    /// Whether properties beyond the declared ones are accepted
    #[serde(rename = "additionalProperties", skip_serializing_if = "is_false")]
    pub additional_properties: bool,

    /// Value schema for homogeneous maps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Box<Schema>>,

    /// Field whose string value selects the mapping branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    /// Branch schemas keyed by discriminant value
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub mapping: BTreeMap<String, Schema>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Schema {
    /// Create an empty, untyped schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema with a primitive type
    pub fn with_type(schema_type: Type) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to a pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
