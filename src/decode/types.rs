//! Decoder types

use crate::error::Result;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Input format for sample rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON value per line
    #[default]
    Jsonl,
    /// The whole input is a single JSON value
    Json,
}

/// Trait for decoding raw input text into sample rows
pub trait RowDecoder {
    /// Decode the input body into a sequence of sample values
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>>;
}
