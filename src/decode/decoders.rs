//! Decoder implementations

use super::types::RowDecoder;
use crate::error::{Error, Result};
use crate::types::JsonValue;

// ============================================================================
// JSON Decoder
// ============================================================================

/// Decodes the whole input as a single sample value.
///
/// A top-level array stays one sample: the engine treats it as an array
/// position, not as a batch of rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl RowDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>> {
        let value: JsonValue = serde_json::from_str(body)?;
        Ok(vec![value])
    }
}

// ============================================================================
// JSONL Decoder
// ============================================================================

/// Decodes one sample value per non-empty line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlDecoder;

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self
    }
}

impl RowDecoder for JsonlDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonValue>> {
        let mut rows = Vec::new();

        for (line_num, line) in body.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let value: JsonValue = serde_json::from_str(line)
                .map_err(|e| Error::row_decode(line_num + 1, e.to_string()))?;

            rows.push(value);
        }

        Ok(rows)
    }
}
