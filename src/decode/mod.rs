//! Input row decoding
//!
//! Supports: JSON, JSONL
//!
//! # Overview
//!
//! Decoders turn raw input text into the generic JSON values the inference
//! engine folds. Each decoder yields a row per sample: the JSONL decoder one
//! value per non-empty line, the JSON decoder the whole body as one value.

mod decoders;
mod types;

pub use decoders::{JsonDecoder, JsonlDecoder};
pub use types::{Format, RowDecoder};

#[cfg(test)]
mod tests;
