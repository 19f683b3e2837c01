//! Command-line interface
//!
//! Reads sample rows from a file or stdin, folds them through an inference
//! session, and prints the inferred JTD schema.
//!
//! # Usage
//!
//! ```text
//! jtd-infer samples.jsonl --enum-hint /status --default-number-type float64
//! cat response.json | jtd-infer --format json --pretty
//! ```

mod commands;
mod runner;

pub use commands::{Cli, InputFormat};
pub use runner::Runner;
