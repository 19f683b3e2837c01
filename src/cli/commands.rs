//! CLI arguments

use crate::decode::Format;
use crate::number::NumType;
use clap::Parser;
use std::path::PathBuf;

/// Infer a JSON Type Definition schema from example JSON values
#[derive(Parser, Debug)]
#[command(name = "jtd-infer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file with sample rows (defaults to stdin)
    pub input: Option<PathBuf>,

    /// Hints file (YAML or JSON)
    #[arg(long)]
    pub hints: Option<PathBuf>,

    /// Treat the string at this path as an enum (repeatable)
    #[arg(long = "enum-hint", value_name = "POINTER")]
    pub enum_hints: Vec<String>,

    /// Treat the object at this path as a homogeneous map (repeatable)
    #[arg(long = "values-hint", value_name = "POINTER")]
    pub values_hints: Vec<String>,

    /// Use the named field at this path as a tagged-union discriminant
    /// (repeatable)
    #[arg(long = "discriminator-hint", value_name = "POINTER")]
    pub discriminator_hints: Vec<String>,

    /// Default number type, uint8 through float64 (overrides the hints file)
    #[arg(long, value_name = "TYPE")]
    pub default_number_type: Option<NumType>,

    /// Input format
    #[arg(short, long, default_value = "jsonl")]
    pub format: InputFormat,

    /// Pretty-print the inferred schema
    #[arg(short, long)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Input format for sample rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// One JSON value per line
    Jsonl,
    /// The whole input is a single JSON value
    Json,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Jsonl => Format::Jsonl,
            InputFormat::Json => Format::Json,
        }
    }
}
