//! Hints file loader
//!
//! Parse hint configurations from YAML (or JSON) files.
//!
//! # Overview
//!
//! A hints file names the default number type and the hint paths in
//! `/`-separated pointer syntax:
//!
//! ```yaml
//! default_number_type: float32
//! enums:
//!   - /name
//!   - /address/city
//! values:
//!   - /lookup
//! discriminator:
//!   - /-/type
//! ```

mod types;

pub use types::HintsFile;

use crate::error::{Error, Result};
use crate::hints::Hints;
use std::fs;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Load a hint configuration from a file.
///
/// YAML is a superset of JSON, so both `.yaml` and `.json` hints files work.
pub fn load_hints(path: impl AsRef<Path>) -> Result<Hints> {
    load_hints_file(path).map(HintsFile::into_hints)
}

/// Load the raw hints document from a file, for callers that extend it
/// before converting.
pub fn load_hints_file(path: impl AsRef<Path>) -> Result<HintsFile> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    Ok(serde_yaml::from_str(&content)?)
}

/// Parse a hint configuration from a string
pub fn load_hints_from_str(content: &str) -> Result<Hints> {
    let file: HintsFile = serde_yaml::from_str(content)?;
    Ok(file.into_hints())
}
