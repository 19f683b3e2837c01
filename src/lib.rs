//! # jtd-infer
//!
//! Infer JSON Type Definition (JTD) schemas from example JSON values.
//!
//! Feed the engine a sequence of decoded samples (log lines, API responses)
//! and it progressively widens a provisional schema so it accepts every
//! sample seen so far while staying as narrow as possible.
//!
//! ## Features
//!
//! - **Monotonic widening**: shape conflicts widen toward the untyped
//!   schema, never crash
//! - **Number narrowing**: numeric positions resolve to the smallest
//!   adequate type, uint8 through float64
//! - **Timestamp detection**: strings that parse as RFC 3339 infer as
//!   timestamps until a sample disproves it
//! - **Path hints**: mark positions as enums, homogeneous maps, or
//!   discriminated unions to resolve ambiguous shapes
//! - **Required/optional tracking**: object keys demote to optional the
//!   first time a sample omits them
//!
//! ## Quick Start
//!
//! ```rust
//! use jtd_infer::{HintSet, Hints, Inferrer};
//! use serde_json::json;
//!
//! let hints = Hints::new().with_enums(HintSet::new().with_pointer("/status"));
//!
//! let inferrer = Inferrer::new(hints)
//!     .infer(&json!({"status": "active", "age": 42}))
//!     .infer(&json!({"status": "inactive"}));
//!
//! let schema = inferrer.into_schema();
//! assert_eq!(
//!     schema.to_json()["properties"]["status"]["enum"],
//!     json!(["active", "inactive"])
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Inferrer session                       │
//! │  infer(value) → session'        into_schema() → Schema     │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬──────────────┐
//! │    Hints     │        InferredSchema        │    Number    │
//! ├──────────────┼──────────────────────────────┼──────────────┤
//! │ enum paths   │ widening automaton over      │ min/max      │
//! │ values paths │ bool/number/string/timestamp │ envelope     │
//! │ discriminator│ enum/array/object/values/    │ integral flag│
//! │ wildcard `-` │ discriminator/nullable       │ narrowing    │
//! └──────────────┴──────────────────────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Path-scoped inference hints
pub mod hints;

/// Numeric type narrowing
pub mod number;

/// Schema inference from JSON values
pub mod schema;

/// Inference engine and sessions
pub mod engine;

/// Input row decoding (JSON, JSONL)
pub mod decode;

/// Hints file loader
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use engine::{infer_from_texts, Inferrer};
pub use hints::{parse_path, HintSet, Hints, WILDCARD};
pub use loader::{load_hints, load_hints_from_str};
pub use number::{InferredNumber, NumType};
pub use schema::{InferredSchema, Schema, Type};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
