//! Inference engine
//!
//! Folds an ordered sequence of sample values through the widening
//! automaton under a fixed hint configuration, then materializes the
//! terminal state into the public JTD schema.

use crate::hints::Hints;
use crate::schema::{InferredSchema, Schema};
use crate::types::JsonValue;
use tracing::warn;

#[cfg(test)]
mod tests;

/// One inference session: the in-progress schema plus the hints used while
/// inferring.
///
/// A session owns its state tree exclusively; folding consumes the session
/// and returns the next one, so a snapshot is just a clone.
#[derive(Debug, Clone, Default)]
pub struct Inferrer {
    inference: InferredSchema,
    hints: Hints,
}

impl Inferrer {
    /// Create a new session with the given hint configuration
    pub fn new(hints: Hints) -> Self {
        Self {
            inference: InferredSchema::new(),
            hints,
        }
    }

    /// Fold one sample value into the session
    #[must_use]
    pub fn infer(self, value: &JsonValue) -> Inferrer {
        Inferrer {
            inference: self.inference.infer(value, &self.hints),
            hints: self.hints,
        }
    }

    /// Materialize the session into the final schema
    pub fn into_schema(self) -> Schema {
        let default_num_type = self.hints.default_num_type();
        self.inference.into_schema(default_num_type)
    }
}

/// Decode rows of raw JSON text and fold each into a fresh session.
///
/// Folding stops at the first row that fails to decode; the session state
/// accumulated from the prior rows is returned rather than an error.
pub fn infer_from_texts<I>(rows: I, hints: Hints) -> Inferrer
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut inferrer = Inferrer::new(hints);

    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_str::<JsonValue>(row.as_ref()) {
            Ok(value) => inferrer = inferrer.infer(&value),
            Err(e) => {
                warn!(row = index + 1, error = %e, "stopping at undecodable row");
                break;
            }
        }
    }

    inferrer
}
