//! Numeric envelope accumulator

use super::types::{NumType, NARROWING_ORDER};
use crate::schema::Type;

/// The state for a schema position that is a number. Holds the seen minimum
/// and maximum value together with whether every seen number was integral.
///
/// The starting envelope is `[0, 0]` rather than infinity sentinels: zero is
/// folded into the range alongside the observed samples, so an all-positive
/// column still narrows from a lower bound of zero. This matches the
/// reference behavior and is relied upon by boundary tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferredNumber {
    min: f64,
    max: f64,
    is_integer: bool,
}

impl Default for InferredNumber {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            is_integer: true,
        }
    }
}

impl InferredNumber {
    /// Create a new accumulator with an empty envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observed value into the envelope.
    ///
    /// The envelope only ever grows and the integral flag only ever clears.
    #[must_use]
    pub fn observe(&self, n: f64) -> InferredNumber {
        InferredNumber {
            min: self.min.min(n),
            max: self.max.max(n),
            is_integer: self.is_integer && n.trunc() == n,
        }
    }

    /// The smallest seen value (including the zero seed)
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The largest seen value (including the zero seed)
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether every observed value was integral
    pub fn is_integer(&self) -> bool {
        self.is_integer
    }

    /// Resolve the envelope to a schema type.
    ///
    /// The default type wins whenever it can represent the envelope.
    /// Otherwise the integer types are scanned in narrowing order and the
    /// first fit is used; an envelope no integer type can hold falls back to
    /// `float64`.
    pub fn into_type(&self, default: NumType) -> Type {
        if self.contained_by(default) {
            return default.into_type();
        }

        for candidate in NARROWING_ORDER {
            if self.contained_by(candidate) {
                return candidate.into_type();
            }
        }

        Type::Float64
    }

    /// Check if the envelope fits within the range of `num_type`.
    ///
    /// A non-integral envelope fits only floating types.
    pub fn contained_by(&self, num_type: NumType) -> bool {
        if !self.is_integer && !num_type.is_float() {
            return false;
        }

        let (min, max) = num_type.as_range();
        min <= self.min && max >= self.max
    }
}
