//! Numeric type narrowing
//!
//! Tracks the numeric envelope seen at one schema position and narrows it to
//! the smallest adequate JTD number type.
//!
//! # Overview
//!
//! - `NumType` - the JTD number types with their value ranges
//! - `InferredNumber` - min/max/integral accumulator for one position

mod inferred;
mod types;

pub use inferred::InferredNumber;
pub use types::NumType;

#[cfg(test)]
mod tests;
