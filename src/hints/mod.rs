//! Path-scoped inference hints
//!
//! Hints steer the inference decisions that cannot be made from samples
//! alone: whether a string position is an enum, whether an object is a
//! homogeneous value-map instead of a struct, and which field discriminates
//! a tagged union.
//!
//! # Overview
//!
//! A hint is a path: a sequence of object keys or stringified array indices,
//! where [`WILDCARD`] matches any single segment. Walking into a child value
//! derives a sub-configuration by stripping the matched leading segment from
//! every path; a path that has been fully consumed marks the current
//! position as active.

mod types;

pub use types::{parse_path, HintSet, Hints, WILDCARD};
