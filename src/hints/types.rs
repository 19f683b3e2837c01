//! Hint set and hint configuration types

use crate::number::NumType;

/// The path segment that matches any key or array index.
pub const WILDCARD: &str = "-";

/// Parse a `/`-separated pointer into hint path segments.
///
/// `"/users/-/role"` becomes `["users", "-", "role"]`. The empty string and
/// `"/"` both denote the empty path, which is active at the root value.
pub fn parse_path(path: &str) -> Vec<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.split('/').map(str::to_string).collect()
}

/// A set of hint paths to match while walking a value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintSet {
    paths: Vec<Vec<String>>,
}

impl HintSet {
    /// Create a new empty hint set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path to the hint set
    #[must_use]
    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.paths.push(path);
        self
    }

    /// Add a path in `/`-separated pointer syntax
    #[must_use]
    pub fn with_pointer(self, pointer: &str) -> Self {
        self.with_path(parse_path(pointer))
    }

    /// Check if the hint set contains no paths
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Derive the hint set for a child position.
    ///
    /// Keeps every path whose first segment is the wildcard or equals `key`,
    /// with that segment stripped. Already-consumed paths are discarded.
    pub fn sub_hints(&self, key: &str) -> HintSet {
        let paths = self
            .paths
            .iter()
            .filter(|path| {
                path.first()
                    .is_some_and(|first| first == WILDCARD || first == key)
            })
            .map(|path| path[1..].to_vec())
            .collect();

        HintSet { paths }
    }

    /// Check if any path in the set has been fully consumed, meaning the
    /// current position is an exact match.
    pub fn is_active(&self) -> bool {
        self.paths.iter().any(Vec::is_empty)
    }

    /// Peek the field name one level below the current position.
    ///
    /// Returns the sole remaining segment iff exactly one path in the set
    /// has a single segment left.
    pub fn peek_active(&self) -> Option<&str> {
        let mut found = None;

        for path in &self.paths {
            if let [segment] = path.as_slice() {
                if found.is_some() {
                    return None;
                }
                found = Some(segment.as_str());
            }
        }

        found
    }
}

/// Hint configuration for one inference session.
///
/// Holds the default numeric type together with the three independent hint
/// sets. Built once per session and never mutated; recursion derives
/// per-frame sub-configurations via [`Hints::sub_hints`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hints {
    default_num_type: NumType,
    enums: HintSet,
    values: HintSet,
    discriminator: HintSet,
}

impl Hints {
    /// Create a new empty hint configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default number type used when no narrower type is needed
    #[must_use]
    pub fn with_default_num_type(mut self, num_type: NumType) -> Self {
        self.default_num_type = num_type;
        self
    }

    /// Set the paths whose string values should be inferred as enums
    #[must_use]
    pub fn with_enums(mut self, enums: HintSet) -> Self {
        self.enums = enums;
        self
    }

    /// Set the paths whose objects should be inferred as homogeneous maps
    #[must_use]
    pub fn with_values(mut self, values: HintSet) -> Self {
        self.values = values;
        self
    }

    /// Set the paths selecting tagged-union discriminant fields
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: HintSet) -> Self {
        self.discriminator = discriminator;
        self
    }

    /// The default number type for this session
    pub fn default_num_type(&self) -> NumType {
        self.default_num_type
    }

    /// Derive the hint configuration for a child position.
    ///
    /// Array elements use their stringified index as the key, so a hint that
    /// should apply to every element must use [`WILDCARD`] in that position.
    pub fn sub_hints(&self, key: &str) -> Hints {
        Hints {
            default_num_type: self.default_num_type,
            enums: self.enums.sub_hints(key),
            values: self.values.sub_hints(key),
            discriminator: self.discriminator.sub_hints(key),
        }
    }

    /// Check if the current position is marked as an enum
    pub fn is_enum_active(&self) -> bool {
        self.enums.is_active()
    }

    /// Check if the current position is marked as a homogeneous value-map
    pub fn is_values_active(&self) -> bool {
        self.values.is_active()
    }

    /// Peek the discriminant field name for the current position, if any
    pub fn peek_active_discriminator(&self) -> Option<&str> {
        self.discriminator.peek_active()
    }
}
