//! Hints file document types

use crate::hints::{parse_path, HintSet, Hints};
use crate::number::NumType;
use serde::{Deserialize, Serialize};

/// The on-disk shape of a hint configuration.
///
/// Paths use `/`-separated pointer syntax with `-` as the wildcard segment;
/// `"/"` (or the empty string) marks the root value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HintsFile {
    /// Default number type when no narrower type is needed
    pub default_number_type: Option<NumType>,

    /// Paths whose string values form enums
    pub enums: Vec<String>,

    /// Paths whose objects are homogeneous value-maps
    pub values: Vec<String>,

    /// Paths selecting tagged-union discriminant fields
    pub discriminator: Vec<String>,
}

impl HintsFile {
    /// Convert the document into a hint configuration
    pub fn into_hints(self) -> Hints {
        let mut hints = Hints::new()
            .with_enums(to_hint_set(&self.enums))
            .with_values(to_hint_set(&self.values))
            .with_discriminator(to_hint_set(&self.discriminator));

        if let Some(num_type) = self.default_number_type {
            hints = hints.with_default_num_type(num_type);
        }

        hints
    }
}

fn to_hint_set(pointers: &[String]) -> HintSet {
    pointers.iter().fold(HintSet::new(), |set, pointer| {
        set.with_path(parse_path(pointer))
    })
}
