//! The plist-safe encoded form of a transformation.

use crate::value::AttrValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys shared by every transformation family.
pub mod keys {
    /// Discriminator naming the case; present in every non-empty representation.
    pub const TYPE: &str = "type";

    /// Float payload, reused by several shapes (point size, tracking, tab width).
    pub const SIZE: &str = "size";

    /// Font family name.
    pub const FAMILY: &str = "family";
}

/// A flat mapping describing exactly one transformation.
///
/// Decoders match on the *shape* of this mapping: which keys are present and
/// what type their values have. Equality is structural and ignores key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Representation(BTreeMap<String, AttrValue>);

impl Representation {
    /// The opt-out representation: no state worth persisting.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A representation carrying only the `type` discriminator.
    pub fn tagged(tag: &str) -> Self {
        Self::empty().with(keys::TYPE, tag)
    }

    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.0.get(keys::TYPE).and_then(AttrValue::as_str)
    }

    /// The float stored under `key`; `None` if absent or not a float.
    pub fn float(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(AttrValue::as_float)
    }

    /// The string stored under `key`; `None` if absent or not a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AttrValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys, including `type`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a representation back out of an attribute value.
    pub fn from_value(value: &AttrValue) -> Option<Self> {
        value.as_map().map(|map| Self(map.clone()))
    }

    pub fn to_value(&self) -> AttrValue {
        AttrValue::Map(self.0.clone())
    }
}

impl From<Representation> for AttrValue {
    fn from(representation: Representation) -> Self {
        AttrValue::Map(representation.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_reject_wrong_types() {
        let repr = Representation::tagged("above")
            .with(keys::SIZE, "12")
            .with(keys::FAMILY, 3.0);

        assert_eq!(repr.tag(), Some("above"));
        assert_eq!(repr.float(keys::SIZE), None);
        assert_eq!(repr.string(keys::FAMILY), None);
        assert!(repr.contains_key(keys::SIZE));
        assert_eq!(repr.len(), 3);
    }

    #[test]
    fn non_string_tag_is_no_tag() {
        let repr = Representation::empty().with(keys::TYPE, 1.0);
        assert_eq!(repr.tag(), None);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Representation::empty()
            .with(keys::SIZE, 12.0)
            .with(keys::TYPE, "spacer");
        let b = Representation::tagged("spacer").with(keys::SIZE, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn only_maps_convert_from_values() {
        let repr = Representation::tagged("body");
        assert_eq!(Representation::from_value(&repr.to_value()), Some(repr));
        assert_eq!(Representation::from_value(&AttrValue::from("body")), None);
    }
}
