//! The embedded representations list.
//!
//! Transformations ride along inside an attribute mapping under the reserved
//! [`keys::TRANSFORMATIONS`] key, as an ordered list of representation
//! mappings. The list keeps insertion order and never holds two equal
//! representations.

use crate::transform::{EmbeddedTransformation, Representation};
use crate::value::{keys, AttrValue, StyleAttributes};
use tracing::debug;

/// Embed `transformation` into a copy of `attributes`.
///
/// The representation is appended unless an equal one is already present.
/// Never fails. Embedding an opt-out transformation (empty representation)
/// stores an entry that no decoder accepts.
pub fn embed<T: EmbeddedTransformation>(
    transformation: &T,
    attributes: &StyleAttributes,
) -> StyleAttributes {
    embed_representation(transformation.representation(), attributes)
}

/// Embed an already-encoded representation into a copy of `attributes`.
pub fn embed_representation(
    representation: Representation,
    attributes: &StyleAttributes,
) -> StyleAttributes {
    let mut attributes = attributes.clone();
    let mut list: Vec<AttrValue> = attributes
        .get(keys::TRANSFORMATIONS)
        .and_then(AttrValue::as_list)
        .map(<[AttrValue]>::to_vec)
        .unwrap_or_default();

    let value = AttrValue::from(representation);
    if list.contains(&value) {
        debug!(representation = ?value, "transformation already embedded");
    } else {
        list.push(value);
    }

    attributes.insert(keys::TRANSFORMATIONS, list);
    attributes
}

/// The embedded representations, in embedding order.
///
/// A missing or malformed list reads as empty; entries that are not mappings
/// are skipped.
pub fn embedded_representations(attributes: &StyleAttributes) -> Vec<Representation> {
    attributes
        .get(keys::TRANSFORMATIONS)
        .and_then(AttrValue::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(Representation::from_value)
        .collect()
}
