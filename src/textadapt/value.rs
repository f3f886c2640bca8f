//! Plist-compatible attribute values.
//!
//! Attribute mappings hold strings, booleans, floats, nested mappings and
//! ordered lists. JSON integers read as floats. Anything built from these can be archived by a generic
//! serializer (the CLI and tests use `serde_json`) without teaching the
//! archiver about transformations or fonts.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Well-known attribute keys.
pub mod keys {
    /// The font applied to a run, stored as a [`Font`](super::Font) mapping.
    pub const FONT: &str = "font";

    /// Kerning in points.
    pub const KERN: &str = "kern";

    /// Reserved key holding the embedded representations list.
    ///
    /// Namespaced so it never collides with a standard rich-text key.
    pub const TRANSFORMATIONS: &str = "textadapt.transformations";
}

/// A plist-compatible value.
///
/// Floats compare by exact value; no tolerance is applied anywhere. A NaN
/// equals a NaN with the same bit pattern, so equality stays reflexive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Bool(bool),
    Float(f64),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::String(a), AttrValue::String(b)) => a == b,
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a == b,
            (AttrValue::Float(a), AttrValue::Float(b)) => a == b || a.to_bits() == b.to_bits(),
            (AttrValue::List(a), AttrValue::List(b)) => a == b,
            (AttrValue::Map(a), AttrValue::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            AttrValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        AttrValue::List(value)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(value: BTreeMap<String, AttrValue>) -> Self {
        AttrValue::Map(value)
    }
}

/// An attribute mapping, as attached to a run of rich text.
///
/// This is a value type: every operation in this crate that "changes"
/// attributes takes `&StyleAttributes` and hands back a new mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleAttributes(BTreeMap<String, AttrValue>);

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// Overwrite this mapping's entries with every entry of `other`.
    ///
    /// Keys absent from `other` are left alone; there is no removal.
    pub fn merge(&mut self, other: StyleAttributes) {
        self.0.extend(other.0);
    }

    /// The applied font, if present and well-formed.
    pub fn font(&self) -> Option<Font> {
        self.get(keys::FONT).and_then(Font::from_value)
    }

    pub fn kern(&self) -> Option<f64> {
        self.get(keys::KERN).and_then(AttrValue::as_float)
    }
}

impl FromIterator<(String, AttrValue)> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StyleAttributes {
    type Item = (String, AttrValue);
    type IntoIter = btree_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleAttributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A font description as stored under [`keys::FONT`].
///
/// `designated_size` is the size the style was authored with. Adaptive
/// sizing always starts from it, so adapting twice gives the same result as
/// adapting once.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub point_size: f64,
    pub designated_size: Option<f64>,
}

impl Font {
    const NAME: &'static str = "name";
    const POINT_SIZE: &'static str = "pointSize";
    const DESIGNATED_SIZE: &'static str = "designatedSize";

    pub fn new(name: impl Into<String>, point_size: f64) -> Self {
        Self {
            name: name.into(),
            point_size,
            designated_size: None,
        }
    }

    /// The authored size, falling back to the current point size.
    pub fn designated_size(&self) -> f64 {
        self.designated_size.unwrap_or(self.point_size)
    }

    /// Same size, different family.
    pub fn with_family(&self, family: &str) -> Self {
        Self {
            name: family.to_string(),
            ..self.clone()
        }
    }

    /// Resize while remembering the authored size.
    pub fn resized(&self, point_size: f64) -> Self {
        Self {
            name: self.name.clone(),
            point_size,
            designated_size: Some(self.designated_size()),
        }
    }

    pub fn from_value(value: &AttrValue) -> Option<Self> {
        let map = value.as_map()?;
        let name = map.get(Self::NAME)?.as_str()?;
        let point_size = map.get(Self::POINT_SIZE)?.as_float()?;
        let designated_size = match map.get(Self::DESIGNATED_SIZE) {
            Some(v) => Some(v.as_float()?),
            None => None,
        };
        Some(Self {
            name: name.to_string(),
            point_size,
            designated_size,
        })
    }

    pub fn to_value(&self) -> AttrValue {
        let mut map = BTreeMap::new();
        map.insert(Self::NAME.to_string(), AttrValue::from(self.name.as_str()));
        map.insert(Self::POINT_SIZE.to_string(), AttrValue::Float(self.point_size));
        if let Some(size) = self.designated_size {
            map.insert(Self::DESIGNATED_SIZE.to_string(), AttrValue::Float(size));
        }
        AttrValue::Map(map)
    }
}

impl From<Font> for AttrValue {
    fn from(font: Font) -> Self {
        font.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_only_their_variant() {
        assert_eq!(AttrValue::from("a").as_str(), Some("a"));
        assert_eq!(AttrValue::from(1.5).as_float(), Some(1.5));
        assert_eq!(AttrValue::from("a").as_float(), None);
        assert_eq!(AttrValue::from(1.5).as_str(), None);
        assert!(AttrValue::List(vec![]).as_list().is_some());
        assert!(AttrValue::List(vec![]).as_map().is_none());
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from(true).as_float(), None);
    }

    #[test]
    fn nan_equals_itself() {
        assert_eq!(AttrValue::from(f64::NAN), AttrValue::from(f64::NAN));
        assert_eq!(AttrValue::from(0.0), AttrValue::from(-0.0));
        assert_ne!(AttrValue::from(1.0), AttrValue::from(true));
    }

    #[test]
    fn json_booleans_are_kept() {
        let attrs: StyleAttributes =
            serde_json::from_str(r#"{"underline": true, "kern": 1}"#).unwrap();
        assert_eq!(attrs.get("underline"), Some(&AttrValue::Bool(true)));
        assert_eq!(attrs.kern(), Some(1.0));
    }

    #[test]
    fn merge_overwrites_and_keeps_other_keys() {
        let mut attrs = StyleAttributes::new().with("a", 1.0).with("b", "keep");
        attrs.merge(StyleAttributes::new().with("a", 2.0).with("c", 3.0));

        assert_eq!(attrs.get("a"), Some(&AttrValue::Float(2.0)));
        assert_eq!(attrs.get("b"), Some(&AttrValue::from("keep")));
        assert_eq!(attrs.get("c"), Some(&AttrValue::Float(3.0)));
    }

    #[test]
    fn font_value_round_trips() {
        let font = Font::new("Avenir", 12.0).resized(14.0);
        let attrs = StyleAttributes::new().with(keys::FONT, font.clone());
        assert_eq!(attrs.font(), Some(font));
    }

    #[test]
    fn malformed_font_is_ignored() {
        let attrs = StyleAttributes::new().with(keys::FONT, "Avenir");
        assert_eq!(attrs.font(), None);

        let mut map = BTreeMap::new();
        map.insert("name".to_string(), AttrValue::from("Avenir"));
        let attrs = StyleAttributes::new().with(keys::FONT, map);
        assert_eq!(attrs.font(), None);
    }

    #[test]
    fn resized_font_remembers_designated_size() {
        let font = Font::new("Avenir", 12.0);
        assert_eq!(font.designated_size(), 12.0);

        let bigger = font.resized(20.0).resized(9.0);
        assert_eq!(bigger.point_size, 9.0);
        assert_eq!(bigger.designated_size(), 12.0);
    }

    #[test]
    fn json_numbers_deserialize_as_floats() {
        let attrs: StyleAttributes =
            serde_json::from_str(r#"{"kern": 2, "font": {"name": "Avenir", "pointSize": 12}}"#)
                .unwrap();
        assert_eq!(attrs.kern(), Some(2.0));
        assert_eq!(attrs.font(), Some(Font::new("Avenir", 12.0)));
    }
}
