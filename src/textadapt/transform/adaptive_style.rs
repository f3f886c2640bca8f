//! Font sizing that follows the user's preferred content size.

use super::representation::{keys, Representation};
use super::{AdaptiveTransformation, EmbeddedTransformation};
use crate::environment::{ContentSizeCategory, Environment};
use crate::value::{self, StyleAttributes};
use tracing::warn;

mod tag {
    pub const CONTROL: &str = "control";
    pub const BODY: &str = "body";
    pub const PREFERRED: &str = "preferred";
    pub const ABOVE: &str = "above";
    pub const BELOW: &str = "below";
}

// Indexed by `ContentSizeCategory` declaration order.
const CONTROL_SHIFT: [f64; 12] = [-3.0, -2.0, -1.0, 0.0, 2.0, 4.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0];
const BODY_SHIFT: [f64; 12] = [
    -3.0, -2.0, -1.0, 0.0, 2.0, 4.0, 6.0, 10.0, 15.0, 20.0, 26.0, 32.0,
];
const PREFERRED_BODY_SIZE: [f64; 12] = [
    14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0, 28.0, 33.0, 40.0, 47.0, 53.0,
];
const PREFERRED_BASE_SIZE: f64 = 17.0;

/// How a font responds to the content size category.
#[derive(Debug, Clone, PartialEq)]
pub enum AdaptiveStyle {
    /// Grows with the category, but stops at the largest non-accessibility size.
    Control,
    /// Grows with the category, including accessibility sizes.
    Body,
    /// Scales proportionally with the system body text size.
    Preferred,
    /// Switch to `family` when the point size is above `size`.
    Above { size: f64, family: String },
    /// Switch to `family` when the point size is below `size`.
    Below { size: f64, family: String },
}

impl AdaptiveStyle {
    /// The point size a font authored at `designated` gets in `category`.
    ///
    /// `Above` and `Below` never resize.
    pub fn adapted_size(&self, designated: f64, category: ContentSizeCategory) -> f64 {
        let idx = category as usize;
        match self {
            AdaptiveStyle::Control => designated + CONTROL_SHIFT[idx],
            AdaptiveStyle::Body => designated + BODY_SHIFT[idx],
            AdaptiveStyle::Preferred => designated * PREFERRED_BODY_SIZE[idx] / PREFERRED_BASE_SIZE,
            AdaptiveStyle::Above { .. } | AdaptiveStyle::Below { .. } => designated,
        }
    }
}

impl EmbeddedTransformation for AdaptiveStyle {
    fn representation(&self) -> Representation {
        match self {
            AdaptiveStyle::Control => Representation::tagged(tag::CONTROL),
            AdaptiveStyle::Body => Representation::tagged(tag::BODY),
            AdaptiveStyle::Preferred => Representation::tagged(tag::PREFERRED),
            AdaptiveStyle::Above { size, family } => Representation::tagged(tag::ABOVE)
                .with(keys::SIZE, *size)
                .with(keys::FAMILY, family.as_str()),
            AdaptiveStyle::Below { size, family } => Representation::tagged(tag::BELOW)
                .with(keys::SIZE, *size)
                .with(keys::FAMILY, family.as_str()),
        }
    }

    fn from_representation(representation: &Representation) -> Option<Self> {
        let shape = (
            representation.tag(),
            representation.float(keys::SIZE),
            representation.string(keys::FAMILY),
            representation.len(),
        );
        match shape {
            (Some(tag::CONTROL), None, None, 1) => Some(AdaptiveStyle::Control),
            (Some(tag::BODY), None, None, 1) => Some(AdaptiveStyle::Body),
            (Some(tag::PREFERRED), None, None, 1) => Some(AdaptiveStyle::Preferred),
            (Some(tag::ABOVE), Some(size), Some(family), 3) => Some(AdaptiveStyle::Above {
                size,
                family: family.to_string(),
            }),
            (Some(tag::BELOW), Some(size), Some(family), 3) => Some(AdaptiveStyle::Below {
                size,
                family: family.to_string(),
            }),
            _ => None,
        }
    }
}

impl AdaptiveTransformation for AdaptiveStyle {
    fn recompute(
        &self,
        attributes: &StyleAttributes,
        environment: &Environment,
    ) -> Option<StyleAttributes> {
        let Some(font) = attributes.font() else {
            warn!(style = ?self, "cannot adapt style: no font is defined");
            return None;
        };

        let adapted = match self {
            AdaptiveStyle::Control | AdaptiveStyle::Body | AdaptiveStyle::Preferred => {
                let size = self.adapted_size(
                    font.designated_size(),
                    environment.content_size_category,
                );
                font.resized(size)
            }
            AdaptiveStyle::Above { size, family } if font.point_size > *size => {
                font.with_family(family)
            }
            AdaptiveStyle::Below { size, family } if font.point_size < *size => {
                font.with_family(family)
            }
            AdaptiveStyle::Above { .. } | AdaptiveStyle::Below { .. } => return None,
        };

        Some(StyleAttributes::new().with(value::keys::FONT, adapted))
    }
}
