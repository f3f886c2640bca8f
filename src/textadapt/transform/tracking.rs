//! Letter spacing, either in points or in Adobe tracking units.

use super::representation::{keys, Representation};
use super::{AdaptiveTransformation, EmbeddedTransformation};
use crate::environment::Environment;
use crate::value::{self, Font, StyleAttributes};
use tracing::warn;

const ADOBE_TRACKING: &str = "adobe-tracking";

/// Adobe tracking is expressed in thousandths of an em.
const ADOBE_TRACKING_DIVISOR: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tracking {
    /// Fixed kerning in points. Independent of the font, so never embedded.
    Point(f64),
    /// Tracking in Adobe units, which depends on the font's point size.
    Adobe(f64),
}

impl Tracking {
    /// The kerning in points for `font`.
    ///
    /// Adobe tracking needs a font to resolve against and yields `None`
    /// without one.
    pub fn kerning(&self, font: Option<&Font>) -> Option<f64> {
        match self {
            Tracking::Point(kern) => Some(*kern),
            Tracking::Adobe(tracking) => {
                font.map(|font| font.point_size * (tracking / ADOBE_TRACKING_DIVISOR))
            }
        }
    }
}

impl EmbeddedTransformation for Tracking {
    fn representation(&self) -> Representation {
        match self {
            Tracking::Adobe(size) => Representation::tagged(ADOBE_TRACKING).with(keys::SIZE, *size),
            // Point tracking does not depend on the font size.
            Tracking::Point(_) => Representation::empty(),
        }
    }

    fn from_representation(representation: &Representation) -> Option<Self> {
        match (
            representation.tag(),
            representation.float(keys::SIZE),
            representation.len(),
        ) {
            (Some(ADOBE_TRACKING), Some(size), 2) => Some(Tracking::Adobe(size)),
            _ => None,
        }
    }
}

impl AdaptiveTransformation for Tracking {
    fn recompute(
        &self,
        attributes: &StyleAttributes,
        _environment: &Environment,
    ) -> Option<StyleAttributes> {
        let Tracking::Adobe(_) = self else {
            return None;
        };

        let font = attributes.font();
        let mut delta = StyleAttributes::new();
        match self.kerning(font.as_ref()) {
            Some(kern) => {
                delta.insert(value::keys::KERN, kern);
            }
            None => warn!("cannot apply tracking: no font is defined"),
        }
        Some(delta)
    }
}
