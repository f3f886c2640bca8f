//! Tab stops. Persisted so tab layout survives archiving, but not adaptive.

use super::representation::{keys, Representation};
use super::EmbeddedTransformation;

const SPACER: &str = "spacer";
const HEAD_INDENT: &str = "headIndent";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    /// A tab stop `width` points past the end of the preceding text.
    Spacer(f64),
    /// A tab stop that also sets the paragraph's head indent.
    HeadIndent(f64),
}

impl Tab {
    pub fn width(&self) -> f64 {
        match self {
            Tab::Spacer(width) | Tab::HeadIndent(width) => *width,
        }
    }
}

impl EmbeddedTransformation for Tab {
    fn representation(&self) -> Representation {
        let tag = match self {
            Tab::Spacer(_) => SPACER,
            Tab::HeadIndent(_) => HEAD_INDENT,
        };
        Representation::tagged(tag).with(keys::SIZE, self.width())
    }

    fn from_representation(representation: &Representation) -> Option<Self> {
        match (
            representation.tag(),
            representation.float(keys::SIZE),
            representation.len(),
        ) {
            (Some(SPACER), Some(width), 2) => Some(Tab::Spacer(width)),
            (Some(HEAD_INDENT), Some(width), 2) => Some(Tab::HeadIndent(width)),
            _ => None,
        }
    }
}
