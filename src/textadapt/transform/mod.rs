//! # Transformations
//!
//! A transformation is a styling rule that has to survive inside a plain
//! attribute mapping and be re-applied later. Each family is a closed enum:
//!
//! | Family | Cases | Embedded | Adaptive |
//! |--------|-------|----------|----------|
//! | [`AdaptiveStyle`] | `Control`, `Body`, `Preferred`, `Above`, `Below` | yes | yes |
//! | [`Tracking`] | `Adobe`, `Point` | `Adobe` only | yes |
//! | [`Tab`] | `Spacer`, `HeadIndent` | yes | no |
//!
//! The two capabilities are separate traits so a family can implement either,
//! both, or neither:
//!
//! - [`EmbeddedTransformation`]: encode to / decode from a [`Representation`].
//! - [`AdaptiveTransformation`]: recompute attributes for a new [`Environment`].
//!
//! [`Transformation`] is the union of every family. It answers "is this
//! adaptive?" with a plain `match` in [`Transformation::as_adaptive`], so no
//! runtime type inspection is needed.
//!
//! ## Text Syntax
//!
//! Transformations also have a compact text form, used by the CLI:
//!
//! ```text
//! style:control | style:body | style:preferred
//! style:above:<size>:<family> | style:below:<size>:<family>
//! tracking:adobe:<size> | tracking:point:<kern>
//! tab:spacer:<width> | tab:head-indent:<width>
//! ```

mod adaptive_style;
pub mod representation;
mod tab;
mod tracking;

pub use adaptive_style::AdaptiveStyle;
pub use representation::Representation;
pub use tab::Tab;
pub use tracking::Tracking;

use crate::environment::Environment;
use crate::error::TextAdaptError;
use crate::registry::TransformationRegistry;
use crate::value::StyleAttributes;
use std::fmt;
use std::str::FromStr;

/// A transformation that can be persisted as a plist-safe [`Representation`].
pub trait EmbeddedTransformation: Sized {
    /// Encode the state needed to re-create this transformation.
    ///
    /// Must be deterministic. An empty representation opts out of
    /// persistence.
    fn representation(&self) -> Representation;

    /// Decode a representation produced by [`representation`](Self::representation).
    ///
    /// Returns `None` for any shape this type does not recognize.
    fn from_representation(representation: &Representation) -> Option<Self>;
}

/// A transformation whose effect depends on the display environment.
pub trait AdaptiveTransformation {
    /// Compute the attribute keys that change for `environment`.
    ///
    /// Returns only the touched keys. `None` means "no opinion", which is
    /// different from an empty delta in that it never removes anything either.
    fn recompute(
        &self,
        attributes: &StyleAttributes,
        environment: &Environment,
    ) -> Option<StyleAttributes>;
}

/// Any known transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    AdaptiveStyle(AdaptiveStyle),
    Tracking(Tracking),
    Tab(Tab),
}

impl Transformation {
    /// The adaptive capability, if this family has one.
    pub fn as_adaptive(&self) -> Option<&dyn AdaptiveTransformation> {
        match self {
            Transformation::AdaptiveStyle(style) => Some(style),
            Transformation::Tracking(tracking) => Some(tracking),
            Transformation::Tab(_) => None,
        }
    }

    pub fn is_adaptive(&self) -> bool {
        self.as_adaptive().is_some()
    }
}

impl EmbeddedTransformation for Transformation {
    fn representation(&self) -> Representation {
        match self {
            Transformation::AdaptiveStyle(style) => style.representation(),
            Transformation::Tracking(tracking) => tracking.representation(),
            Transformation::Tab(tab) => tab.representation(),
        }
    }

    /// Decodes against the builtin registry.
    fn from_representation(representation: &Representation) -> Option<Self> {
        TransformationRegistry::builtin().decode_any(representation)
    }
}

impl From<AdaptiveStyle> for Transformation {
    fn from(style: AdaptiveStyle) -> Self {
        Transformation::AdaptiveStyle(style)
    }
}

impl From<Tracking> for Transformation {
    fn from(tracking: Tracking) -> Self {
        Transformation::Tracking(tracking)
    }
}

impl From<Tab> for Transformation {
    fn from(tab: Tab) -> Self {
        Transformation::Tab(tab)
    }
}

impl TryFrom<Transformation> for AdaptiveStyle {
    type Error = Transformation;

    fn try_from(transformation: Transformation) -> Result<Self, Self::Error> {
        match transformation {
            Transformation::AdaptiveStyle(style) => Ok(style),
            other => Err(other),
        }
    }
}

impl TryFrom<Transformation> for Tracking {
    type Error = Transformation;

    fn try_from(transformation: Transformation) -> Result<Self, Self::Error> {
        match transformation {
            Transformation::Tracking(tracking) => Ok(tracking),
            other => Err(other),
        }
    }
}

impl TryFrom<Transformation> for Tab {
    type Error = Transformation;

    fn try_from(transformation: Transformation) -> Result<Self, Self::Error> {
        match transformation {
            Transformation::Tab(tab) => Ok(tab),
            other => Err(other),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::AdaptiveStyle(style) => match style {
                AdaptiveStyle::Control => write!(f, "style:control"),
                AdaptiveStyle::Body => write!(f, "style:body"),
                AdaptiveStyle::Preferred => write!(f, "style:preferred"),
                AdaptiveStyle::Above { size, family } => write!(f, "style:above:{size}:{family}"),
                AdaptiveStyle::Below { size, family } => write!(f, "style:below:{size}:{family}"),
            },
            Transformation::Tracking(Tracking::Adobe(size)) => write!(f, "tracking:adobe:{size}"),
            Transformation::Tracking(Tracking::Point(kern)) => write!(f, "tracking:point:{kern}"),
            Transformation::Tab(Tab::Spacer(width)) => write!(f, "tab:spacer:{width}"),
            Transformation::Tab(Tab::HeadIndent(width)) => write!(f, "tab:head-indent:{width}"),
        }
    }
}

impl FromStr for Transformation {
    type Err = TextAdaptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| TextAdaptError::InvalidTransformation {
            input: s.to_string(),
            reason,
        };
        let number = |raw: &str| match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(invalid(format!("'{}' is not a finite number", raw))),
            Err(_) => Err(invalid(format!("'{}' is not a number", raw))),
        };
        let family = |raw: &str| {
            if raw.is_empty() {
                Err(invalid("family name is empty".to_string()))
            } else if raw.trim() != raw {
                Err(invalid(format!(
                    "family name '{}' has surrounding whitespace",
                    raw
                )))
            } else {
                Ok(raw.to_string())
            }
        };

        // Kind and case names are trimmed; a family name is taken verbatim.
        let parts: Vec<&str> = s
            .splitn(4, ':')
            .enumerate()
            .map(|(i, part)| if i < 2 { part.trim() } else { part })
            .collect();
        let transformation: Transformation = match parts.as_slice() {
            ["style", "control"] => AdaptiveStyle::Control.into(),
            ["style", "body"] => AdaptiveStyle::Body.into(),
            ["style", "preferred"] => AdaptiveStyle::Preferred.into(),
            ["style", "above", size, name] => AdaptiveStyle::Above {
                size: number(*size)?,
                family: family(*name)?,
            }
            .into(),
            ["style", "below", size, name] => AdaptiveStyle::Below {
                size: number(*size)?,
                family: family(*name)?,
            }
            .into(),
            ["tracking", "adobe", size] => Tracking::Adobe(number(*size)?).into(),
            ["tracking", "point", kern] => Tracking::Point(number(*kern)?).into(),
            ["tab", "spacer", width] => Tab::Spacer(number(*width)?).into(),
            ["tab", "head-indent", width] => Tab::HeadIndent(number(*width)?).into(),
            [kind, ..] if !["style", "tracking", "tab"].contains(kind) => {
                return Err(invalid(format!(
                    "unknown kind '{}' (expected style, tracking or tab)",
                    kind
                )))
            }
            _ => return Err(invalid("unrecognized form".to_string())),
        };
        Ok(transformation)
    }
}
