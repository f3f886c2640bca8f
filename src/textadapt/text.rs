//! Styled text: a string with attribute runs.
//!
//! This is the shape attributed strings take once archived. Adapting a whole
//! document adapts each run independently.

use crate::adapt::adapt;
use crate::environment::Environment;
use crate::registry::TransformationRegistry;
use crate::value::StyleAttributes;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Attributes applied to a byte range of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub attributes: StyleAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    pub text: String,
    #[serde(default)]
    pub runs: Vec<StyleRun>,
}

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Append `text` styled with `attributes`.
    pub fn push(mut self, text: &str, attributes: StyleAttributes) -> Self {
        let start = self.text.len();
        self.text.push_str(text);
        self.runs.push(StyleRun {
            range: start..self.text.len(),
            attributes,
        });
        self
    }

    /// The text covered by a run, if its range is valid for this string.
    pub fn run_text(&self, run: &StyleRun) -> Option<&str> {
        self.text.get(run.range.clone())
    }

    /// Adapt every run to `environment`.
    ///
    /// Returns `None` when no run embeds an adaptive transformation.
    pub fn adapt(
        &self,
        environment: &Environment,
        registry: &TransformationRegistry,
    ) -> Option<StyledText> {
        let mut changed = false;
        let runs: Vec<StyleRun> = self
            .runs
            .iter()
            .map(|run| match adapt(&run.attributes, environment, registry) {
                Some(attributes) => {
                    changed = true;
                    StyleRun {
                        range: run.range.clone(),
                        attributes,
                    }
                }
                None => run.clone(),
            })
            .collect();

        changed.then(|| StyledText {
            text: self.text.clone(),
            runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed;
    use crate::environment::ContentSizeCategory;
    use crate::transform::{AdaptiveStyle, Tab};
    use crate::value::{keys, Font};

    fn body_font() -> StyleAttributes {
        StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 17.0))
    }

    #[test]
    fn push_tracks_byte_ranges() {
        let text = StyledText::new("")
            .push("Héllo", StyleAttributes::new())
            .push(" world", body_font());

        assert_eq!(text.text, "Héllo world");
        assert_eq!(text.runs[0].range, 0..6);
        assert_eq!(text.run_text(&text.runs[1]), Some(" world"));
    }

    #[test]
    fn adapt_updates_only_adaptive_runs() {
        let plain = body_font().with("color", "gray");
        let adaptive = embed(&AdaptiveStyle::Body, &body_font());
        let text = StyledText::new("")
            .push("Title", adaptive)
            .push(" body", plain.clone());

        let env = Environment::new(ContentSizeCategory::AccessibilityMedium);
        let adapted = text.adapt(&env, TransformationRegistry::builtin()).unwrap();

        assert_eq!(adapted.text, text.text);
        assert_eq!(adapted.runs[0].attributes.font().unwrap().point_size, 27.0);
        assert_eq!(adapted.runs[1].attributes, plain);
    }

    #[test]
    fn adapt_without_adaptive_runs_is_none() {
        let tabs = embed(&Tab::Spacer(8.0), &body_font());
        let text = StyledText::new("").push("a\tb", tabs);
        assert_eq!(
            text.adapt(&Environment::default(), TransformationRegistry::builtin()),
            None
        );
    }

    #[test]
    fn survives_json_archiving() {
        let attrs = embed(&AdaptiveStyle::Preferred, &body_font());
        let text = StyledText::new("").push("Hi", attrs);

        let json = serde_json::to_string(&text).unwrap();
        let restored: StyledText = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, text);

        let env = Environment::new(ContentSizeCategory::ExtraLarge);
        let adapted = restored.adapt(&env, TransformationRegistry::builtin()).unwrap();
        assert_eq!(adapted.runs[0].attributes.font().unwrap().point_size, 19.0);
    }
}
