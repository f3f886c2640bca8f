//! Adaptive dispatch.
//!
//! Re-applies the adaptive transformations embedded in a mapping against a
//! new [`Environment`]. Transformations run in embedding order; each sees the
//! attributes as left by the ones before it, and its delta is merged on top
//! (last writer wins).

use crate::environment::Environment;
use crate::registry::TransformationRegistry;
use crate::value::StyleAttributes;
use tracing::debug;

/// Adapt `attributes` to `environment`.
///
/// Returns `None` when the mapping embeds no adaptive transformation, so the
/// caller can keep its stored attributes as they are. Otherwise returns the
/// original mapping with only the recomputed keys overwritten.
pub fn adapt(
    attributes: &StyleAttributes,
    environment: &Environment,
    registry: &TransformationRegistry,
) -> Option<StyleAttributes> {
    let transformations = registry.adaptive_transformations(attributes);
    if transformations.is_empty() {
        return None;
    }

    let mut adapted = attributes.clone();
    for transformation in &transformations {
        let Some(adaptive) = transformation.as_adaptive() else {
            continue;
        };
        match adaptive.recompute(&adapted, environment) {
            Some(delta) => adapted.merge(delta),
            None => debug!(%transformation, "no change for environment"),
        }
    }
    Some(adapted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed;
    use crate::environment::ContentSizeCategory;
    use crate::transform::{AdaptiveStyle, Tab, Tracking};
    use crate::value::{keys, AttrValue, Font};

    fn registry() -> &'static TransformationRegistry {
        TransformationRegistry::builtin()
    }

    #[test]
    fn nothing_embedded_means_nothing_to_do() {
        let attrs = StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 12.0));
        assert_eq!(adapt(&attrs, &Environment::default(), registry()), None);
    }

    #[test]
    fn storage_only_transformations_mean_nothing_to_do() {
        let attrs = StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 12.0));
        let attrs = embed(&Tab::Spacer(12.0), &attrs);
        let attrs = embed(&Tab::HeadIndent(4.0), &attrs);
        assert_eq!(adapt(&attrs, &Environment::default(), registry()), None);
    }

    #[test]
    fn opt_out_entries_mean_nothing_to_do() {
        let attrs = embed(&Tracking::Point(3.0), &StyleAttributes::new());
        assert_eq!(adapt(&attrs, &Environment::default(), registry()), None);
    }

    #[test]
    fn adobe_tracking_sets_kerning_from_font() {
        let attrs = StyleAttributes::new()
            .with(keys::FONT, Font::new("Avenir", 12.0))
            .with("color", "blue");
        let attrs = embed(&Tracking::Adobe(240.0), &attrs);

        let env = Environment::new(ContentSizeCategory::AccessibilityLarge);
        let adapted = adapt(&attrs, &env, registry()).unwrap();

        let expected_kern = Tracking::Adobe(240.0)
            .kerning(Some(&Font::new("Avenir", 12.0)))
            .unwrap();
        assert_eq!(adapted.kern(), Some(expected_kern));
        assert_eq!(expected_kern, 12.0 * (240.0 / 1000.0));

        let mut expected = attrs.clone();
        expected.insert(keys::KERN, expected_kern);
        assert_eq!(adapted, expected);
    }

    #[test]
    fn disjoint_deltas_are_both_applied() {
        let attrs = StyleAttributes::new()
            .with(keys::FONT, Font::new("Avenir", 12.0))
            .with("color", "blue")
            .with("paragraph", AttrValue::List(vec![AttrValue::Float(1.0)]));
        let attrs = embed(&AdaptiveStyle::Body, &attrs);
        let attrs = embed(&Tracking::Adobe(500.0), &attrs);

        let env = Environment::new(ContentSizeCategory::ExtraExtraLarge);
        let adapted = adapt(&attrs, &env, registry()).unwrap();

        // Body adds 4pt at extraExtraLarge; tracking sees the adapted font.
        assert_eq!(adapted.font().unwrap().point_size, 16.0);
        assert_eq!(adapted.kern(), Some(8.0));

        for key in ["color", "paragraph", keys::TRANSFORMATIONS] {
            assert_eq!(adapted.get(key), attrs.get(key), "{} changed", key);
        }
        assert_eq!(adapted.len(), attrs.len() + 1);
    }

    #[test]
    fn later_transformations_win_on_the_same_key() {
        let attrs = StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 30.0));
        let attrs = embed(
            &AdaptiveStyle::Above {
                size: 20.0,
                family: "Avenir-Heavy".into(),
            },
            &attrs,
        );
        let attrs = embed(
            &AdaptiveStyle::Above {
                size: 25.0,
                family: "Avenir-Black".into(),
            },
            &attrs,
        );

        let adapted = adapt(&attrs, &Environment::default(), registry()).unwrap();
        assert_eq!(adapted.font().unwrap().name, "Avenir-Black");
    }

    #[test]
    fn adaptive_without_changes_returns_the_original() {
        let attrs = StyleAttributes::new().with("color", "blue");
        let attrs = embed(&Tracking::Adobe(240.0), &attrs);

        let adapted = adapt(&attrs, &Environment::default(), registry()).unwrap();
        assert_eq!(adapted, attrs);
        assert_eq!(adapted.kern(), None);
    }

    #[test]
    fn adapting_twice_is_stable() {
        let attrs = StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 12.0));
        let attrs = embed(&AdaptiveStyle::Control, &attrs);
        let attrs = embed(&Tracking::Adobe(100.0), &attrs);

        let env = Environment::new(ContentSizeCategory::ExtraLarge);
        let once = adapt(&attrs, &env, registry()).unwrap();
        let twice = adapt(&once, &env, registry()).unwrap();
        assert_eq!(once, twice);

        let back = adapt(&twice, &Environment::default(), registry()).unwrap();
        assert_eq!(back.font().unwrap().point_size, 12.0);
    }

    #[test]
    fn custom_registry_limits_what_adapts() {
        let attrs = StyleAttributes::new().with(keys::FONT, Font::new("Avenir", 12.0));
        let attrs = embed(&Tracking::Adobe(240.0), &attrs);

        let empty = TransformationRegistry::new();
        assert_eq!(adapt(&attrs, &Environment::default(), &empty), None);
    }
}
