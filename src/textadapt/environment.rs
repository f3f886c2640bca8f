//! The display environment that adaptive transformations are recomputed for.

use crate::error::TextAdaptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's preferred text size, smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    pub const ALL: [ContentSizeCategory; 12] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
        ContentSizeCategory::AccessibilityMedium,
        ContentSizeCategory::AccessibilityLarge,
        ContentSizeCategory::AccessibilityExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraLarge,
        ContentSizeCategory::AccessibilityExtraExtraExtraLarge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContentSizeCategory::ExtraSmall => "extraSmall",
            ContentSizeCategory::Small => "small",
            ContentSizeCategory::Medium => "medium",
            ContentSizeCategory::Large => "large",
            ContentSizeCategory::ExtraLarge => "extraLarge",
            ContentSizeCategory::ExtraExtraLarge => "extraExtraLarge",
            ContentSizeCategory::ExtraExtraExtraLarge => "extraExtraExtraLarge",
            ContentSizeCategory::AccessibilityMedium => "accessibilityMedium",
            ContentSizeCategory::AccessibilityLarge => "accessibilityLarge",
            ContentSizeCategory::AccessibilityExtraLarge => "accessibilityExtraLarge",
            ContentSizeCategory::AccessibilityExtraExtraLarge => "accessibilityExtraExtraLarge",
            ContentSizeCategory::AccessibilityExtraExtraExtraLarge => {
                "accessibilityExtraExtraExtraLarge"
            }
        }
    }

    pub fn is_accessibility(self) -> bool {
        self >= ContentSizeCategory::AccessibilityMedium
    }
}

impl fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentSizeCategory {
    type Err = TextAdaptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentSizeCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TextAdaptError::InvalidCategory(s.to_string()))
    }
}

/// Immutable description of the environment being adapted to.
///
/// Passed into adaptation by value or reference and never stored in the
/// attributes themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub content_size_category: ContentSizeCategory,
}

impl Environment {
    pub fn new(content_size_category: ContentSizeCategory) -> Self {
        Self {
            content_size_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_large() {
        assert_eq!(Environment::default().content_size_category, ContentSizeCategory::Large);
    }

    #[test]
    fn names_parse_back() {
        for category in ContentSizeCategory::ALL {
            assert_eq!(category.name().parse::<ContentSizeCategory>().unwrap(), category);
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(
            "ExtraLarge".parse::<ContentSizeCategory>().unwrap(),
            ContentSizeCategory::ExtraLarge
        );
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert!(matches!(
            "huge".parse::<ContentSizeCategory>(),
            Err(TextAdaptError::InvalidCategory(_))
        ));
    }

    #[test]
    fn accessibility_categories_sort_last() {
        assert!(!ContentSizeCategory::ExtraExtraExtraLarge.is_accessibility());
        assert!(ContentSizeCategory::AccessibilityMedium.is_accessibility());
        assert!(ContentSizeCategory::Small < ContentSizeCategory::Large);
    }

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&ContentSizeCategory::AccessibilityLarge).unwrap();
        assert_eq!(json, "\"accessibilityLarge\"");
    }
}
