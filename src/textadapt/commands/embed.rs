use crate::commands::{CmdMessage, CmdResult};
use crate::embed::{embed, embedded_representations};
use crate::error::Result;
use crate::transform::{EmbeddedTransformation, Transformation};
use crate::value::StyleAttributes;

/// Embed each transformation in turn.
///
/// Opt-out transformations are skipped with a warning rather than stored as
/// inert entries.
pub fn run(attributes: &StyleAttributes, transformations: &[Transformation]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut current = attributes.clone();

    for transformation in transformations {
        if transformation.representation().is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {}: it does not need to be embedded",
                transformation
            )));
            continue;
        }

        let before = embedded_representations(&current).len();
        current = embed(transformation, &current);
        if embedded_representations(&current).len() == before {
            result.add_message(CmdMessage::info(format!(
                "Already embedded: {}",
                transformation
            )));
        } else {
            result.add_message(CmdMessage::success(format!("Embedded {}", transformation)));
        }
    }

    Ok(result.with_attributes(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::transform::{Tab, Tracking};

    #[test]
    fn embeds_in_order() {
        let transformations = vec![
            Transformation::from(Tab::Spacer(12.0)),
            Transformation::from(Tab::HeadIndent(4.0)),
        ];
        let result = run(&StyleAttributes::new(), &transformations).unwrap();

        let attrs = result.attributes.unwrap();
        assert_eq!(
            embedded_representations(&attrs),
            vec![
                Tab::Spacer(12.0).representation(),
                Tab::HeadIndent(4.0).representation(),
            ]
        );
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Success));
    }

    #[test]
    fn duplicates_are_reported() {
        let transformations = vec![
            Transformation::from(Tracking::Adobe(240.0)),
            Transformation::from(Tracking::Adobe(240.0)),
        ];
        let result = run(&StyleAttributes::new(), &transformations).unwrap();

        assert_eq!(embedded_representations(&result.attributes.unwrap()).len(), 1);
        assert_eq!(result.messages[1].level, MessageLevel::Info);
        assert!(result.messages[1].content.contains("Already embedded"));
    }

    #[test]
    fn opt_out_is_skipped() {
        let transformations = vec![Transformation::from(Tracking::Point(2.0))];
        let result = run(&StyleAttributes::new(), &transformations).unwrap();

        assert_eq!(result.attributes, Some(StyleAttributes::new()));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
