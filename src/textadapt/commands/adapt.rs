use crate::adapt::adapt;
use crate::commands::{CmdMessage, CmdResult};
use crate::environment::Environment;
use crate::error::Result;
use crate::registry::TransformationRegistry;
use crate::text::StyledText;
use crate::value::StyleAttributes;

const NOTHING_TO_ADAPT: &str = "Nothing to adapt: no adaptive transformations embedded.";

pub fn run(
    attributes: &StyleAttributes,
    environment: &Environment,
    registry: &TransformationRegistry,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match adapt(attributes, environment, registry) {
        Some(adapted) => {
            result.add_message(CmdMessage::success(format!(
                "Adapted to {}",
                environment.content_size_category
            )));
            Ok(result.with_attributes(adapted))
        }
        None => {
            result.add_message(CmdMessage::info(NOTHING_TO_ADAPT));
            Ok(result)
        }
    }
}

pub fn run_text(
    text: &StyledText,
    environment: &Environment,
    registry: &TransformationRegistry,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match text.adapt(environment, registry) {
        Some(adapted) => {
            result.add_message(CmdMessage::success(format!(
                "Adapted {} run(s) to {}",
                adapted.runs.len(),
                environment.content_size_category
            )));
            Ok(result.with_text(adapted))
        }
        None => {
            result.add_message(CmdMessage::info(NOTHING_TO_ADAPT));
            Ok(result)
        }
    }
}
