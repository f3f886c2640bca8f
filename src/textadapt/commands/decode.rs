use crate::commands::{CmdMessage, CmdResult, DecodedEntry};
use crate::embed::embedded_representations;
use crate::error::Result;
use crate::registry::TransformationRegistry;
use crate::value::StyleAttributes;

pub fn run(attributes: &StyleAttributes, registry: &TransformationRegistry) -> Result<CmdResult> {
    let entries: Vec<DecodedEntry> = embedded_representations(attributes)
        .into_iter()
        .map(|representation| DecodedEntry {
            transformation: registry.decode_any(&representation),
            representation,
        })
        .collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info("No embedded transformations."));
    }
    let inert = entries
        .iter()
        .filter(|entry| entry.transformation.is_none())
        .count();
    if inert > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} embedded entr{} not recognized",
            inert,
            if inert == 1 { "y is" } else { "ies are" }
        )));
    }

    Ok(result.with_entries(entries))
}
