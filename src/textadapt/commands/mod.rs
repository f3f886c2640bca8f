use crate::config::AdaptConfig;
use crate::text::StyledText;
use crate::transform::{Representation, Transformation};
use crate::value::StyleAttributes;

pub mod adapt;
pub mod config;
pub mod decode;
pub mod embed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One entry of the embedded representations list, as seen by `decode`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedEntry {
    pub representation: Representation,
    /// `None` when no registered family recognizes the shape.
    pub transformation: Option<Transformation>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub attributes: Option<StyleAttributes>,
    pub text: Option<StyledText>,
    pub entries: Vec<DecodedEntry>,
    pub config: Option<AdaptConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_attributes(mut self, attributes: StyleAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_text(mut self, text: StyledText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_entries(mut self, entries: Vec<DecodedEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_config(mut self, config: AdaptConfig) -> Self {
        self.config = Some(config);
        self
    }
}
