//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the transformation registry the commands decode with and
//! knows where configuration lives, so callers only pass the values they
//! actually care about.
//!
//! The facade does no I/O beyond reading the config file when a default is
//! needed, and never prints.

use crate::commands::{self, config::ConfigAction, CmdResult};
use crate::config::AdaptConfig;
use crate::environment::{ContentSizeCategory, Environment};
use crate::error::Result;
use crate::registry::TransformationRegistry;
use crate::text::StyledText;
use crate::transform::Transformation;
use crate::value::StyleAttributes;
use std::path::PathBuf;

pub struct TextAdaptApi {
    registry: TransformationRegistry,
    config_dir: PathBuf,
}

impl TextAdaptApi {
    pub fn new(registry: TransformationRegistry, config_dir: PathBuf) -> Self {
        Self {
            registry,
            config_dir,
        }
    }

    /// An API over the builtin transformation families.
    pub fn with_builtin(config_dir: PathBuf) -> Self {
        Self::new(TransformationRegistry::builtin().clone(), config_dir)
    }

    pub fn registry(&self) -> &TransformationRegistry {
        &self.registry
    }

    pub fn config(&self) -> Result<AdaptConfig> {
        AdaptConfig::load(&self.config_dir)
    }

    pub fn embed(
        &self,
        attributes: &StyleAttributes,
        transformations: &[Transformation],
    ) -> Result<CmdResult> {
        commands::embed::run(attributes, transformations)
    }

    pub fn decode(&self, attributes: &StyleAttributes) -> Result<CmdResult> {
        commands::decode::run(attributes, &self.registry)
    }

    /// Adapt attributes; `category` falls back to the configured default.
    pub fn adapt(
        &self,
        attributes: &StyleAttributes,
        category: Option<ContentSizeCategory>,
    ) -> Result<CmdResult> {
        let environment = self.environment(category)?;
        commands::adapt::run(attributes, &environment, &self.registry)
    }

    pub fn adapt_text(
        &self,
        text: &StyledText,
        category: Option<ContentSizeCategory>,
    ) -> Result<CmdResult> {
        let environment = self.environment(category)?;
        commands::adapt::run_text(text, &environment, &self.registry)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn environment(&self, category: Option<ContentSizeCategory>) -> Result<Environment> {
        let category = match category {
            Some(category) => category,
            None => self.config()?.content_size_category,
        };
        Ok(Environment::new(category))
    }
}
