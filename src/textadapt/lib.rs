//! # textadapt Architecture
//!
//! textadapt keeps adaptive styling alive inside plain text-attribute
//! mappings. A style builder embeds *transformations* (adaptive font sizing,
//! Adobe tracking, tab stops) into the attributes it produces; later, when
//! the display environment changes, anyone holding just those attributes can
//! recompute them. No style-builder objects need to survive, and the
//! attributes stay archivable by any generic serializer because every
//! transformation is stored as a plain, plist-compatible mapping.
//!
//! ## Data Flow
//!
//! ```text
//! Transformation ──encode──▶ Representation ──embed──▶ StyleAttributes
//!                                                          │
//!                 Environment ──▶ adapt ◀──decode (registry)┘
//!                                   │
//!                                   ▼
//!                    Option<StyleAttributes>  (None: nothing to do)
//! ```
//!
//! ## Layers
//!
//! 1. **Core** (`value`, `transform`, `registry`, `embed`, `adapt`, `text`):
//!    pure functions over values. Never fails; unknown data is ignored.
//! 2. **Commands** (`commands/*.rs`): operations returning `CmdResult` with
//!    user-facing messages. No printing.
//! 3. **API** (`api.rs`): facade owning the registry and config location.
//! 4. **CLI** (`main.rs`): argument parsing, file I/O and output.
//!
//! ## Module Overview
//!
//! - [`value`]: plist-compatible values, attribute mappings, fonts
//! - [`transform`]: transformation families and their codecs
//! - [`registry`]: ordered decoder table
//! - [`embed`]: the embedded representations list
//! - [`adapt`]: adaptive dispatch
//! - [`text`]: styled text made of attribute runs
//! - [`environment`]: content size categories
//! - [`commands`], [`api`]: the operation layer used by the CLI
//! - [`config`]: CLI configuration
//! - [`error`]: error types for the outer layers

pub mod adapt;
pub mod api;
pub mod commands;
pub mod config;
pub mod embed;
pub mod environment;
pub mod error;
pub mod registry;
pub mod text;
pub mod transform;
pub mod value;

pub use adapt::adapt;
pub use embed::embed;
pub use environment::{ContentSizeCategory, Environment};
pub use registry::TransformationRegistry;
pub use text::StyledText;
pub use transform::{
    AdaptiveStyle, AdaptiveTransformation, EmbeddedTransformation, Representation, Tab, Tracking,
    Transformation,
};
pub use value::{AttrValue, Font, StyleAttributes};
