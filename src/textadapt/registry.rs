//! Transformation registry.
//!
//! The registry is the ordered list of transformation families that embedded
//! representations may decode to. It is the single source of truth for what
//! can be read back out of an attribute mapping: adding a family means adding
//! a [`TransformationSpec`] to [`BUILTIN_TRANSFORMATIONS`] (or registering it
//! on a custom registry). Decoding and dispatch code never changes.
//!
//! Decoders are tried in order, but order is not a tie-breaker: no two
//! decoders may accept the same representation shape. [`TransformationRegistry::claimants`]
//! exists to check that.
//!
//! A registry is built once and then only read. [`TransformationRegistry::builtin`]
//! is initialised lazily on first use and is safe to share between threads.

use crate::embed::embedded_representations;
use crate::transform::{
    AdaptiveStyle, EmbeddedTransformation, Representation, Tab, Tracking, Transformation,
};
use crate::value::StyleAttributes;
use once_cell::sync::Lazy;
use std::fmt;
use tracing::debug;

/// Decodes one representation into a transformation of a single family.
pub type Decoder = fn(&Representation) -> Option<Transformation>;

/// A registered transformation family.
#[derive(Clone, Copy)]
pub struct TransformationSpec {
    /// Family name, for diagnostics.
    pub name: &'static str,

    /// Shape-matching decoder for this family.
    pub decode: Decoder,
}

impl TransformationSpec {
    pub const fn new(name: &'static str, decode: Decoder) -> Self {
        Self { name, decode }
    }

    /// Entry for a family that implements [`EmbeddedTransformation`].
    pub const fn of<T>(name: &'static str) -> Self
    where
        T: EmbeddedTransformation + Into<Transformation>,
    {
        Self::new(name, decode_as::<T>)
    }
}

impl fmt::Debug for TransformationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformationSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn decode_as<T>(representation: &Representation) -> Option<Transformation>
where
    T: EmbeddedTransformation + Into<Transformation>,
{
    T::from_representation(representation).map(Into::into)
}

/// The families every mapping produced by this crate may contain.
pub const BUILTIN_TRANSFORMATIONS: &[TransformationSpec] = &[
    TransformationSpec::of::<AdaptiveStyle>("adaptive-style"),
    TransformationSpec::of::<Tracking>("tracking"),
    TransformationSpec::of::<Tab>("tab"),
];

static BUILTIN: Lazy<TransformationRegistry> =
    Lazy::new(|| TransformationRegistry::from_specs(BUILTIN_TRANSFORMATIONS));

/// Ordered table of decoders.
#[derive(Debug, Clone, Default)]
pub struct TransformationRegistry {
    specs: Vec<TransformationSpec>,
}

impl TransformationRegistry {
    /// An empty registry. Decodes nothing until families are registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: &[TransformationSpec]) -> Self {
        Self {
            specs: specs.to_vec(),
        }
    }

    /// The shared registry of [`BUILTIN_TRANSFORMATIONS`].
    pub fn builtin() -> &'static TransformationRegistry {
        &BUILTIN
    }

    /// Append a family. Later families are tried after earlier ones.
    pub fn register(mut self, spec: TransformationSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn specs(&self) -> &[TransformationSpec] {
        &self.specs
    }

    /// Look up a registered family by name.
    pub fn get_spec(&self, name: &str) -> Option<&TransformationSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Decode with the first family that recognizes the shape.
    pub fn decode_any(&self, representation: &Representation) -> Option<Transformation> {
        self.specs
            .iter()
            .find_map(|spec| (spec.decode)(representation))
    }

    /// Names of every family that accepts `representation`.
    ///
    /// For a well-formed registry this has at most one entry.
    pub fn claimants(&self, representation: &Representation) -> Vec<&'static str> {
        self.specs
            .iter()
            .filter(|spec| (spec.decode)(representation).is_some())
            .map(|spec| spec.name)
            .collect()
    }

    /// Decode every embedded representation, keeping those of type `T`.
    ///
    /// Preserves embedding order. Entries no family recognizes are dropped.
    pub fn decode_all<T>(&self, attributes: &StyleAttributes) -> Vec<T>
    where
        T: TryFrom<Transformation>,
    {
        self.decode_embedded(attributes)
            .into_iter()
            .filter_map(|transformation| T::try_from(transformation).ok())
            .collect()
    }

    /// Every embedded transformation that has the adaptive capability.
    pub fn adaptive_transformations(&self, attributes: &StyleAttributes) -> Vec<Transformation> {
        self.decode_embedded(attributes)
            .into_iter()
            .filter(Transformation::is_adaptive)
            .collect()
    }

    /// Every embedded transformation any registered family recognizes.
    pub fn decode_embedded(&self, attributes: &StyleAttributes) -> Vec<Transformation> {
        embedded_representations(attributes)
            .iter()
            .filter_map(|representation| {
                let decoded = self.decode_any(representation);
                if decoded.is_none() {
                    debug!(?representation, "skipping unrecognized transformation");
                }
                decoded
            })
            .collect()
    }
}
