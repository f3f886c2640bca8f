use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textadapt::environment::ContentSizeCategory;
use textadapt::transform::Transformation;

#[derive(Parser, Debug)]
#[command(name = "textadapt")]
#[command(version, about = "Embed and re-apply adaptive text-attribute transformations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed transformations into an attribute mapping
    #[command(alias = "e")]
    Embed {
        /// Transformations, e.g. tracking:adobe:240 style:body tab:spacer:12
        #[arg(required = true, num_args = 1..)]
        transformations: Vec<Transformation>,

        /// JSON attribute mapping to embed into (defaults to an empty mapping)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List the transformations embedded in an attribute mapping
    #[command(alias = "d")]
    Decode {
        /// JSON attribute mapping (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Recompute adaptive attributes for a content size category
    #[command(alias = "a")]
    Adapt {
        /// Content size category (defaults to the configured one)
        #[arg(short, long)]
        category: Option<ContentSizeCategory>,

        /// JSON attribute mapping, or styled text with --text (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat the input as styled text ({"text": ..., "runs": [...]})
        #[arg(long)]
        text: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. content_size_category, pretty)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
