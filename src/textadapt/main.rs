use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use textadapt::api::TextAdaptApi;
use textadapt::commands::config::ConfigAction;
use textadapt::commands::CmdResult;
use textadapt::config::{self, AdaptConfig};
use textadapt::environment::ContentSizeCategory;
use textadapt::error::Result;
use textadapt::text::StyledText;
use textadapt::transform::Transformation;
use textadapt::value::StyleAttributes;
use tracing::Level;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_entries, print_json, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TextAdaptApi,
    config: AdaptConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context()?;

    match cli.command {
        Commands::Embed {
            transformations,
            input,
        } => handle_embed(&ctx, transformations, input.as_deref()),
        Commands::Decode { input } => handle_decode(&ctx, input.as_deref()),
        Commands::Adapt {
            category,
            input,
            text,
        } => handle_adapt(&ctx, category, input.as_deref(), text),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context() -> Result<AppContext> {
    let config_dir: PathBuf = config::config_dir()?;
    let api = TextAdaptApi::with_builtin(config_dir);
    let config = api.config()?;
    Ok(AppContext { api, config })
}

/// Read a file, or stdin when no path is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_attributes(input: Option<&Path>) -> Result<StyleAttributes> {
    Ok(serde_json::from_str(&read_input(input)?)?)
}

fn handle_embed(
    ctx: &AppContext,
    transformations: Vec<Transformation>,
    input: Option<&Path>,
) -> Result<()> {
    let attributes = match input {
        Some(_) => read_attributes(input)?,
        None => StyleAttributes::new(),
    };
    let result = ctx.api.embed(&attributes, &transformations)?;
    finish(ctx, result)
}

fn handle_decode(ctx: &AppContext, input: Option<&Path>) -> Result<()> {
    let attributes = read_attributes(input)?;
    let result = ctx.api.decode(&attributes)?;
    print_entries(&result.entries)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_adapt(
    ctx: &AppContext,
    category: Option<ContentSizeCategory>,
    input: Option<&Path>,
    text: bool,
) -> Result<()> {
    let result = if text {
        let styled: StyledText = serde_json::from_str(&read_input(input)?)?;
        ctx.api.adapt_text(&styled, category)?
    } else {
        ctx.api.adapt(&read_attributes(input)?, category)?
    };
    finish(ctx, result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Print whichever document the command produced, then its messages.
fn finish(ctx: &AppContext, result: CmdResult) -> Result<()> {
    if let Some(attributes) = &result.attributes {
        print_json(attributes, ctx.config.pretty)?;
    }
    if let Some(text) = &result.text {
        print_json(text, ctx.config.pretty)?;
    }
    print_messages(&result.messages);
    Ok(())
}
