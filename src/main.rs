//! Command-line interface for the subscribe button renderer.
//!
//! The CLI exposes subcommands for producing embed markup from a podcast
//! document and for inspecting the widget-ready feed records derived from
//! it. It is a thin host-integration surface over the library entry points.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Args, Parser, Subcommand};
use sbtn::{
    ButtonOptions, ButtonRenderer, Error, StaticConfig, ToggleValue, load_config, load_podcast,
    transform_feeds
};

/// Command line interface for generating subscribe button embed markup.
#[derive(Debug, Parser)]
#[command(name = "sbtn", version, about = "Render subscribe button embed markup")]
struct Cli {
    #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
/// Supported commands exposed by the CLI.
enum Command {
    /// Render the embed markup for a podcast document.
    Embed(EmbedArgs),
    /// Print the widget-ready feed records for a podcast document.
    Feeds(FeedsArgs)
}

#[derive(Debug, Args)]
/// Arguments accepted by the `embed` subcommand.
struct EmbedArgs {
    /// Path to the YAML podcast document (content data and feeds).
    #[arg(long = "podcast", value_name = "PATH")]
    podcast: PathBuf,

    /// Optional path to a YAML configuration document.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Button size identifier.
    #[arg(long = "size", value_name = "ID")]
    size: Option<String>,

    /// Cover format identifier.
    #[arg(long = "format", value_name = "ID")]
    format: Option<String>,

    /// Width value; `auto` enables automatic sizing.
    #[arg(long = "width", value_name = "WIDTH")]
    width: Option<String>,

    /// Visual style identifier.
    #[arg(long = "style", value_name = "ID")]
    style: Option<String>,

    /// Widget language tag.
    #[arg(long = "language", value_name = "TAG")]
    language: Option<String>,

    /// Accent color passed to the widget.
    #[arg(long = "color", value_name = "CSS_COLOR")]
    color: Option<String>,

    /// Identifier distinguishing multiple buttons on one page.
    #[arg(long = "button-id", value_name = "ID")]
    button_id: Option<String>,

    /// Hide the rendered button.
    #[arg(long = "hide", action = ArgAction::SetTrue)]
    hide: bool
}

#[derive(Debug, Args)]
/// Arguments accepted by the `feeds` subcommand.
struct FeedsArgs {
    /// Path to the YAML podcast document.
    #[arg(long = "podcast", value_name = "PATH")]
    podcast: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(error) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from document loading and rendering.
fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Command::Embed(args) => run_embed(args),
        Command::Feeds(args) => run_feeds(args)
    }
}

fn run_embed(args: EmbedArgs) -> Result<(), Error> {
    let markup = embed_markup(&args)?;
    println!("{markup}");
    Ok(())
}

fn embed_markup(args: &EmbedArgs) -> Result<String, Error> {
    let content = load_podcast(&args.podcast)?;
    let config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => StaticConfig::default()
    };

    let options = ButtonOptions {
        size: args.size.clone(),
        format: args.format.clone(),
        width: args.width.clone(),
        style: args.style.clone(),
        language: args.language.clone(),
        color: args.color.clone(),
        button_id: args.button_id.clone(),
        hide: args.hide.then_some(ToggleValue::Bool(true)),
        ..ButtonOptions::default()
    };

    ButtonRenderer::new(config).render(&content, &options)
}

fn run_feeds(args: FeedsArgs) -> Result<(), Error> {
    let content = load_podcast(&args.podcast)?;
    let records = transform_feeds(&content.feeds);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_records(&mut handle, &records, args.pretty)
}

fn write_records<W: io::Write>(
    writer: &mut W,
    records: &[sbtn::FeedRecord],
    pretty: bool
) -> Result<(), Error> {
    if pretty {
        serde_json::to_writer_pretty(writer, records)?;
    } else {
        serde_json::to_writer(writer, records)?;
    }

    Ok(())
}
