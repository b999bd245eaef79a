//! Lumen CLI
//!
//! - `lumen check <theme.toml>`: validate aliases and resolve every component
//!   kind against the theme, reporting configuration warnings
//! - `lumen resolve --kind raised-button ...`: print a resolved style as JSON
//! - `lumen simulate <plan.json>`: run a transition plan on a recording target

mod config;
mod simulate;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use config::LumenConfig;
use lumen_style::{
    BoxSpec, CollectingSink, ComponentKind, Overlay, Shade, Size, StyleIntent, StyleResolver,
};
use lumen_theme::{Theme, ThemeError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Theme resolution and transition sequencing tools")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./lumen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a theme file
    Check {
        /// TOML theme file
        theme: PathBuf,
    },
    /// Resolve a component style and print it as JSON
    Resolve(ResolveArgs),
    /// Run a transition plan against a recording target
    Simulate {
        /// JSON plan file
        plan: PathBuf,

        /// Override the configured lead in milliseconds
        #[arg(long)]
        lead_ms: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct ResolveArgs {
    /// Component kind (raised-button, flat-button, field, avatar, divider)
    #[arg(long)]
    kind: String,

    /// Theme file, instead of the configured theme
    #[arg(long)]
    theme: Option<PathBuf>,

    #[arg(long)]
    shade: Option<String>,

    #[arg(long)]
    overlay: Option<String>,

    #[arg(long)]
    size: Option<String>,

    /// Palette name or literal color
    #[arg(long)]
    color: Option<String>,

    /// Alias name, number, or JSON corner record
    #[arg(long)]
    corner: Option<String>,

    /// Alias name, number, or JSON side record
    #[arg(long)]
    margin: Option<String>,

    /// Alias name, number, or JSON side record
    #[arg(long)]
    padding: Option<String>,

    #[arg(long)]
    disabled: bool,

    #[arg(long)]
    busy: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LumenConfig::discover(cli.config.as_deref())?;
    init_logging(&config.logging.filter, cli.verbose);

    match cli.command {
        Command::Check { theme } => check(&theme, &config),
        Command::Resolve(args) => resolve(args, &config),
        Command::Simulate { plan, lead_ms } => {
            simulate::run(&plan, lead_ms.unwrap_or(config.transitions.lead_ms))
        }
    }
}

fn init_logging(filter: &str, verbose: bool) {
    let default = if verbose { "debug" } else { filter };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn check(path: &Path, config: &LumenConfig) -> Result<()> {
    let theme = match Theme::load_with(path, config.theme.max_alias_hops) {
        Ok(theme) => theme,
        Err(ThemeError::Validation(problems)) => {
            for problem in &problems {
                eprintln!("error: {problem}");
            }
            bail!("{} has {} broken alias(es)", path.display(), problems.len());
        }
        Err(err) => return Err(err).with_context(|| format!("Failed to load {}", path.display())),
    };

    let sink = CollectingSink::new();
    let resolver = StyleResolver::new(&theme).with_sink(&sink);
    let mut warnings = 0;
    for kind in ComponentKind::ALL {
        resolver.resolve(kind.config(), &StyleIntent::new(), None);
        for warning in sink.take() {
            println!("warning: {}: {warning}", kind.name());
            warnings += 1;
        }
    }

    println!("{}: theme `{}` ok, {warnings} warning(s)", path.display(), theme.name());
    Ok(())
}

fn resolve(args: ResolveArgs, config: &LumenConfig) -> Result<()> {
    let kind = ComponentKind::from_name(&args.kind).with_context(|| {
        let known: Vec<_> = ComponentKind::ALL.iter().map(|k| k.name()).collect();
        format!("Unknown component kind `{}` (known: {})", args.kind, known.join(", "))
    })?;
    let theme = match &args.theme {
        Some(path) => Theme::load_with(path, config.theme.max_alias_hops)
            .with_context(|| format!("Failed to load theme {}", path.display()))?,
        None => config.load_theme()?,
    };

    let mut intent = StyleIntent::new().disabled(args.disabled).busy(args.busy);
    if let Some(shade) = &args.shade {
        intent = intent.shade(parse_choice("shade", shade, Shade::from_name)?);
    }
    if let Some(overlay) = &args.overlay {
        intent = intent.overlay(parse_choice("overlay", overlay, Overlay::from_name)?);
    }
    if let Some(size) = &args.size {
        intent = intent.size(parse_choice("size", size, Size::from_name)?);
    }
    if let Some(color) = args.color {
        intent = intent.color(color);
    }
    if let Some(corner) = &args.corner {
        intent = intent.corner(parse_box("corner", corner)?);
    }
    if let Some(margin) = &args.margin {
        intent = intent.margin(parse_box("margin", margin)?);
    }
    if let Some(padding) = &args.padding {
        intent = intent.padding(parse_box("padding", padding)?);
    }

    let style = StyleResolver::new(&theme).resolve(kind.config(), &intent, None);
    let json = if args.compact {
        serde_json::to_string(&style)?
    } else {
        serde_json::to_string_pretty(&style)?
    };
    println!("{json}");
    Ok(())
}

fn parse_choice<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(value).with_context(|| format!("Invalid {field} `{value}`"))
}

/// Numbers and JSON records parse as such; anything else is an alias name
fn parse_box<R: DeserializeOwned>(field: &str, value: &str) -> Result<BoxSpec<R>> {
    let value = value.trim();
    if value.starts_with('{') || value.parse::<f32>().is_ok() {
        return serde_json::from_str(value).with_context(|| format!("Invalid {field} `{value}`"));
    }
    Ok(BoxSpec::alias(value))
}
