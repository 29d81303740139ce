//! climenu - preview of a styled terminal menu.
//!
//! Loads the style configuration, detects the host terminal, and prints a
//! sample menu painted with the resulting style.

mod preview;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use climenu_config::StyleConfig;
use climenu_style::MenuStyle;
use climenu_terminal::{ColourSupport, HostTerminal, Terminal};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Prints a sample menu using the configured style
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Style config file (searched in the default locations when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu width in columns, overriding the config and terminal width
    #[arg(long)]
    width: Option<u16>,

    /// Colour depth to assume instead of detecting it (8, 256, ...)
    #[arg(long)]
    colours: Option<u32>,

    /// Write the resulting style to this file as JSON
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("CLIMENU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = load_config(&args)?;
    let style = build_style(&args, &config)?;

    if let Some(path) = &args.save_config {
        StyleConfig::from_style(&style)
            .save_to(path)
            .with_context(|| format!("saving style to {}", path.display()))?;
    }

    let mut stdout = io::stdout().lock();
    for line in preview::render_menu(&style, "climenu", &preview::sample_items(), 0) {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<StyleConfig> {
    match &args.config {
        Some(path) => StyleConfig::load_from(path)
            .with_context(|| format!("loading style config from {}", path.display())),
        None => StyleConfig::load().context("loading style config"),
    }
}

fn build_style(args: &Args, config: &StyleConfig) -> anyhow::Result<MenuStyle<HostTerminal>> {
    let terminal = match args.colours {
        Some(depth) => HostTerminal::with_colour_support(ColourSupport::from_depth(depth)),
        None => HostTerminal::detect(),
    };
    tracing::info!(colour_support = %terminal.colour_support(), "building menu style");

    let mut style = MenuStyle::new(terminal);
    config.apply_to(&mut style)?;
    if let Some(width) = args.width {
        style.set_width(width);
    }
    Ok(style)
}
