//! CLI tool for rendering the social-preview card to disk.
//!
//! Lets deployments pre-generate the Open Graph image instead of serving it
//! from the live endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Render without text layers
//! cargo run --bin og -- --output og-e4x.png
//!
//! # Render with text layers
//! cargo run --bin og -- --font assets/Inter.ttf --output og-e4x.png
//! ```

use advisory_site::og::OgCard;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Render the E4X social card to a PNG file.
#[derive(Parser)]
#[command(name = "og")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = "og-e4x.png")]
    output: PathBuf,

    /// Font file for the card's text layers
    #[arg(short, long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let font_data = match &cli.font {
        Some(path) => Some(
            fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?,
        ),
        None => None,
    };

    let card = OgCard::new(font_data);
    if !card.has_font() {
        eprintln!("note: rendering without text layers (no usable font)");
    }

    let png = card.render_png()?;
    fs::write(&cli.output, &png)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Wrote {} ({} bytes)", cli.output.display(), png.len());

    Ok(())
}
