//! Placeholder icon generator.
//!
//! Draws the three placeholder assets (app icon, splash screen,
//! notification icon) and writes them as PNGs into the asset directory.
//! The images are temporary stand-ins; replace them with real design
//! assets before release.
//!
//! Example:
//!   cargo run --bin gen_icons -- --out-dir mobile/assets

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use placeholder_icons::{load_font, placeholder_catalog, render};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate placeholder PNG assets", long_about = None)]
struct Args {
    /// Directory the PNGs are written into (created if missing).
    #[arg(long, default_value = "assets")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir {}", args.out_dir.display()))?;
    let font = load_font()?;
    for spec in placeholder_catalog() {
        let image = render(&spec, &font)?;
        let path = args.out_dir.join(spec.file_name);
        image
            .save(&path)
            .with_context(|| format!("write {}", path.display()))?;
        println!("Wrote {} ({}x{})", path.display(), spec.width, spec.height);
    }
    Ok(())
}
