//! Inspect command - show normalized OCR text without extracting fields.
//!
//! Useful when a scan comes back with missing fields: the normalized view
//! shows exactly what the extractors saw.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use dniscan_core::{normalize_back, normalize_front, NormalizedText};

/// Arguments for the inspect command.
#[derive(Args)]
pub struct InspectArgs {
    /// OCR text file
    #[arg(required = true)]
    input: PathBuf,

    /// Which side's normalization to apply
    #[arg(short, long, value_enum, default_value = "front")]
    side: Side,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Side {
    /// Front-side cleanup (also strips noise glyphs)
    Front,
    /// Back-side cleanup (whitespace only)
    Back,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let raw = fs::read_to_string(&args.input)?;
    let normalized: NormalizedText = match args.side {
        Side::Front => normalize_front(&raw),
        Side::Back => normalize_back(&raw),
    };

    println!(
        "{} {} chars in, {} chars out, {} lines",
        style("normalized:").bold(),
        raw.len(),
        normalized.as_str().len(),
        normalized.lines().count()
    );
    println!();

    for (i, line) in normalized.lines().enumerate() {
        println!("{:>3}  {}", i, line);
    }

    Ok(())
}
