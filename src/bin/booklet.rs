//! Booklet layout guide CLI tool
//!
//! Writes `booklet.pdf`, a printable guide showing which page goes on each
//! side of each sheet, and reports how many sheets are needed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdf_booklet::pdf::{create_layout_guide, GuideOptions};

/// Create a booklet layout guide
#[derive(Parser)]
#[command(name = "booklet")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Guide for a 10-page booklet (3 sheets, 2 blank pages at the end)
    booklet 10")]
struct Cli {
    /// Total number of content pages
    #[arg(allow_negative_numbers = true)]
    total_pages: i64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.total_pages) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(total_pages: i64) -> Result<()> {
    let options = GuideOptions {
        content_pages: total_pages,
        output_path: PathBuf::from("booklet.pdf"),
        ..Default::default()
    };

    let summary = create_layout_guide(&options)
        .with_context(|| format!("Failed to create {}", options.output_path.display()))?;

    println!("Total sheets needed: {}", summary.sheet_count);

    Ok(())
}
