//! Even-page rotation CLI tool
//!
//! Rotates every even-numbered page of a PDF by 180 degrees so that back
//! sides come out the right way up on short-edge duplex printers.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use pdf_booklet::pdf::{rotate_even_pages, RotateOptions};

/// Rotate even pages of a PDF file by 180 degrees
#[derive(Parser)]
#[command(name = "rotate-pages")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Writes scan_rotated.pdf next to the input
    rotate-pages scan.pdf

    # Choose the output file
    rotate-pages scan.pdf -o duplex.pdf")]
struct Cli {
    /// Path to the input PDF file
    input_pdf: PathBuf,

    /// Path for the output PDF file (default: <input>_rotated.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = RotateOptions::new(cli.input_pdf, cli.output);

    if let Err(e) = run(&options) {
        eprintln!("Error processing PDF: {:#}", e);
        process::exit(1);
    }
}

fn run(options: &RotateOptions) -> Result<()> {
    rotate_even_pages(options)?;

    println!(
        "Successfully rotated even pages in {} and saved to {}",
        options.input_path.display(),
        options.output_path.display()
    );

    Ok(())
}
