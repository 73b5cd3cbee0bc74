//! CLI definition using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "barcode-reader")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Decode the barcodes in an image and print them as JSON")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to image file
    pub image: Option<PathBuf>,

    /// Retry on the inverted image when no barcode is found (overrides config)
    #[arg(long)]
    pub invert: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
