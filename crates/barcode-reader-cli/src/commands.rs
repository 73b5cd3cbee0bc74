//! Command handler

use crate::cli::Cli;
use crate::output::{render_error, render_result};
use barcode_reader_app::{read_barcodes, Config};
use barcode_reader_types::{DecodeResult, Result};
use std::path::Path;

/// Execute the CLI and return the process exit code.
///
/// A missing image path is the only failure reported with a non-zero code;
/// runtime failures are printed as `{"error": ...}` and still exit 0.
pub fn execute(cli: Cli) -> i32 {
    let Some(image) = cli.image.as_deref() else {
        println!("No image path provided.");
        return 1;
    };

    let line = match cmd_decode(&cli, image).and_then(|result| render_result(&result)) {
        Ok(line) => line,
        Err(e) => render_error(&e),
    };
    println!("{}", line);

    0
}

fn cmd_decode(cli: &Cli, image: &Path) -> Result<DecodeResult> {
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override from CLI args
    if cli.verbose {
        config.verbose = true;
    }
    if cli.invert {
        config.try_inverted = true;
    }

    if config.verbose {
        eprintln!("{}", config);
    }

    read_barcodes(image, &config)
}
