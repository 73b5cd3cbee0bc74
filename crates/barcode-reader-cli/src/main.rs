//! Barcode Reader - decode barcodes in an image file
//!
//! Prints the decoded `{type, data}` records (or an error object) as a single
//! JSON line.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    std::process::exit(commands::execute(cli));
}
