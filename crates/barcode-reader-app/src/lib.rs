//! Application service layer - config and the decode use case

pub mod config;
pub mod reader;

pub use config::Config;
pub use reader::{read_barcodes, BarcodeReader, DefaultDecoder};
