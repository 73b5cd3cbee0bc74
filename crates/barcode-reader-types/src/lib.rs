//! Core types for barcode decoding

mod error;
mod types;

pub use error::*;
pub use types::*;
