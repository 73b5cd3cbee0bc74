//! Decode use case
//!
//! Load the image, run the decoder over it and turn each detection into a
//! `{type, data}` record. Any failure aborts the whole read; partial record
//! lists are never returned.

use crate::config::Config;
use barcode_reader_types::{BarcodeRecord, DecodeResult, Result};
use barcode_reader_vision::{
    BarcodeDecoder, FallbackDecoder, FileImageLoader, ImageLoader, QrDecoder, ZbarDecoder,
};
use std::path::Path;

/// Decode request handler with injected loader and decoder
pub struct BarcodeReader<L, D> {
    loader: L,
    decoder: D,
    verbose: bool,
}

impl<L: ImageLoader, D: BarcodeDecoder> BarcodeReader<L, D> {
    pub fn new(loader: L, decoder: D) -> Self {
        Self {
            loader,
            decoder,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Read all barcodes in the image at `path`, in detection order
    pub fn read(&self, path: &Path) -> Result<DecodeResult> {
        if self.verbose {
            eprintln!("Loading image: {}", path.display());
        }
        let image = self.loader.load(path)?;

        if self.verbose {
            eprintln!("Scanning {}x{} image", image.width(), image.height());
        }
        let detections = self.decoder.decode(&image)?;

        if self.verbose {
            eprintln!("Found {} barcode(s)", detections.len());
            for detection in &detections {
                let kind = if detection.symbology.is_2d() { "2D" } else { "linear" };
                eprintln!(
                    "  {} ({}, {} bytes)",
                    detection.symbology,
                    kind,
                    detection.payload.len()
                );
            }
        }

        detections
            .into_iter()
            .map(BarcodeRecord::from_detection)
            .collect()
    }
}

/// zbar scan first; rqrr only gets a look when zbar finds nothing
pub type DefaultDecoder = FallbackDecoder<ZbarDecoder, QrDecoder>;

impl BarcodeReader<FileImageLoader, DefaultDecoder> {
    /// Reader over the filesystem loader and the default decoder chain
    pub fn from_config(config: &Config) -> Self {
        let decoder = FallbackDecoder::new(
            ZbarDecoder::new().with_try_inverted(config.try_inverted),
            QrDecoder::new().with_try_inverted(config.try_inverted),
        );
        Self::new(FileImageLoader::new(), decoder).with_verbose(config.verbose)
    }
}

/// Read barcodes from an image file using the default collaborators
pub fn read_barcodes(path: &Path, config: &Config) -> Result<DecodeResult> {
    BarcodeReader::from_config(config).read(path)
}
