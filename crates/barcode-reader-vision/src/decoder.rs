//! Barcode symbol detection

use barcode_reader_types::{Detection, Error, Result, Symbology};
use image::{DynamicImage, GrayImage};
use rqrr::PreparedImage;
use zedbar::{DecoderConfig, Scanner, SymbolType};

/// Finds barcodes in an image, in the order the scan reports them
pub trait BarcodeDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>>;
}

fn check_not_empty(image: &DynamicImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::Decode("image has no pixels".to_string()));
    }
    Ok(())
}

/// Multi-symbology decoder backed by `zedbar` (linear codes, QR and SQ codes)
#[derive(Debug, Clone, Default)]
pub struct ZbarDecoder {
    try_inverted: bool,
}

impl ZbarDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan the inverted image when nothing is found (light-on-dark codes)
    pub fn with_try_inverted(mut self, try_inverted: bool) -> Self {
        self.try_inverted = try_inverted;
        self
    }
}

impl BarcodeDecoder for ZbarDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>> {
        check_not_empty(image)?;

        let mut zimage =
            zedbar::Image::from_dynamic(image).map_err(|e| Error::Decode(e.to_string()))?;
        let mut scanner =
            Scanner::with_config(DecoderConfig::all().test_inverted(self.try_inverted));

        let detections = scanner
            .scan(&mut zimage)
            .into_symbols()
            .into_iter()
            .filter_map(|symbol| {
                map_symbol_type(symbol.symbol_type())
                    .map(|symbology| Detection::new(symbology, symbol.data()))
            })
            .collect();
        Ok(detections)
    }
}

// None and partial structured-append groups are not complete symbols.
fn map_symbol_type(symbol_type: SymbolType) -> Option<Symbology> {
    let symbology = match symbol_type {
        SymbolType::None | SymbolType::Partial => return None,
        SymbolType::Ean2 => Symbology::Ean2,
        SymbolType::Ean5 => Symbology::Ean5,
        SymbolType::Ean8 => Symbology::Ean8,
        SymbolType::Upce => Symbology::UpcE,
        SymbolType::Isbn10 => Symbology::Isbn10,
        SymbolType::Upca => Symbology::UpcA,
        SymbolType::Ean13 => Symbology::Ean13,
        SymbolType::Isbn13 => Symbology::Isbn13,
        SymbolType::Composite => Symbology::Composite,
        SymbolType::I25 => Symbology::I25,
        SymbolType::Databar => Symbology::Databar,
        SymbolType::DatabarExp => Symbology::DatabarExpanded,
        SymbolType::Codabar => Symbology::Codabar,
        SymbolType::Code39 => Symbology::Code39,
        SymbolType::QrCode => Symbology::QrCode,
        SymbolType::SqCode => Symbology::SqCode,
        SymbolType::Code93 => Symbology::Code93,
        SymbolType::Code128 => Symbology::Code128,
    };
    Some(symbology)
}

/// QR code decoder backed by `rqrr`
#[derive(Debug, Clone, Default)]
pub struct QrDecoder {
    try_inverted: bool,
}

impl QrDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan the inverted image when nothing is found (light-on-dark codes)
    pub fn with_try_inverted(mut self, try_inverted: bool) -> Self {
        self.try_inverted = try_inverted;
        self
    }
}

impl BarcodeDecoder for QrDecoder {
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>> {
        check_not_empty(image)?;

        let mut luma = image.to_luma8();
        let detections = scan_qr(&luma);
        if !detections.is_empty() || !self.try_inverted {
            return Ok(detections);
        }

        image::imageops::invert(&mut luma);
        Ok(scan_qr(&luma))
    }
}

// A grid that fails error correction is not reported.
fn scan_qr(luma: &GrayImage) -> Vec<Detection> {
    let (width, height) = luma.dimensions();
    let mut prepared =
        PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32)[0]
        });

    let grids = prepared.detect_grids();

    let mut detections = Vec::with_capacity(grids.len());
    for grid in grids {
        let mut payload = Vec::new();
        if grid.decode_to(&mut payload).is_ok() {
            detections.push(Detection::new(Symbology::QrCode, payload));
        }
    }
    detections
}

/// Runs `primary`, and `fallback` only when the primary finds nothing
#[derive(Debug, Clone, Default)]
pub struct FallbackDecoder<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackDecoder<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: BarcodeDecoder, F: BarcodeDecoder> BarcodeDecoder for FallbackDecoder<P, F> {
    fn decode(&self, image: &DynamicImage) -> Result<Vec<Detection>> {
        let detections = self.primary.decode(image)?;
        if !detections.is_empty() {
            return Ok(detections);
        }
        self.fallback.decode(image)
    }
}
