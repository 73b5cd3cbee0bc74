//! Decode records and symbology identifiers

use crate::ParseSymbologyError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Barcode symbology reported by a decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Ean2,
    Ean5,
    Ean8,
    UpcE,
    Isbn10,
    UpcA,
    Ean13,
    Isbn13,
    Composite,
    /// Interleaved 2 of 5
    I25,
    Databar,
    DatabarExpanded,
    Codabar,
    Code39,
    Pdf417,
    QrCode,
    SqCode,
    Code93,
    Code128,
}

impl Symbology {
    pub const ALL: [Symbology; 19] = [
        Symbology::Ean2,
        Symbology::Ean5,
        Symbology::Ean8,
        Symbology::UpcE,
        Symbology::Isbn10,
        Symbology::UpcA,
        Symbology::Ean13,
        Symbology::Isbn13,
        Symbology::Composite,
        Symbology::I25,
        Symbology::Databar,
        Symbology::DatabarExpanded,
        Symbology::Codabar,
        Symbology::Code39,
        Symbology::Pdf417,
        Symbology::QrCode,
        Symbology::SqCode,
        Symbology::Code93,
        Symbology::Code128,
    ];

    /// zbar-style identifier used in the `type` field of the output
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Ean2 => "EAN2",
            Symbology::Ean5 => "EAN5",
            Symbology::Ean8 => "EAN8",
            Symbology::UpcE => "UPCE",
            Symbology::Isbn10 => "ISBN10",
            Symbology::UpcA => "UPCA",
            Symbology::Ean13 => "EAN13",
            Symbology::Isbn13 => "ISBN13",
            Symbology::Composite => "COMPOSITE",
            Symbology::I25 => "I25",
            Symbology::Databar => "DATABAR",
            Symbology::DatabarExpanded => "DATABAR_EXP",
            Symbology::Codabar => "CODABAR",
            Symbology::Code39 => "CODE39",
            Symbology::Pdf417 => "PDF417",
            Symbology::QrCode => "QRCODE",
            Symbology::SqCode => "SQCODE",
            Symbology::Code93 => "CODE93",
            Symbology::Code128 => "CODE128",
        }
    }

    /// Whether the symbology is a 2D (matrix or stacked) code
    pub fn is_2d(&self) -> bool {
        matches!(
            self,
            Symbology::QrCode | Symbology::SqCode | Symbology::Pdf417
        )
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = ParseSymbologyError;

    /// Parse a zbar-style name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbology::ALL
            .into_iter()
            .find(|sym| sym.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSymbologyError(s.to_string()))
    }
}

/// A single symbol found by a decoder, payload still raw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub symbology: Symbology,
    pub payload: Vec<u8>,
}

impl Detection {
    pub fn new(symbology: Symbology, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            symbology,
            payload: payload.into(),
        }
    }
}

/// One decoded barcode as printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    /// Symbology name (e.g., "QRCODE", "EAN13")
    #[serde(rename = "type")]
    pub symbology: String,
    /// Payload as UTF-8 text
    pub data: String,
}

impl BarcodeRecord {
    /// Build a record from a detection, failing if the payload is not UTF-8
    pub fn from_detection(detection: Detection) -> crate::Result<Self> {
        let data = String::from_utf8(detection.payload)?;
        Ok(Self {
            symbology: detection.symbology.name().to_string(),
            data,
        })
    }
}

/// Ordered list of records for one image, in detection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodeResult {
    pub records: Vec<BarcodeRecord>,
}

impl DecodeResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BarcodeRecord> {
        self.records.iter()
    }
}

impl FromIterator<BarcodeRecord> for DecodeResult {
    fn from_iter<I: IntoIterator<Item = BarcodeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Failure shape written in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&crate::Error> for ErrorReport {
    fn from(err: &crate::Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
