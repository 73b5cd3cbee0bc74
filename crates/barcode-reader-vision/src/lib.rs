//! Vision module - image loading and barcode detection
//!
//! Both stages sit behind a trait so callers can swap in their own
//! implementations (or fakes in tests).

pub mod decoder;
pub mod loader;

pub use decoder::{BarcodeDecoder, FallbackDecoder, QrDecoder, ZbarDecoder};
pub use loader::{FileImageLoader, ImageLoader};

pub use image::DynamicImage;
