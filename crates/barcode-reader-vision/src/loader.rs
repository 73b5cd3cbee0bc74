//! Image loading

use barcode_reader_types::{Error, Result};
use image::{DynamicImage, ImageError, ImageReader};
use std::io;
use std::path::Path;

/// Turns a path into an in-memory image
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage>;
}

/// Loads images from the filesystem with the `image` crate.
///
/// The format is sniffed from the file content, so the extension does not
/// matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl FileImageLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let display = path.display().to_string();

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound(display));
            }
            Err(e) => return Err(unreadable(display, e)),
        };

        if !metadata.is_file() {
            return Err(Error::Unreadable {
                path: display,
                reason: "not a regular file".to_string(),
            });
        }

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| unreadable(display.clone(), e))?;

        if reader.format().is_none() {
            return Err(Error::UnsupportedImage {
                path: display,
                reason: "unrecognized image format".to_string(),
            });
        }

        reader.decode().map_err(|e| match e {
            ImageError::Unsupported(_) | ImageError::Decoding(_) => Error::UnsupportedImage {
                path: display,
                reason: e.to_string(),
            },
            ImageError::IoError(io_err) => unreadable(display, io_err),
            other => Error::Image(other),
        })
    }
}

fn unreadable(path: String, err: io::Error) -> Error {
    Error::Unreadable {
        path,
        reason: err.to_string(),
    }
}
