//! Barcode image fixtures rendered at test time

use barcoders::sym::ean13::EAN13;
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use std::path::{Path, PathBuf};

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 255;

pub fn qr(data: &str, dark: u8, light: u8) -> GrayImage {
    let code = QrCode::new(data.as_bytes()).unwrap();
    let width = code.width() as u32;
    let colors = code.to_colors();
    let (module, quiet) = (6, 4);
    let side = (width + 2 * quiet) * module;

    GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / module, y / module);
        if mx < quiet || my < quiet || mx >= quiet + width || my >= quiet + width {
            return Luma([light]);
        }
        let idx = ((my - quiet) * width + (mx - quiet)) as usize;
        if colors[idx] == Color::Dark {
            Luma([dark])
        } else {
            Luma([light])
        }
    })
}

pub fn ean13(digits: &str) -> GrayImage {
    let bars = EAN13::new(digits).unwrap().encode();
    let (module, quiet) = (3u32, 12u32);
    let len = bars.len() as u32;

    GrayImage::from_fn((len + 2 * quiet) * module, 120, |x, _| {
        let m = x / module;
        if m >= quiet && m < quiet + len && bars[(m - quiet) as usize] == 1 {
            Luma([BLACK])
        } else {
            Luma([WHITE])
        }
    })
}

pub fn side_by_side(left: &GrayImage, right: &GrayImage) -> GrayImage {
    let gap = 40;
    let width = left.width() + gap + right.width();
    let height = left.height().max(right.height());
    let mut canvas = GrayImage::from_pixel(width, height, Luma([WHITE]));
    image::imageops::overlay(&mut canvas, left, 0, 0);
    image::imageops::overlay(&mut canvas, right, (left.width() + gap) as i64, 0);
    canvas
}

pub fn save(img: &GrayImage, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
