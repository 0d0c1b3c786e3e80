// SPDX-License-Identifier: MPL-2.0
//! QR encoder adapter around the `qrcode` crate.
//!
//! The adapter fixes the rendering parameters (lowest error-correction
//! level, 10 px modules, 4-module quiet zone) and lets the library pick
//! the minimal symbol version that fits the input. Everything beyond
//! that — Reed-Solomon coding, mask selection — is the library's
//! documented behavior, not reimplemented here.

use crate::error::Result;
use iced::widget::image;
use image_rs::Luma;
use qrcode::{EcLevel, QrCode};
use std::sync::Arc;

/// Pixel side length of one QR module.
pub const MODULE_PIXELS: u32 = 10;

/// Quiet-zone width in modules on each side (the QR standard minimum).
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Byte-mode capacity of the largest symbol (version 40) at level L.
/// The library enforces this; the constant exists for boundary tests.
pub const MAX_BYTES_AT_LEVEL_L: usize = 2953;

/// A generated QR bitmap.
///
/// Pairs a GPU texture handle (for the preview widget) with the
/// grayscale pixel buffer it was built from (for PNG export). The
/// buffer is behind an `Arc` so the save task can take a cheap clone.
#[derive(Debug, Clone)]
pub struct QrImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    pixels: Arc<image_rs::GrayImage>,
}

impl QrImage {
    /// Wraps a rendered grayscale bitmap, deriving the RGBA copy the
    /// texture handle needs.
    #[must_use]
    pub fn from_gray(pixels: image_rs::GrayImage) -> Self {
        let width = pixels.width();
        let height = pixels.height();
        let rgba = image_rs::DynamicImage::ImageLuma8(pixels.clone()).to_rgba8();
        let handle = image::Handle::from_rgba(width, height, rgba.into_raw());
        Self {
            handle,
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    /// Shared ownership of the grayscale pixels, for the export task.
    pub fn pixels(&self) -> Arc<image_rs::GrayImage> {
        Arc::clone(&self.pixels)
    }
}

/// Encodes `text` as a QR symbol and rasterizes it.
///
/// The side length of the result is `(modules + 2 × 4) × 10` pixels,
/// black modules on white (the renderer defaults). Fails with
/// [`crate::error::Error::Encode`] when the text exceeds the version 40
/// capacity for level L.
pub fn generate(text: &str) -> Result<QrImage> {
    let code = QrCode::with_error_correction_level(text, EcLevel::L)?;

    let pixels = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    Ok(QrImage::from_gray(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn single_byte_input_renders_version_one_geometry() {
        // 1 byte fits version 1 (21 modules): (21 + 2*4) * 10 px.
        let image = generate("a").expect("should encode");
        assert_eq!(image.width, 290);
        assert_eq!(image.height, 290);
    }

    #[test]
    fn rendered_symbol_is_square_with_whole_modules() {
        let image = generate("https://openai.com").expect("should encode");
        assert_eq!(image.width, image.height);
        assert_eq!(image.width % MODULE_PIXELS, 0);
        // Valid symbol sizes are 21 + 4k modules, plus the quiet zone.
        let modules = image.width / MODULE_PIXELS - 2 * QUIET_ZONE_MODULES;
        assert!(modules >= 21 && (modules - 21) % 4 == 0);
    }

    #[test]
    fn quiet_zone_corner_is_white() {
        let image = generate("https://example.com").expect("should encode");
        assert_eq!(image.pixels().get_pixel(0, 0).0, [255]);
    }

    #[test]
    fn generation_is_idempotent() {
        let url = "https://example.com/some/path?q=1";
        let first = generate(url).expect("first generation");
        let second = generate(url).expect("second generation");
        assert_eq!(first.pixels().as_raw(), second.pixels().as_raw());
    }

    #[test]
    fn input_at_capacity_succeeds() {
        let text = "a".repeat(MAX_BYTES_AT_LEVEL_L);
        let image = generate(&text).expect("capacity boundary should fit");
        // Version 40 is 177 modules wide.
        assert_eq!(image.width, (177 + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS);
    }

    #[test]
    fn input_over_capacity_is_an_encode_error() {
        let text = "a".repeat(MAX_BYTES_AT_LEVEL_L + 1);
        match generate(&text) {
            Err(Error::Encode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Encode error, got {other:?}"),
        }
    }

    #[test]
    fn generated_symbol_decodes_back_to_input() {
        let url = "https://openai.com";
        let image = generate(url).expect("should encode");

        let mut prepared = rqrr::PreparedImage::prepare((*image.pixels()).clone());
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR symbol");
        let (_meta, content) = grids[0].decode().expect("independent decoder should read it");
        assert_eq!(content, url);
    }
}
