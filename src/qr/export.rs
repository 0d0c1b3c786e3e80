// SPDX-License-Identifier: MPL-2.0
//! Saving generated QR bitmaps as PNG files.
//!
//! Covers the default filename/directory proposal for the save dialog,
//! the `.png` suffix rule for user-chosen names, and the actual write.

use crate::error::Result;
use image_rs::ImageFormat;
use std::path::{Path, PathBuf};

/// Save-dialog file filter. The app only ever writes PNG.
pub const PNG_FILTER: (&str, &[&str]) = ("PNG Image", &["png"]);

/// Builds the proposed filename for a URL host:
/// `qr_code_<host-without-www>.png`, where a single leading `www.`
/// prefix is dropped (`www.example.com` → `example.com`).
#[must_use]
pub fn default_filename(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    format!("qr_code_{host}.png")
}

/// Proposes the starting directory for the save dialog: the user's
/// downloads directory when it exists, else the home directory, else
/// the current directory.
#[must_use]
pub fn default_directory() -> PathBuf {
    dirs::download_dir()
        .filter(|dir| dir.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Appends `.png` unless the path already carries that extension
/// (case-insensitive). A name like `qr.jpg` becomes `qr.jpg.png`,
/// since the written bytes are always PNG.
#[must_use]
pub fn ensure_png_extension(path: PathBuf) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".png");
        PathBuf::from(raw)
    }
}

/// Writes the bitmap to `path` in PNG format.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the path is unwritable or
/// encoding fails.
pub fn save_png(pixels: &image_rs::GrayImage, path: &Path) -> Result<()> {
    pixels.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
