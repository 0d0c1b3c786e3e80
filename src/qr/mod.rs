// SPDX-License-Identifier: MPL-2.0
//! QR symbol generation and PNG export.

pub mod encoder;
pub mod export;

pub use encoder::{generate, QrImage};
