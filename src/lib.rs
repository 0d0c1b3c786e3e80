// SPDX-License-Identifier: MPL-2.0
//! `iced_qr` is a small URL-to-QR-code generator built with the Iced GUI
//! framework.
//!
//! Type or paste a URL, generate a preview of the QR symbol, and save it
//! as a PNG. The crate demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_qr/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod qr;
pub mod ui;
pub mod validation;
