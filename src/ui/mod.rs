// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`url_entry`] - URL input field with its paste/clear companion button
//! - [`preview`] - Fixed-size preview surface for the generated QR symbol
//! - [`status_bar`] - Sticky inline status line with severity coloring
//! - [`error_dialog`] - Modal dialog for generation and save failures
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management and color helpers

pub mod design_tokens;
pub mod error_dialog;
pub mod preview;
pub mod status_bar;
pub mod theming;
pub mod url_entry;
