// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::error_dialog;
use crate::ui::url_entry;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    UrlEntry(url_entry::Message),
    ErrorDialog(error_dialog::Message),
    /// The generate button was pressed (or Enter submitted a valid URL).
    GeneratePressed,
    /// Clipboard contents arrived for the paste action.
    ClipboardRead(Option<String>),
    /// The save button was pressed; opens the file dialog.
    SaveRequested,
    /// Result from the save dialog (`None` when cancelled).
    SaveDialogResult(Option<PathBuf>),
    /// Result from writing the PNG to disk.
    SaveCompleted(Result<PathBuf, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `de`, `en-US`).
    pub lang: Option<String>,
    /// Optional URL to pre-fill the input field with.
    pub url: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    /// Takes precedence over `ICED_QR_I18N_DIR` environment variable.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_QR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
