// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that `App::update`
//! dispatches to. Handlers receive an [`UpdateContext`] of mutable references
//! into the application state instead of the whole `App`, which keeps each
//! handler's reach explicit.

use crate::config::{self, Config};
use crate::error::Error;
use crate::qr::{self, export, QrImage};
use crate::ui::error_dialog::{self, ErrorDialog};
use crate::ui::status_bar::StatusMessage;
use crate::ui::url_entry::{self, Event as UrlEntryEvent};
use crate::validation::UrlStatus;
use iced::Task;
use std::path::PathBuf;

use super::Message;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub url_entry: &'a mut url_entry::State,
    pub qr_image: &'a mut Option<QrImage>,
    pub generated_from: &'a mut Option<String>,
    pub status: &'a mut StatusMessage,
    pub error_dialog: &'a mut Option<ErrorDialog>,
}

/// Status line for a given input state.
///
/// `generated` is only true while the preview still encodes the displayed
/// text, in which case the generation confirmation outranks the plain
/// "looks valid" message.
pub fn status_for_input(url_status: &UrlStatus, generated: bool) -> StatusMessage {
    if generated {
        return StatusMessage::success("status-generated");
    }
    match url_status {
        UrlStatus::Empty => StatusMessage::neutral("status-empty-prompt"),
        UrlStatus::Invalid(reason) => StatusMessage::error(reason.i18n_key()),
        UrlStatus::Valid(_) => StatusMessage::success("status-url-valid"),
    }
}

/// Handles input row messages.
pub fn handle_url_entry(ctx: &mut UpdateContext<'_>, message: url_entry::Message) -> Task<Message> {
    match url_entry::update(ctx.url_entry, message) {
        UrlEntryEvent::Edited => {
            apply_edit(ctx);
            Task::none()
        }
        UrlEntryEvent::PasteRequested => iced::clipboard::read().map(Message::ClipboardRead),
        UrlEntryEvent::SubmitRequested => handle_generate(ctx),
    }
}

/// Reconciles state after the field text changed.
///
/// A preview only stays alive while the field shows exactly the text it
/// encodes; any divergence drops it, which in turn disables saving.
fn apply_edit(ctx: &mut UpdateContext<'_>) {
    if ctx.generated_from.as_deref() != Some(ctx.url_entry.value()) {
        *ctx.qr_image = None;
        *ctx.generated_from = None;
    }
    *ctx.status = status_for_input(ctx.url_entry.status(), ctx.generated_from.is_some());
}

/// Handles a generate request (button press or Enter on a valid URL).
///
/// Generating with unchanged text is allowed and deterministic, so this
/// never checks whether a preview already exists. With invalid or empty
/// input it is a no-op (the button is disabled in that case anyway).
pub fn handle_generate(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(checked) = ctx.url_entry.status().as_valid() else {
        return Task::none();
    };

    match qr::generate(checked.raw()) {
        Ok(image) => {
            *ctx.qr_image = Some(image);
            *ctx.generated_from = Some(checked.raw().to_string());
            *ctx.status = StatusMessage::success("status-generated");
        }
        Err(error) => {
            *ctx.status = StatusMessage::error("status-encode-failed");
            *ctx.error_dialog = Some(ErrorDialog::new(error));
        }
    }
    Task::none()
}

/// Handles clipboard contents arriving for the paste action.
pub fn handle_clipboard(ctx: &mut UpdateContext<'_>, contents: Option<String>) -> Task<Message> {
    if let Some(text) = contents {
        if !text.is_empty() {
            ctx.url_entry.set_value(text);
            apply_edit(ctx);
        }
    }
    Task::none()
}

/// Opens the save dialog with a host-derived default filename.
pub fn handle_save_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.qr_image.is_none() {
        return Task::none();
    }
    // A live preview implies the displayed text is the validated URL it
    // was generated from, so the host is available here.
    let Some(checked) = ctx.url_entry.status().as_valid() else {
        return Task::none();
    };

    let filename = export::default_filename(checked.host());
    let directory = ctx
        .config
        .last_save_directory
        .clone()
        .filter(|dir| dir.exists())
        .unwrap_or_else(export::default_directory);

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter(export::PNG_FILTER.0, export::PNG_FILTER.1);

            if directory.exists() {
                dialog = dialog.set_directory(&directory);
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Handles the save dialog outcome by writing the PNG off the UI thread.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled; nothing changes.
        return Task::none();
    };
    let Some(qr_image) = ctx.qr_image.as_ref() else {
        return Task::none();
    };

    let path = export::ensure_png_extension(path);
    let pixels = qr_image.pixels();

    Task::perform(
        async move {
            let written =
                tokio::task::spawn_blocking(move || export::save_png(&pixels, &path).map(|()| path));
            match written.await {
                Ok(result) => result,
                Err(join_error) => Err(Error::Io(join_error.to_string())),
            }
        },
        Message::SaveCompleted,
    )
}

/// Handles the PNG write outcome.
pub fn handle_save_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            *ctx.status = StatusMessage::success("status-saved")
                .with_args(vec![("path", path.display().to_string())]);

            // Remember the directory for the next save dialog.
            if let Some(parent) = path.parent() {
                ctx.config.last_save_directory = Some(parent.to_path_buf());
                if let Err(error) = config::save(ctx.config) {
                    eprintln!("Warning: failed to persist settings: {}", error);
                }
            }
        }
        Err(error) => {
            *ctx.status = StatusMessage::error("status-save-failed");
            *ctx.error_dialog = Some(ErrorDialog::new(error));
        }
    }
    Task::none()
}

/// Handles error dialog messages.
pub fn handle_error_dialog(
    ctx: &mut UpdateContext<'_>,
    message: error_dialog::Message,
) -> Task<Message> {
    match message {
        error_dialog::Message::Dismissed => {
            *ctx.error_dialog = None;
        }
    }
    Task::none()
}
