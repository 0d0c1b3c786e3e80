// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the single-window UI.
//!
//! The `App` struct wires together the input row, the preview, and the
//! status line, and translates messages into side effects like clipboard
//! reads, the save dialog, and config persistence. This file intentionally
//! keeps policy decisions (window sizing, which events refresh the status
//! line, when the stale preview is dropped) close to the main update loop
//! so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::qr::QrImage;
use crate::ui::error_dialog::ErrorDialog;
use crate::ui::status_bar::StatusMessage;
use crate::ui::theming::ThemeMode;
use crate::ui::url_entry;
use crate::validation::UrlStatus;
use iced::{window, Element, Task, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Coarse UI state, fully derived from the concrete fields.
///
/// The window is always in exactly one of these; nothing stores the
/// value, so it cannot drift from the state it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    /// Nothing typed; generation disabled with a neutral prompt.
    Empty,
    /// Typed text fails validation.
    Invalid,
    /// Valid URL without a matching preview.
    ValidIdle,
    /// Preview matches the displayed text; saving enabled.
    Generated,
    /// Modal error dialog open, blocking everything underneath.
    Error,
}

/// Root Iced application state bridging the UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    url_entry: url_entry::State,
    /// Rendered QR bitmap, present only while it matches the input text.
    qr_image: Option<QrImage>,
    /// The exact text `qr_image` was generated from.
    generated_from: Option<String>,
    /// Current status-line message (validation feedback and event results).
    status: StatusMessage,
    /// Modal error dialog, blocking the window while present.
    error_dialog: Option<ErrorDialog>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("url", &self.url_entry.value())
            .field("has_preview", &self.qr_image.is_some())
            .field("dialog_open", &self.error_dialog.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 440;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::System,
            url_entry: url_entry::State::default(),
            qr_image: None,
            generated_from: None,
            status: StatusMessage::default(),
            error_dialog: None,
        }
    }
}

impl App {
    /// Initializes application state from persisted config and `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            eprintln!("Warning: {}", i18n.tr(key));
        }

        // The resolver quietly falls back for unknown locales; surface
        // that on stderr when the request came from the command line.
        if let Some(requested) = flags.lang.as_deref() {
            let served = requested
                .parse::<LanguageIdentifier>()
                .map(|lang| lang == *i18n.current_locale())
                .unwrap_or(false);
            if !served {
                eprintln!(
                    "Warning: locale '{}' is not available; using '{}'",
                    requested,
                    i18n.current_locale()
                );
            }
        }

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode;
        app.url_entry = url_entry::State::new(flags.url);
        app.status = update::status_for_input(app.url_entry.status(), false);
        app.config = config;

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            url_entry: &mut self.url_entry,
            qr_image: &mut self.qr_image,
            generated_from: &mut self.generated_from,
            status: &mut self.status,
            error_dialog: &mut self.error_dialog,
        };

        match message {
            Message::UrlEntry(entry_message) => update::handle_url_entry(&mut ctx, entry_message),
            Message::GeneratePressed => update::handle_generate(&mut ctx),
            Message::ClipboardRead(contents) => update::handle_clipboard(&mut ctx, contents),
            Message::SaveRequested => update::handle_save_requested(&mut ctx),
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::SaveCompleted(result) => update::handle_save_completed(&mut ctx, result),
            Message::ErrorDialog(dialog_message) => {
                update::handle_error_dialog(&mut ctx, dialog_message)
            }
        }
    }

    /// Derives the coarse UI state.
    ///
    /// A live `qr_image` implies the preview matches the displayed text
    /// (edits drop it otherwise), so `Valid` plus an image is `Generated`.
    pub fn ui_state(&self) -> UiState {
        if self.error_dialog.is_some() {
            return UiState::Error;
        }
        match self.url_entry.status() {
            UrlStatus::Empty => UiState::Empty,
            UrlStatus::Invalid(_) => UiState::Invalid,
            UrlStatus::Valid(_) if self.qr_image.is_some() => UiState::Generated,
            UrlStatus::Valid(_) => UiState::ValidIdle,
        }
    }

    fn generate_enabled(&self) -> bool {
        self.url_entry.status().is_valid()
    }

    fn save_enabled(&self) -> bool {
        self.qr_image.is_some()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            url_entry: &self.url_entry,
            qr_image: self.qr_image.as_ref(),
            status: &self.status,
            error_dialog: self.error_dialog.as_ref(),
            generate_enabled: self.generate_enabled(),
            save_enabled: self.save_enabled(),
        })
    }
}
