// SPDX-License-Identifier: MPL-2.0
//! URL input row: text field plus a paste/clear companion button.
//!
//! The companion button has exactly two modes derived from the field's
//! content: `Paste` while the field is empty, `Clear` once it holds text.
//! Validation runs on every edit and the result is kept in the state so
//! the parent can derive control enablement from it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::validation::{self, UrlStatus};
use iced::widget::{button, text, text_input, tooltip, Row, Text};
use iced::{Element, Length};

/// Mode of the companion button next to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Field is empty: offer to paste the clipboard into it.
    Paste,
    /// Field holds text: offer to wipe it.
    Clear,
}

/// State of the URL input row.
#[derive(Debug, Clone, Default)]
pub struct State {
    value: String,
    status: UrlStatus,
}

impl State {
    /// Create the state, optionally pre-filled (e.g. from a CLI argument).
    pub fn new(initial: Option<String>) -> Self {
        let value = initial.unwrap_or_default();
        let status = validation::check(&value);
        Self { value, status }
    }

    /// Current field text, exactly as typed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Validation status of the current text.
    pub fn status(&self) -> &UrlStatus {
        &self.status
    }

    /// Replaces the field text and revalidates (used for paste).
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.status = validation::check(&self.value);
    }

    /// Which mode the companion button is in.
    pub fn action(&self) -> FieldAction {
        if self.value.is_empty() {
            FieldAction::Paste
        } else {
            FieldAction::Clear
        }
    }
}

/// Contextual data needed to render the input row.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the input row.
#[derive(Debug, Clone)]
pub enum Message {
    ValueChanged(String),
    ActionPressed,
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// The field text changed (typed, cleared, or replaced).
    Edited,
    /// The paste button was pressed; the parent owns clipboard access.
    PasteRequested,
    /// Enter was pressed inside the field.
    SubmitRequested,
}

/// Process an input row message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ValueChanged(value) => {
            state.set_value(value);
            Event::Edited
        }
        Message::ActionPressed => match state.action() {
            FieldAction::Paste => Event::PasteRequested,
            FieldAction::Clear => {
                state.set_value(String::new());
                Event::Edited
            }
        },
        Message::Submitted => Event::SubmitRequested,
    }
}

/// Render the input row.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("url-input-placeholder"), ctx.state.value())
        .on_input(Message::ValueChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let (label_key, tooltip_key) = match ctx.state.action() {
        FieldAction::Paste => ("button-paste", "tooltip-paste"),
        FieldAction::Clear => ("button-clear", "tooltip-clear"),
    };

    let action_button = tooltip(
        button(text(ctx.i18n.tr(label_key)).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .on_press(Message::ActionPressed),
        Text::new(ctx.i18n.tr(tooltip_key)).size(typography::BODY_SM),
        tooltip::Position::Bottom,
    )
    .gap(4);

    Row::new()
        .spacing(spacing::XS)
        .push(input)
        .push(action_button)
        .into()
}
