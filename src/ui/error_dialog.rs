// SPDX-License-Identifier: MPL-2.0
//! Modal error dialog for generation and save failures.
//!
//! Rendered as a stack layer over the main view: a translucent backdrop
//! that dismisses on click, with the dialog card centered on top. Invalid
//! input never reaches this dialog; it stays in the status line.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::theming;
use iced::widget::{button, center, container, mouse_area, opaque, text, Column, Container, Row};
use iced::{Background, Border, Element, Length, Theme};

/// An error held up for explicit acknowledgement.
#[derive(Debug, Clone)]
pub struct ErrorDialog {
    error: Error,
}

impl ErrorDialog {
    pub fn new(error: Error) -> Self {
        Self { error }
    }

    /// Fluent key for the dialog title, by failure family.
    pub fn title_key(&self) -> &'static str {
        match self.error {
            Error::Encode(_) => "error-dialog-generate-title",
            Error::Io(_) | Error::Config(_) => "error-dialog-save-title",
        }
    }

    /// Localized dialog body, details substituted in.
    pub fn message(&self, i18n: &I18n) -> String {
        let args = self.error.i18n_args();
        let refs: Vec<(&str, &str)> = args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        i18n.tr_with_args(self.error.i18n_key(), &refs)
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    Dismissed,
}

/// Contextual data needed to render the dialog layer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dialog: &'a ErrorDialog,
}

/// Render the full modal layer (backdrop plus centered card).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr(ctx.dialog.title_key()))
        .size(typography::TITLE_SM)
        .color(theming::error_text_color());

    let message = text(ctx.dialog.message(ctx.i18n)).size(typography::BODY);

    let dismiss_button = button(text(ctx.i18n.tr("button-dismiss")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::Dismissed);

    let button_row = Row::new()
        .width(Length::Fill)
        .push(iced::widget::space::horizontal())
        .push(dismiss_button);

    let card: Container<'a, Message> = container(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(message)
            .push(button_row),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    });

    // The card is opaque so clicks on it stay there; clicks on the
    // backdrop around it dismiss the dialog.
    let backdrop = mouse_area(
        center(opaque(card)).style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(theming::modal_backdrop_color())),
            ..Default::default()
        }),
    )
    .on_press(Message::Dismissed);

    opaque(backdrop)
}
