// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the single window: input row, generate button, preview box,
//! save button, and the status line, with the error dialog stacked on top
//! when present. Buttons without an `on_press` handler render disabled,
//! which is how enablement reaches the widget tree.

use crate::i18n::fluent::I18n;
use crate::qr::QrImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::error_dialog::{self, ErrorDialog};
use crate::ui::preview;
use crate::ui::status_bar::{self, StatusMessage};
use crate::ui::url_entry;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Stack};
use iced::{Element, Length};

use super::Message;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub url_entry: &'a url_entry::State,
    pub qr_image: Option<&'a QrImage>,
    pub status: &'a StatusMessage,
    pub error_dialog: Option<&'a ErrorDialog>,
    pub generate_enabled: bool,
    pub save_enabled: bool,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let url_row = url_entry::view(url_entry::ViewContext {
        i18n: ctx.i18n,
        state: ctx.url_entry,
    })
    .map(Message::UrlEntry);

    let generate_button = action_button(
        ctx.i18n.tr("button-generate"),
        ctx.generate_enabled.then_some(Message::GeneratePressed),
    );

    let preview_box: Element<'_, Message> = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        qr_image: ctx.qr_image,
    });

    let save_button = action_button(
        ctx.i18n.tr("button-save"),
        ctx.save_enabled.then_some(Message::SaveRequested),
    );

    let status_line: Element<'_, Message> = status_bar::view(status_bar::ViewContext {
        i18n: ctx.i18n,
        status: ctx.status,
    });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(url_row)
        .push(generate_button)
        .push(preview_box)
        .push(save_button)
        .push(status_line);

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match ctx.error_dialog {
        Some(dialog) => {
            let overlay = error_dialog::view(error_dialog::ViewContext {
                i18n: ctx.i18n,
                dialog,
            })
            .map(Message::ErrorDialog);

            Stack::new().push(base).push(overlay).into()
        }
        None => base,
    }
}

/// Full-width action button; disabled while `on_press` is `None`.
fn action_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let label = text(label)
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let base = button(label)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD]);

    let base = if let Some(message) = on_press {
        base.on_press(message)
    } else {
        base
    };

    base.into()
}
