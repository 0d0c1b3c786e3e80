// SPDX-License-Identifier: MPL-2.0
//! Fixed-size preview surface for the generated QR symbol.
//!
//! The box keeps a constant footprint so the window layout does not jump
//! between QR versions; the symbol is scaled down to fit when it exceeds
//! the box, preserving its square aspect ratio.

use crate::i18n::fluent::I18n;
use crate::qr::QrImage;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::theming;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, text, Container};
use iced::{Border, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the preview box.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub qr_image: Option<&'a QrImage>,
}

/// Render the preview box.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.qr_image {
        Some(qr_image) => image::Image::new(qr_image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(ctx.i18n.tr("preview-placeholder"))
            .size(typography::BODY)
            .color(theming::muted_text_color())
            .into(),
    };

    let frame: Container<'a, Message> = container(content)
        .width(Length::Fixed(sizing::PREVIEW_BOX))
        .height(Length::Fixed(sizing::PREVIEW_BOX))
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(palette::WHITE.into()),
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        });

    frame.into()
}
