// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::{Severity, ToastController, ToastOverlay, WithToast};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a ToastController,
    pub overlay: &'a ToastOverlay,
}

/// Renders the demo screen with the toast overlay attached.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let severity_buttons = [
        (Severity::Success, "demo-button-success"),
        (Severity::Error, "demo-button-error"),
        (Severity::Warning, "demo-button-warning"),
        (Severity::Info, "demo-button-info"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (severity, key)| {
        row.push(
            button(Text::new(i18n.tr(key)))
                .on_press(Message::Show(severity))
                .style(button::primary),
        )
    })
    .push(
        button(Text::new(i18n.tr("demo-button-hide")))
            .on_press(Message::Hide)
            .style(button::secondary),
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(severity_buttons)
        .push(Text::new(i18n.tr("demo-hint")).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .with_toast(ctx.overlay, ctx.toasts, i18n, Message::Toast)
}
