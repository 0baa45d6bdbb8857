// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering the controller's current toast.
//!
//! The overlay draws nothing while the toast is hidden. When visible, it
//! draws a card with the severity icon and the localized message, anchored
//! to the bottom center of the host view. Tapping the card dismisses it.
//!
//! The overlay subscribes to the toast state on [`ToastOverlay::mount`] only
//! to catch the hidden-to-visible edge, which starts a short fade-in.

use super::controller::{Message, ToastController};
use super::state::ListenerId;
use crate::config::ToastConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, mouse_area, text, Container, Row, Stack, Text};
use iced::{alignment, mouse, window, Color, Element, Length, Padding, Subscription, Theme};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// View-layer adapter for a [`ToastController`].
#[derive(Debug)]
pub struct ToastOverlay {
    listener: ListenerId,
    /// When the toast last became visible; `None` while hidden.
    shown_at: Rc<Cell<Option<Instant>>>,
    fade: Duration,
    bottom_offset: f32,
}

impl ToastOverlay {
    /// Attaches an overlay to `controller`.
    pub fn mount(controller: &mut ToastController, config: &ToastConfig) -> Self {
        let shown_at = Rc::new(Cell::new(None));
        let edge = Rc::clone(&shown_at);
        let mut was_visible = controller.is_visible();

        let listener = controller.subscribe(move |toast| {
            if toast.visible && !was_visible {
                edge.set(Some(Instant::now()));
            } else if !toast.visible {
                edge.set(None);
            }
            was_visible = toast.visible;
        });

        Self {
            listener,
            shown_at,
            fade: config.fade(),
            bottom_offset: config.bottom_offset(),
        }
    }

    /// Detaches the overlay from `controller`.
    pub fn unmount(self, controller: &mut ToastController) {
        controller.unsubscribe(self.listener);
    }

    /// Returns the card opacity at `now`, from 0.0 at the visible edge to
    /// 1.0 once the fade has completed.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.shown_at.get() {
            Some(shown_at) if !self.fade.is_zero() => {
                let elapsed = now.saturating_duration_since(shown_at);
                (elapsed.as_secs_f32() / self.fade.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Returns whether a fade-in is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity_at(Instant::now()) < 1.0
    }

    /// Requests redraws while fading in.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(|_| Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Renders the current toast, or an empty element when hidden.
    pub fn view<'a>(&self, controller: &'a ToastController, i18n: &I18n) -> Element<'a, Message> {
        let toast = controller.toast();
        if !toast.visible {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let alpha = self.opacity_at(Instant::now());
        let (accent, icon) = toast.severity.appearance();

        let icon_widget = icons::tinted(icon, sizing::ICON_MD, with_alpha(accent, alpha));
        let message_widget = Text::new(toast.message.resolve(i18n))
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        // Layout: [icon] [message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon_widget)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        let card = Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding([spacing::SM, spacing::MD])
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

        let tappable = mouse_area(card)
            .on_press(Message::Dismiss)
            .interaction(mouse::Interaction::Pointer);

        Container::new(tappable)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: spacing::MD,
                bottom: self.bottom_offset,
                left: spacing::MD,
            })
            .into()
    }
}

/// Installs a toast overlay over a view.
///
/// ```ignore
/// let screen = column![...].with_toast(&self.overlay, &self.toasts, &self.i18n, Message::Toast);
/// ```
pub trait WithToast<'a, M> {
    /// Stacks the overlay above `self`, mapping toast messages with `map`.
    fn with_toast(
        self,
        overlay: &ToastOverlay,
        controller: &'a ToastController,
        i18n: &I18n,
        map: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M>;
}

impl<'a, M, T> WithToast<'a, M> for T
where
    M: 'a,
    T: Into<Element<'a, M>>,
{
    fn with_toast(
        self,
        overlay: &ToastOverlay,
        controller: &'a ToastController,
        i18n: &I18n,
        map: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self)
            .push(overlay.view(controller, i18n).map(map))
            .into()
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(with_alpha(bg_color, alpha))),
        border: iced::Border {
            color: with_alpha(accent, opacity::ACCENT_BORDER * alpha),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, alpha),
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::toast::Severity;

    fn config_with_fade(millis: u64) -> ToastConfig {
        ToastConfig {
            fade_millis: millis,
            ..ToastConfig::default()
        }
    }

    #[test]
    fn mount_and_unmount_manage_the_listener() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &ToastConfig::default());
        assert_eq!(controller.state().listener_count(), 1);

        overlay.unmount(&mut controller);
        assert_eq!(controller.state().listener_count(), 0);
    }

    #[test]
    fn hidden_toast_is_not_animating() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &config_with_fade(300));
        assert!(!overlay.is_animating());
        assert_eq!(overlay.opacity_at(Instant::now()), 1.0);
    }

    #[test]
    fn show_edge_starts_fade_and_hide_clears_it() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &config_with_fade(2_000));

        controller.present("x", Severity::Info, None);
        assert!(overlay.is_animating());
        let after_fade = Instant::now() + Duration::from_millis(2_000);
        assert_eq!(overlay.opacity_at(after_fade), 1.0);

        controller.hide();
        assert!(!overlay.is_animating());
    }

    #[test]
    fn reshow_while_visible_does_not_restart_fade() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &config_with_fade(2_000));

        controller.present("x", Severity::Info, None);
        let first_edge = overlay.shown_at.get();
        controller.present("y", Severity::Error, None);

        assert_eq!(overlay.shown_at.get(), first_edge);
    }

    #[test]
    fn zero_fade_is_never_animating() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &config_with_fade(0));

        controller.present("x", Severity::Info, None);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn toast_container_style_uses_faded_accent() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme, palette::SUCCESS_500, 1.0);

        assert_eq!(
            style.border.color,
            Color {
                a: opacity::ACCENT_BORDER,
                ..palette::SUCCESS_500
            }
        );
        assert!(style.background.is_some());
    }

    #[test]
    fn toast_container_style_scales_with_opacity() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, palette::ERROR_500, 0.0);

        assert_eq!(style.border.color.a, 0.0);
        assert_eq!(style.shadow.color.a, 0.0);
    }

    #[test]
    fn view_builds_for_both_states() {
        let mut controller = ToastController::default();
        let overlay = ToastOverlay::mount(&mut controller, &ToastConfig::default());
        let i18n = I18n::default();

        {
            let _hidden = overlay.view(&controller, &i18n);
            assert!(!controller.is_visible());
            assert!(!overlay.is_animating());
        }

        controller.present("x", Severity::Warning, None);
        let _visible = overlay.view(&controller, &i18n);
        assert!(controller.is_visible());
        assert!(overlay.opacity_at(Instant::now()) < 1.0);
    }
}
