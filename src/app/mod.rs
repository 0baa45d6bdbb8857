// SPDX-License-Identifier: MPL-2.0
//! Demo application root wiring the toast controller into an Iced program.
//!
//! The `App` owns the controller and its overlay; views receive them by
//! reference. Nothing toast-related is global.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::toast::{Severity, ToastController, ToastOverlay, ToastText};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    toasts: ToastController,
    overlay: ToastOverlay,
    /// Number of toasts shown so far, interpolated into the info sample.
    shown: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("toast_visible", &self.toasts.is_visible())
            .field("shown", &self.shown)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config, resolves the locale and mounts the toast overlay.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Config::default()
        });
        (Self::with_config(flags, &config), Task::none())
    }

    /// Builds the app from an already-loaded config.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let mut toasts = ToastController::new(&config.toast);
        let overlay = ToastOverlay::mount(&mut toasts, &config.toast);
        tracing::info!(locale = %i18n.current_locale(), "toast demo ready");

        Self {
            i18n,
            toasts,
            overlay,
            shown: 0,
        }
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(severity) => {
                self.shown += 1;
                self.toasts
                    .show(sample_text(severity, self.shown), severity, None)
                    .map(Message::Toast)
            }
            Message::Hide => {
                self.toasts.hide();
                Task::none()
            }
            Message::Toast(toast_message) => {
                self.toasts.update(toast_message).map(Message::Toast)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.toasts,
            overlay: &self.overlay,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.overlay.subscription().map(Message::Toast)
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastController {
        &self.toasts
    }
}

fn sample_text(severity: Severity, shown: u32) -> ToastText {
    match severity {
        Severity::Success => ToastText::key("toast-demo-success"),
        Severity::Error => ToastText::key("toast-demo-error"),
        Severity::Warning => ToastText::key("toast-demo-warning"),
        Severity::Info => ToastText::key("toast-demo-info").with_arg("count", shown.to_string()),
    }
}
