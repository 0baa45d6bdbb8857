// SPDX-License-Identifier: MPL-2.0
//! Single-toast notification system for user feedback.
//!
//! A toast appears briefly over the main content to confirm an action or
//! report a problem, then hides itself. Only one toast exists at a time:
//! showing a new one replaces the visible one and restarts its countdown.
//!
//! # Components
//!
//! - [`controller`] - `ToastController`, the only way to show or hide the toast
//! - [`state`] - Observable toast state with listeners
//! - [`timer`] - Token-guarded deferred hide
//! - [`overlay`] - `ToastOverlay` view adapter and the `with_toast` attachment
//! - [`severity`] - Severity levels and their color/icon mapping
//! - [`text`] - Localizable toast message
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::toast::{Severity, ToastController, ToastOverlay, ToastText, WithToast};
//!
//! // At the application root
//! let mut toasts = ToastController::new(&config.toast);
//! let overlay = ToastOverlay::mount(&mut toasts, &config.toast);
//!
//! // In update: show, and hand the returned task to Iced
//! return toasts
//!     .show_success(ToastText::key("settings-saved"), None)
//!     .map(Message::Toast);
//!
//! // In view
//! content.with_toast(&overlay, &toasts, &i18n, Message::Toast)
//! ```

pub mod controller;
pub mod overlay;
pub mod severity;
pub mod state;
pub mod text;
pub mod timer;

pub use controller::{Message, ToastController};
pub use overlay::{ToastOverlay, WithToast};
pub use severity::Severity;
pub use state::{ListenerId, Toast, ToastState};
pub use text::ToastText;
pub use timer::{Deadline, TimerToken};
