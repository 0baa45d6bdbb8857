// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::toast::{self, Severity};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample toast of the given severity.
    Show(Severity),
    /// Hide the toast immediately.
    Hide,
    /// Forwarded toast message (expiry, tap, animation frame).
    Toast(toast::Message),
}

/// Runtime flags passed from `main` to `App::new`.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale requested with `--lang`.
    pub lang: Option<String>,
}
