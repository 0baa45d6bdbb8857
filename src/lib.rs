// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a single-toast notification widget for the Iced GUI framework.
//!
//! It provides a controller that shows one toast at a time and hides it after
//! a timer, an overlay that renders the toast over any view, and Fluent-based
//! localization of toast messages.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
