// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for toast messages.
//!
//! Toast text is stored as Fluent message keys and resolved at render time,
//! so switching the locale re-labels the visible toast without re-showing it.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
