// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Duration**: Auto-hide delay bounds for toasts
//! - **Presentation**: Fade-in length and anchoring offset

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default time a toast stays visible before auto-hiding (in seconds).
pub const DEFAULT_TOAST_DURATION_SECS: f32 = 3.0;

/// Lower bound for the configured default duration (in seconds).
pub const MIN_TOAST_DURATION_SECS: f32 = 0.5;

/// Upper bound for the configured default duration (in seconds).
pub const MAX_TOAST_DURATION_SECS: f32 = 60.0;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default fade-in length when a toast appears (in milliseconds).
pub const DEFAULT_FADE_MILLIS: u64 = 300;

/// Maximum fade-in length (in milliseconds).
pub const MAX_FADE_MILLIS: u64 = 2_000;

/// Default distance between the toast and the bottom edge (in pixels).
pub const DEFAULT_BOTTOM_OFFSET: f32 = 50.0;
