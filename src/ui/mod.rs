// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - Toast notification controller and overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG glyphs

pub mod design_tokens;
pub mod icons;
pub mod toast;
