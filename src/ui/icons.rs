// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the toast severity glyphs.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`
//! and tinted at render time, so a single asset serves every theme. Handles
//! are cached using `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the severity that uses them (e.g., `CheckCircle` not `Success`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Identifier of an embedded glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Filled circle with a checkmark.
    CheckCircle,
    /// Filled circle with a cross.
    XCircle,
    /// Filled triangle with an exclamation mark.
    ExclamationTriangle,
    /// Filled circle with a lowercase "i".
    InfoCircle,
}

impl Icon {
    /// Stable token naming the glyph.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::XCircle => "x-circle",
            Icon::ExclamationTriangle => "exclamation-triangle",
            Icon::InfoCircle => "info-circle",
        }
    }

    /// Returns the cached SVG handle for this glyph.
    #[must_use]
    pub fn handle(self) -> Handle {
        match self {
            Icon::CheckCircle => check_circle(),
            Icon::XCircle => x_circle(),
            Icon::ExclamationTriangle => exclamation_triangle(),
            Icon::InfoCircle => info_circle(),
        }
    }
}

/// Macro to define an icon handle function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal) => {
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(check_circle, "check-circle.svg");
define_icon!(x_circle, "x-circle.svg");
define_icon!(exclamation_triangle, "exclamation-triangle.svg");
define_icon!(info_circle, "info-circle.svg");

/// Renders `icon` as a square of `size` pixels tinted with `color`.
pub fn tinted<'a>(icon: Icon, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 4] = [
        Icon::CheckCircle,
        Icon::XCircle,
        Icon::ExclamationTriangle,
        Icon::InfoCircle,
    ];

    #[test]
    fn icon_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn handles_are_cached() {
        for icon in ALL {
            assert_eq!(icon.handle().id(), icon.handle().id());
        }
    }
}
