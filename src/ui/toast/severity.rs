// SPDX-License-Identifier: MPL-2.0
//! Severity levels and their visual mapping.
//!
//! The mapping is a total function over [`Severity`]: adding a variant only
//! requires extending the two `match` blocks below.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Icon;
use iced::Color;

/// Classification of a toast, driving its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully (green, check mark).
    Success,
    /// Operation failed (red, cross).
    Error,
    /// Something needs attention but nothing failed (orange, triangle).
    Warning,
    /// Neutral information (blue, "i").
    #[default]
    Info,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown next to the message.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Severity::Success => Icon::CheckCircle,
            Severity::Error => Icon::XCircle,
            Severity::Warning => Icon::ExclamationTriangle,
            Severity::Info => Icon::InfoCircle,
        }
    }

    /// Returns the `(color, icon)` pair used to render this severity.
    #[must_use]
    pub fn appearance(self) -> (Color, Icon) {
        (self.color(), self.icon())
    }
}
