// SPDX-License-Identifier: MPL-2.0
//! Toast duration domain type.
//!
//! This module provides a type-safe wrapper for the time a toast stays
//! visible before the deferred hide fires.

use super::defaults::DEFAULT_TOAST_DURATION_SECS;
use std::time::Duration;

/// Auto-hide delay for a toast.
///
/// Per-call durations are taken as given. Only the configured default is
/// bounded (see [`ToastConfig::default_duration`](super::ToastConfig::default_duration)).
///
/// # Example
///
/// ```
/// use iced_toast::config::ToastDuration;
/// use std::time::Duration;
///
/// let duration = ToastDuration::from_secs(120.0);
/// assert_eq!(duration.as_duration(), Duration::from_secs(120));
///
/// // Negative input maps to an immediate hide, NaN to the default
/// assert_eq!(ToastDuration::from_secs(-1.0).as_duration(), Duration::ZERO);
/// assert_eq!(ToastDuration::from_secs(f32::NAN), ToastDuration::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// Creates a duration from seconds.
    ///
    /// NaN falls back to the default, negative values map to zero and
    /// values too large for `Duration` saturate to `Duration::MAX`.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs.is_nan() {
            Self::default()
        } else if secs <= 0.0 {
            Self(Duration::ZERO)
        } else {
            Self(Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX))
        }
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0.as_secs_f32()
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(Duration::from_secs_f32(DEFAULT_TOAST_DURATION_SECS))
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(ToastDuration::default().secs(), 3.0);
        assert_eq!(
            ToastDuration::default().as_duration(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn from_secs_is_not_clamped() {
        assert_eq!(
            ToastDuration::from_secs(0.1).as_duration(),
            Duration::from_secs_f32(0.1)
        );
        assert_eq!(
            ToastDuration::from_secs(1_000.0).as_duration(),
            Duration::from_secs(1_000)
        );
    }

    #[test]
    fn out_of_domain_input_is_mapped() {
        assert_eq!(ToastDuration::from_secs(f32::NAN), ToastDuration::default());
        assert_eq!(
            ToastDuration::from_secs(-2.0).as_duration(),
            Duration::ZERO
        );
        assert_eq!(
            ToastDuration::from_secs(f32::NEG_INFINITY).as_duration(),
            Duration::ZERO
        );
        assert_eq!(
            ToastDuration::from_secs(f32::INFINITY).as_duration(),
            Duration::MAX
        );
    }

    #[test]
    fn converts_from_std_duration_exactly() {
        let duration = ToastDuration::from(Duration::from_millis(100));
        assert_eq!(duration.as_duration(), Duration::from_millis(100));

        let duration = ToastDuration::from(Duration::from_millis(1_500));
        assert_eq!(duration.secs(), 1.5);
    }
}
