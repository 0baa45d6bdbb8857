// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastController` is the only way to change the toast. It owns the
//! observable [`ToastState`] and the deferred-hide timer, and keeps them in
//! step: every `show` cancels the previous timer before scheduling a new
//! one, and every hide cancels the pending timer.

use super::severity::Severity;
use super::state::{ListenerId, Toast, ToastState};
use super::text::ToastText;
use super::timer::{self, Deadline, HideTimer, TimerToken};
use crate::config::{ToastConfig, ToastDuration};
use iced::task::{self, Task};
use std::fmt;

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A deferred hide elapsed.
    Expired(TimerToken),
    /// The user tapped the toast.
    Dismiss,
    /// Animation frame while the toast fades in. Changes nothing.
    Frame,
}

/// Single authoritative entry point for showing and hiding the toast.
pub struct ToastController {
    state: ToastState,
    timer: HideTimer,
    /// Abort handle of the task backing the live timer.
    pending: Option<task::Handle>,
    default_duration: ToastDuration,
}

impl fmt::Debug for ToastController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastController")
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("default_duration", &self.default_duration)
            .finish()
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new(&ToastConfig::default())
    }
}

impl ToastController {
    /// Creates a hidden controller using the configured default duration.
    #[must_use]
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            state: ToastState::new(),
            timer: HideTimer::new(),
            pending: None,
            default_duration: config.default_duration(),
        }
    }

    /// Shows a toast, replacing any visible one, and schedules its hide.
    ///
    /// `duration` falls back to the configured default (3 seconds unless
    /// overridden). The returned task must be handed to the Iced runtime; it
    /// yields [`Message::Expired`] when the duration elapses.
    pub fn show(
        &mut self,
        message: impl Into<ToastText>,
        severity: Severity,
        duration: Option<ToastDuration>,
    ) -> Task<Message> {
        let deadline = self.present(message, severity, duration);
        let (task, handle) =
            Task::perform(timer::expire_after(deadline), Message::Expired).abortable();
        self.pending = Some(handle);
        task
    }

    /// Like [`show`](Self::show), but returns the deadline instead of a task.
    ///
    /// For hosts that run their own timers: deliver
    /// `Message::Expired(deadline.token)` to [`update`](Self::update) once
    /// `deadline.duration` has elapsed.
    pub fn present(
        &mut self,
        message: impl Into<ToastText>,
        severity: Severity,
        duration: Option<ToastDuration>,
    ) -> Deadline {
        self.cancel_pending();

        let message = message.into();
        let duration = duration.unwrap_or(self.default_duration);
        if severity == Severity::Error {
            tracing::warn!(?message, "showing error toast");
        } else {
            tracing::debug!(?message, ?severity, "showing toast");
        }

        self.state.present(message, severity);
        let deadline = self.timer.schedule(duration.as_duration());
        tracing::trace!(token = ?deadline.token, secs = duration.secs(), "hide scheduled");
        deadline
    }

    /// Hides the toast immediately and cancels the pending hide.
    ///
    /// Safe to call when already hidden.
    pub fn hide(&mut self) {
        self.cancel_pending();
        if self.state.dismiss() {
            tracing::debug!("toast hidden");
        }
    }

    /// Shows a success toast.
    pub fn show_success(
        &mut self,
        message: impl Into<ToastText>,
        duration: Option<ToastDuration>,
    ) -> Task<Message> {
        self.show(message, Severity::Success, duration)
    }

    /// Shows an error toast.
    pub fn show_error(
        &mut self,
        message: impl Into<ToastText>,
        duration: Option<ToastDuration>,
    ) -> Task<Message> {
        self.show(message, Severity::Error, duration)
    }

    /// Shows a warning toast.
    pub fn show_warning(
        &mut self,
        message: impl Into<ToastText>,
        duration: Option<ToastDuration>,
    ) -> Task<Message> {
        self.show(message, Severity::Warning, duration)
    }

    /// Shows an info toast.
    pub fn show_info(
        &mut self,
        message: impl Into<ToastText>,
        duration: Option<ToastDuration>,
    ) -> Task<Message> {
        self.show(message, Severity::Info, duration)
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Expired(token) => {
                if self.timer.fire(token) {
                    self.pending = None;
                    if self.state.dismiss() {
                        tracing::debug!("toast expired");
                    }
                } else {
                    tracing::trace!(?token, "ignoring superseded hide");
                }
            }
            Message::Dismiss => self.hide(),
            Message::Frame => {}
        }
        Task::none()
    }

    /// Returns the current toast.
    #[must_use]
    pub fn toast(&self) -> &Toast {
        self.state.toast()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Returns whether a deferred hide is scheduled.
    #[must_use]
    pub fn has_pending_hide(&self) -> bool {
        self.timer.is_pending()
    }

    #[must_use]
    pub fn default_duration(&self) -> ToastDuration {
        self.default_duration
    }

    #[must_use]
    pub fn state(&self) -> &ToastState {
        &self.state
    }

    /// Registers a listener on the toast state.
    pub fn subscribe(&mut self, listener: impl FnMut(&Toast) + 'static) -> ListenerId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.state.unsubscribe(id)
    }

    fn cancel_pending(&mut self) {
        if self.timer.cancel() {
            tracing::trace!("pending hide cancelled");
        }
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn secs(value: f32) -> Option<ToastDuration> {
        Some(ToastDuration::from_secs(value))
    }

    #[test]
    fn new_controller_is_hidden() {
        let controller = ToastController::default();
        assert!(!controller.is_visible());
        assert!(!controller.has_pending_hide());
        assert_eq!(controller.default_duration(), ToastDuration::default());
    }

    #[test]
    fn present_shows_content_and_schedules_hide() {
        let mut controller = ToastController::default();
        let deadline = controller.present("Saved", Severity::Success, None);

        let toast = controller.toast();
        assert!(toast.visible);
        assert_eq!(toast.message, ToastText::literal("Saved"));
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(deadline.duration, Duration::from_secs(3));
        assert!(controller.has_pending_hide());
    }

    #[test]
    fn configured_default_duration_is_used() {
        let config = ToastConfig {
            default_duration_secs: 7.0,
            ..ToastConfig::default()
        };
        let mut controller = ToastController::new(&config);
        let deadline = controller.present("x", Severity::Info, None);
        assert_eq!(deadline.duration, Duration::from_secs(7));
    }

    #[test]
    fn expiry_hides_toast() {
        let mut controller = ToastController::default();
        let deadline = controller.present("x", Severity::Info, None);

        let _ = controller.update(Message::Expired(deadline.token));

        assert!(!controller.is_visible());
        assert!(!controller.has_pending_hide());
    }

    #[test]
    fn hide_when_hidden_stays_hidden() {
        let mut controller = ToastController::default();
        controller.hide();
        controller.hide();
        assert!(!controller.is_visible());
        assert!(!controller.has_pending_hide());
    }

    #[test]
    fn hide_before_expiry_suppresses_the_timer() {
        let mut controller = ToastController::default();
        let deadline = controller.present("x", Severity::Warning, secs(5.0));

        controller.hide();
        assert!(!controller.is_visible());

        // A re-show before the stale expiry arrives must survive it.
        let fresh = controller.present("y", Severity::Info, secs(5.0));
        let _ = controller.update(Message::Expired(deadline.token));
        assert!(controller.is_visible());
        assert_eq!(controller.toast().message, ToastText::literal("y"));

        let _ = controller.update(Message::Expired(fresh.token));
        assert!(!controller.is_visible());
    }

    #[test]
    fn reshow_replaces_content_and_supersedes_timer() {
        let mut controller = ToastController::default();
        let first = controller.present("m1", Severity::Info, secs(5.0));
        let second = controller.present("m2", Severity::Error, secs(3.0));

        let _ = controller.update(Message::Expired(first.token));
        assert!(controller.is_visible());
        assert_eq!(controller.toast().message, ToastText::literal("m2"));
        assert_eq!(controller.toast().severity, Severity::Error);

        let _ = controller.update(Message::Expired(second.token));
        assert!(!controller.is_visible());
    }

    #[test]
    fn tap_dismiss_hides_and_cancels_timer() {
        let mut controller = ToastController::default();
        let deadline = controller.present("x", Severity::Success, None);

        let _ = controller.update(Message::Dismiss);
        assert!(!controller.is_visible());
        assert!(!controller.has_pending_hide());

        let _ = controller.update(Message::Expired(deadline.token));
        assert!(!controller.is_visible());
    }

    #[test]
    fn per_call_duration_is_not_clamped() {
        let mut controller = ToastController::default();

        let long = Some(ToastDuration::from(Duration::from_secs(120)));
        let deadline = controller.present("x", Severity::Info, long);
        assert_eq!(deadline.duration, Duration::from_secs(120));

        let short = Some(ToastDuration::from(Duration::from_millis(100)));
        let deadline = controller.present("x", Severity::Info, short);
        assert_eq!(deadline.duration, Duration::from_millis(100));
    }

    #[test]
    fn pending_task_handle_follows_the_live_timer() {
        let mut controller = ToastController::default();
        assert!(controller.pending.is_none());

        let _task = controller.show("a", Severity::Info, None);
        let first = controller.pending.clone().expect("show stores a handle");

        controller.hide();
        assert!(controller.pending.is_none());
        assert!(first.is_aborted());

        let _task = controller.show("b", Severity::Info, None);
        let second = controller.pending.clone().expect("show stores a handle");
        let _task = controller.show("c", Severity::Info, None);
        assert!(second.is_aborted());
        assert!(controller.pending.is_some());

        let live = controller.timer.live().expect("show schedules a hide");
        let _ = controller.update(Message::Expired(live));
        assert!(controller.pending.is_none());
        assert!(!controller.is_visible());
    }

    #[test]
    fn frame_changes_nothing() {
        let mut controller = ToastController::default();
        controller.present("x", Severity::Info, None);
        let before = controller.toast().clone();

        let _ = controller.update(Message::Frame);

        assert_eq!(controller.toast(), &before);
        assert!(controller.has_pending_hide());
    }

    #[test]
    fn convenience_methods_set_fixed_severity() {
        let mut controller = ToastController::default();

        let _ = controller.show_success("a", None);
        assert_eq!(controller.toast().severity, Severity::Success);
        let _ = controller.show_error("b", None);
        assert_eq!(controller.toast().severity, Severity::Error);
        let _ = controller.show_warning("c", None);
        assert_eq!(controller.toast().severity, Severity::Warning);
        let _ = controller.show_info("d", None);
        assert_eq!(controller.toast().severity, Severity::Info);
        assert_eq!(controller.toast().message, ToastText::literal("d"));
    }

    #[test]
    fn listeners_see_every_transition() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut controller = ToastController::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = controller.subscribe(move |toast| sink.borrow_mut().push(toast.visible));

        let deadline = controller.present("x", Severity::Info, None);
        let _ = controller.update(Message::Expired(deadline.token));
        controller.hide();
        assert!(controller.unsubscribe(id));
        controller.present("y", Severity::Info, None);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
