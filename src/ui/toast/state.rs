// SPDX-License-Identifier: MPL-2.0
//! Observable toast state.
//!
//! [`ToastState`] holds the single current toast and a list of listeners
//! that are called after every change. Mutation is restricted to the
//! controller so that timer bookkeeping and state can never disagree.

use super::severity::Severity;
use super::text::ToastText;
use std::fmt;

/// Snapshot of the current toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    /// Whether the toast is currently displayed.
    pub visible: bool,
    /// Text to display.
    pub message: ToastText,
    /// Drives color and icon.
    pub severity: Severity,
}

/// Handle returned by [`ToastState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Toast)>;

/// Holds the active toast and notifies listeners when it changes.
#[derive(Default)]
pub struct ToastState {
    toast: Toast,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for ToastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastState")
            .field("toast", &self.toast)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ToastState {
    /// Creates a hidden state with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current toast.
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.toast.visible
    }

    /// Registers `listener`, called with the new snapshot after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Toast) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replaces the content and makes the toast visible.
    pub(super) fn present(&mut self, message: ToastText, severity: Severity) {
        self.toast = Toast {
            visible: true,
            message,
            severity,
        };
        self.notify();
    }

    /// Hides the toast, keeping its last content.
    ///
    /// Returns `false` (and notifies no one) if it was already hidden.
    pub(super) fn dismiss(&mut self) -> bool {
        if !self.toast.visible {
            return false;
        }
        self.toast.visible = false;
        self.notify();
        true
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.toast);
        }
    }
}
