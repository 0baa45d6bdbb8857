// SPDX-License-Identifier: MPL-2.0
//! Cancellation-token-guarded deferred hide.
//!
//! Every scheduled hide carries a [`TimerToken`]. Only the most recently
//! scheduled token is live; cancelling or rescheduling invalidates it, and
//! [`HideTimer::fire`] rejects any token that is not live. An expiry that
//! was already in flight when the timer was cancelled therefore has no
//! effect, whether or not the underlying task could be aborted in time.

use std::time::Duration;

/// Identifies one scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A scheduled hide: which token to deliver, and after how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub token: TimerToken,
    pub duration: Duration,
}

/// Bookkeeping for the single deferred hide. At most one token is live.
#[derive(Debug, Default)]
pub struct HideTimer {
    generation: u64,
    live: Option<TimerToken>,
}

impl HideTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates the live token (if any) and issues a new one.
    pub fn schedule(&mut self, duration: Duration) -> Deadline {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.live = Some(token);
        Deadline { token, duration }
    }

    /// Invalidates the live token. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.live.take().is_some()
    }

    /// Consumes `token` if it is the live one.
    ///
    /// Returns `true` at most once per scheduled token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.live.is_some()
    }

    /// Returns the live token, if a hide is scheduled.
    #[must_use]
    pub fn live(&self) -> Option<TimerToken> {
        self.live
    }
}

/// Resolves to the deadline's token once its duration has elapsed.
pub async fn expire_after(deadline: Deadline) -> TimerToken {
    tokio::time::sleep(deadline.duration).await;
    deadline.token
}
