//! Autoplay timer ownership.
//!
//! The timer is modeled as an owned, nullable handle plus generation
//! tickets. The task driving the autoplay loop holds a [`AutoplayTicket`];
//! every tick must present it, and any stop or reschedule invalidates it,
//! so there is never more than one live timer regardless of how many tasks
//! were spawned over the session.

use std::time::Duration;

/// Interval between automatic slide advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3200);

/// Token held by the task driving one autoplay schedule.
///
/// Valid until autoplay is stopped or rescheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTicket(u64);

/// Owned autoplay handle.
#[derive(Debug, Default)]
pub(crate) struct AutoplayTimer {
    epoch: u64,
    active: Option<u64>,
}

impl AutoplayTimer {
    /// Start a new schedule, invalidating any previous ticket.
    pub(crate) fn schedule(&mut self) -> AutoplayTicket {
        self.epoch += 1;
        self.active = Some(self.epoch);
        AutoplayTicket(self.epoch)
    }

    /// Cancel the current schedule. Idempotent.
    pub(crate) fn cancel(&mut self) {
        self.active = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a ticket belongs to the current schedule.
    pub(crate) fn accepts(&self, ticket: AutoplayTicket) -> bool {
        self.active == Some(ticket.0)
    }
}
