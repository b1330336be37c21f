//! Timer-driven animation state machines.
//!
//! Every animation is a small state machine `Idle -> Running -> Completed`,
//! with `Cancelled` reachable from any state on teardown. Machines never
//! touch a clock themselves: each call returns an [`Advance`] telling the
//! driver which event to render and how to update its single timer slot.
//!
//! A machine only accepts the [`Ticket`] of the timer it armed last, so a
//! firing that belongs to an abandoned run is ignored even if the driver
//! failed to clear it.
//!
//! - [`RevealTimer`] - One-shot delayed visibility flag
//! - [`Typewriter`] - Character-by-character text reveal
//! - [`BootLogPlayer`] - Fixed-cadence log playback with a trailing pause

mod boot_log;
mod reveal;
#[cfg(any(test, feature = "mock"))]
pub mod sim;
mod typewriter;

pub use boot_log::{BootLogEvent, BootLogPlayer};
pub use reveal::{RevealEvent, RevealTimer};
pub use typewriter::{Typewriter, TypewriterEvent};

/// Coarse lifecycle shared by all animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not started.
    #[default]
    Idle,
    /// A timer is pending.
    Running,
    /// Finished; completion has been reported.
    Completed,
    /// Torn down; no further events.
    Cancelled,
}

/// Identifies one armed timer of one machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A timer the driver must arm: fire `ticket` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub ticket: Ticket,
    pub delay_ms: u32,
}

/// What the driver does with its timer slot after an [`Advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Leave the slot as it is.
    Unchanged,
    /// Replace whatever is pending with this timer.
    Arm(Timer),
    /// Clear the slot.
    Clear,
}

/// Outcome of feeding one input to an [`Animation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advance<E> {
    /// Display update, if any.
    pub event: Option<E>,
    /// True exactly once per run, on the step that finishes it.
    pub completed: bool,
    pub schedule: Schedule,
}

impl<E> Advance<E> {
    /// Nothing happened (stale ticket, finished machine, unchanged input).
    pub fn ignored() -> Self {
        Self {
            event: None,
            completed: false,
            schedule: Schedule::Unchanged,
        }
    }

    fn wait(event: Option<E>, timer: Timer) -> Self {
        Self {
            event,
            completed: false,
            schedule: Schedule::Arm(timer),
        }
    }

    fn finish(event: Option<E>) -> Self {
        Self {
            event,
            completed: true,
            schedule: Schedule::Clear,
        }
    }

    /// The timer to arm, if this advance asks for one.
    pub fn timer(&self) -> Option<Timer> {
        match self.schedule {
            Schedule::Arm(timer) => Some(timer),
            _ => None,
        }
    }
}

/// A timer-driven animation.
pub trait Animation {
    /// Display update emitted to the renderer.
    type Event;

    fn phase(&self) -> Phase;

    /// Begin (or restart) a run from the initial display state.
    fn start(&mut self) -> Advance<Self::Event>;

    /// Deliver a timer firing. Tickets other than the last armed one are ignored.
    fn fire(&mut self, ticket: Ticket) -> Advance<Self::Event>;

    /// Tear down. Pending timers are invalidated and no further events occur.
    fn cancel(&mut self);
}

/// The single pending timer of a machine.
#[derive(Clone, Debug, Default)]
struct TimerArm {
    issued: u64,
    pending: Option<Ticket>,
}

impl TimerArm {
    fn arm(&mut self, delay_ms: u32) -> Timer {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        Timer { ticket, delay_ms }
    }

    fn disarm(&mut self) {
        self.pending = None;
    }

    /// Consume `ticket` if it is the one currently armed.
    fn accept(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_arm_accepts_only_latest_ticket() {
        let mut arm = TimerArm::default();
        let first = arm.arm(10);
        let second = arm.arm(10);

        assert_ne!(first.ticket, second.ticket);
        assert!(!arm.accept(first.ticket));
        assert!(arm.accept(second.ticket));
        // Consumed.
        assert!(!arm.accept(second.ticket));
    }

    #[test]
    fn test_disarm_rejects_pending_ticket() {
        let mut arm = TimerArm::default();
        let timer = arm.arm(5);
        arm.disarm();
        assert!(!arm.accept(timer.ticket));
    }
}
