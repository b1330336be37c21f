//! Deterministic virtual-time driver for animations.
//!
//! Mirrors what the browser driver does with a real timeout handle: one
//! pending timer per instance, replaced or cleared as each [`Advance`]
//! dictates. Time only moves when the caller advances it.

use super::{Advance, Animation, Schedule, Ticket};

/// Drives one [`Animation`] on a virtual millisecond clock and records
/// everything it emits.
pub struct Timeline<A: Animation> {
    machine: A,
    now: u64,
    pending: Option<(u64, Ticket)>,
    events: Vec<(u64, A::Event)>,
    completions: Vec<u64>,
}

impl<A: Animation> Timeline<A> {
    pub fn new(machine: A) -> Self {
        Self {
            machine,
            now: 0,
            pending: None,
            events: Vec::new(),
            completions: Vec::new(),
        }
    }

    /// Start the machine at the current virtual time.
    pub fn start(&mut self) {
        let advance = self.machine.start();
        self.apply(advance);
    }

    /// Feed an input change (e.g. new text) at the current virtual time.
    pub fn update(&mut self, f: impl FnOnce(&mut A) -> Advance<A::Event>) {
        let advance = f(&mut self.machine);
        self.apply(advance);
    }

    /// Run every timer due at or before `at`, then move the clock to `at`.
    pub fn advance_to(&mut self, at: u64) {
        while let Some((due, ticket)) = self.pending {
            if due > at {
                break;
            }
            self.now = due;
            self.pending = None;
            let advance = self.machine.fire(ticket);
            self.apply(advance);
        }
        self.now = self.now.max(at);
    }

    pub fn advance_by(&mut self, ms: u64) {
        self.advance_to(self.now + ms);
    }

    /// Run until no timer is pending.
    pub fn run_to_end(&mut self) {
        while let Some((due, _)) = self.pending {
            self.advance_to(due);
        }
    }

    /// Tear the instance down: cancel the machine and clear the slot.
    pub fn teardown(&mut self) {
        self.machine.cancel();
        self.pending = None;
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn machine(&self) -> &A {
        &self.machine
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Events with the virtual time they were emitted at.
    pub fn events(&self) -> &[(u64, A::Event)] {
        &self.events
    }

    /// Virtual times at which completion was reported.
    pub fn completions(&self) -> &[u64] {
        &self.completions
    }

    fn apply(&mut self, advance: Advance<A::Event>) {
        if let Some(event) = advance.event {
            self.events.push((self.now, event));
        }
        if advance.completed {
            self.completions.push(self.now);
        }
        match advance.schedule {
            Schedule::Unchanged => {}
            Schedule::Arm(timer) => {
                self.pending = Some((self.now + u64::from(timer.delay_ms), timer.ticket));
            }
            Schedule::Clear => self.pending = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{RevealEvent, RevealTimer};

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut timeline = Timeline::new(RevealTimer::new(0));
        timeline.start();
        assert!(!timeline.machine().is_visible());
        assert!(timeline.is_armed());

        timeline.advance_to(0);
        assert!(timeline.machine().is_visible());
        assert_eq!(timeline.completions(), [0]);
    }

    #[test]
    fn test_teardown_clears_slot() {
        let mut timeline = Timeline::new(RevealTimer::new(100));
        timeline.start();
        timeline.advance_to(50);
        timeline.teardown();
        timeline.advance_to(1_000);

        assert!(!timeline.machine().is_visible());
        assert!(timeline.completions().is_empty());
        assert_eq!(timeline.events(), [(0, RevealEvent::Hidden)]);
    }
}
