//! Runs a core [`Animation`] against the browser clock.
//!
//! The machine lives in a [`StoredValue`] next to its [`TimerSlot`]. Every
//! [`Advance`] it returns is routed here: the schedule goes to the slot, the
//! event and completion go to the caller's sink. Timer callbacks feed their
//! ticket back to the machine, which drops anything stale.

use leptos::prelude::*;
use shellfolio_core::{Advance, Animation, Schedule};

use crate::utils::TimerSlot;

/// A core animation paired with the timer slot that paces it.
pub struct Driven<A: Animation + Send + Sync + 'static> {
    machine: StoredValue<A>,
    slot: TimerSlot,
}

impl<A: Animation + Send + Sync + 'static> Clone for Driven<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Animation + Send + Sync + 'static> Copy for Driven<A> {}

impl<A> Driven<A>
where
    A: Animation + Send + Sync + 'static,
    A::Event: 'static,
{
    pub fn new(machine: A) -> Self {
        Self {
            machine: StoredValue::new(machine),
            slot: TimerSlot::new(),
        }
    }

    /// Feed an input to the machine and route the result.
    ///
    /// `sink` receives the emitted event (if any) and whether the run just
    /// completed. It is called after the timer is rescheduled.
    pub fn apply<F>(self, input: impl FnOnce(&mut A) -> Advance<A::Event>, sink: F)
    where
        F: Fn(Option<A::Event>, bool) + Clone + 'static,
    {
        if let Some(advance) = self.machine.try_update_value(input) {
            self.route(advance, sink);
        }
    }

    /// Cancel the run and its pending timer. Safe to call repeatedly.
    pub fn teardown(self) {
        self.slot.clear();
        self.machine.try_update_value(|machine| machine.cancel());
    }

    fn route<F>(self, advance: Advance<A::Event>, sink: F)
    where
        F: Fn(Option<A::Event>, bool) + Clone + 'static,
    {
        let Advance {
            event,
            completed,
            schedule,
        } = advance;

        match schedule {
            Schedule::Unchanged => {}
            Schedule::Clear => self.slot.clear(),
            Schedule::Arm(timer) => {
                let next = sink.clone();
                self.slot.arm(timer.delay_ms, move || {
                    self.apply(|machine| machine.fire(timer.ticket), next);
                });
            }
        }

        if event.is_some() || completed {
            sink(event, completed);
        }
    }
}
