//! One-shot delayed reveal used to stagger content blocks.

use super::{Advance, Animation, Phase, Ticket, TimerArm};

/// Visibility change emitted by [`RevealTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Hidden,
    Shown,
}

/// Flips from hidden to visible once, `delay_ms` after start.
#[derive(Clone, Debug)]
pub struct RevealTimer {
    delay_ms: u32,
    visible: bool,
    phase: Phase,
    arm: TimerArm,
}

impl RevealTimer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            visible: false,
            phase: Phase::Idle,
            arm: TimerArm::default(),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Animation for RevealTimer {
    type Event = RevealEvent;

    fn phase(&self) -> Phase {
        self.phase
    }

    fn start(&mut self) -> Advance<RevealEvent> {
        self.visible = false;
        self.phase = Phase::Running;
        let timer = self.arm.arm(self.delay_ms);
        Advance::wait(Some(RevealEvent::Hidden), timer)
    }

    fn fire(&mut self, ticket: Ticket) -> Advance<RevealEvent> {
        if self.phase != Phase::Running || !self.arm.accept(ticket) {
            return Advance::ignored();
        }
        self.visible = true;
        self.phase = Phase::Completed;
        Advance::finish(Some(RevealEvent::Shown))
    }

    fn cancel(&mut self) {
        self.arm.disarm();
        self.phase = Phase::Cancelled;
    }
}
