//! Boot log playback.

use super::{Advance, Animation, Phase, Ticket, TimerArm};

/// Line append emitted by [`BootLogPlayer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootLogEvent {
    Appended { index: usize, line: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    Appending,
    /// All lines shown; waiting out the trailing delay.
    Draining,
    Completed,
    Cancelled,
}

/// Appends one line per `interval_ms`, then completes `trailing_ms` after the last.
///
/// With `n` lines, line `i` appears at `(i + 1) * interval_ms` and completion
/// at `n * interval_ms + trailing_ms`.
#[derive(Clone, Debug)]
pub struct BootLogPlayer {
    lines: Vec<String>,
    interval_ms: u32,
    trailing_ms: u32,
    appended: usize,
    stage: Stage,
    arm: TimerArm,
}

impl BootLogPlayer {
    pub fn new<I, S>(lines: I, interval_ms: u32, trailing_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            interval_ms,
            trailing_ms,
            appended: 0,
            stage: Stage::Idle,
            arm: TimerArm::default(),
        }
    }

    /// Lines appended so far, in input order.
    pub fn displayed(&self) -> &[String] {
        &self.lines[..self.appended]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Earliest time, relative to start, at which completion can fire.
    pub fn total_duration_ms(&self) -> u64 {
        self.lines.len() as u64 * u64::from(self.interval_ms) + u64::from(self.trailing_ms)
    }
}

impl Animation for BootLogPlayer {
    type Event = BootLogEvent;

    fn phase(&self) -> Phase {
        match self.stage {
            Stage::Idle => Phase::Idle,
            Stage::Appending | Stage::Draining => Phase::Running,
            Stage::Completed => Phase::Completed,
            Stage::Cancelled => Phase::Cancelled,
        }
    }

    fn start(&mut self) -> Advance<BootLogEvent> {
        self.appended = 0;
        let timer = if self.lines.is_empty() {
            self.stage = Stage::Draining;
            self.arm.arm(self.trailing_ms)
        } else {
            self.stage = Stage::Appending;
            self.arm.arm(self.interval_ms)
        };
        Advance::wait(None, timer)
    }

    fn fire(&mut self, ticket: Ticket) -> Advance<BootLogEvent> {
        if !self.arm.accept(ticket) {
            return Advance::ignored();
        }

        match self.stage {
            Stage::Appending => {
                let index = self.appended;
                self.appended += 1;
                let event = BootLogEvent::Appended {
                    index,
                    line: self.lines[index].clone(),
                };
                let timer = if self.appended == self.lines.len() {
                    self.stage = Stage::Draining;
                    self.arm.arm(self.trailing_ms)
                } else {
                    self.arm.arm(self.interval_ms)
                };
                Advance::wait(Some(event), timer)
            }
            Stage::Draining => {
                self.stage = Stage::Completed;
                Advance::finish(None)
            }
            Stage::Idle | Stage::Completed | Stage::Cancelled => Advance::ignored(),
        }
    }

    fn cancel(&mut self) {
        self.arm.disarm();
        self.stage = Stage::Cancelled;
    }
}
