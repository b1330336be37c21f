//! Character-by-character text reveal.

use super::{Advance, Animation, Phase, Ticket, TimerArm};

/// Prefix update emitted by [`Typewriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// The prefix currently on screen.
    Shown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Idle,
    /// Waiting out the start delay.
    Delaying,
    Typing,
    Completed,
    Cancelled,
}

/// Reveals `text` one character every `speed_ms`, after an optional start delay.
///
/// Characters are Unicode scalar values; a prefix never splits one.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    revealed: usize,
    speed_ms: u32,
    start_delay_ms: u32,
    stage: Stage,
    arm: TimerArm,
}

impl Typewriter {
    /// Create a typewriter. A zero `speed_ms` is raised to 1.
    pub fn new(text: impl Into<String>, speed_ms: u32) -> Self {
        let text = text.into();
        Self {
            char_count: text.chars().count(),
            text,
            revealed: 0,
            speed_ms: speed_ms.max(1),
            start_delay_ms: 0,
            stage: Stage::Idle,
            arm: TimerArm::default(),
        }
    }

    pub fn with_start_delay(mut self, start_delay_ms: u32) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// The prefix currently on screen.
    pub fn shown(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    /// Replace the text.
    ///
    /// A different text abandons the current run (its pending step and its
    /// completion) and restarts from the empty prefix. The same text leaves
    /// a started run untouched.
    pub fn set_text(&mut self, text: impl Into<String>) -> Advance<TypewriterEvent> {
        let text = text.into();
        if text == self.text && self.stage != Stage::Idle {
            return Advance::ignored();
        }
        self.char_count = text.chars().count();
        self.text = text;
        self.start()
    }

    fn shown_event(&self) -> Option<TypewriterEvent> {
        Some(TypewriterEvent::Shown(self.shown().to_string()))
    }
}

impl Animation for Typewriter {
    type Event = TypewriterEvent;

    fn phase(&self) -> Phase {
        match self.stage {
            Stage::Idle => Phase::Idle,
            Stage::Delaying | Stage::Typing => Phase::Running,
            Stage::Completed => Phase::Completed,
            Stage::Cancelled => Phase::Cancelled,
        }
    }

    fn start(&mut self) -> Advance<TypewriterEvent> {
        self.arm.disarm();
        self.revealed = 0;

        if self.char_count == 0 {
            self.stage = Stage::Completed;
            return Advance::finish(self.shown_event());
        }

        let timer = if self.start_delay_ms > 0 {
            self.stage = Stage::Delaying;
            self.arm.arm(self.start_delay_ms)
        } else {
            self.stage = Stage::Typing;
            self.arm.arm(self.speed_ms)
        };
        Advance::wait(self.shown_event(), timer)
    }

    fn fire(&mut self, ticket: Ticket) -> Advance<TypewriterEvent> {
        if !matches!(self.stage, Stage::Delaying | Stage::Typing) || !self.arm.accept(ticket) {
            return Advance::ignored();
        }

        if self.stage == Stage::Delaying {
            self.stage = Stage::Typing;
            let timer = self.arm.arm(self.speed_ms);
            return Advance::wait(None, timer);
        }

        self.revealed += 1;
        if self.revealed >= self.char_count {
            self.stage = Stage::Completed;
            Advance::finish(self.shown_event())
        } else {
            let timer = self.arm.arm(self.speed_ms);
            Advance::wait(self.shown_event(), timer)
        }
    }

    fn cancel(&mut self) {
        self.arm.disarm();
        self.stage = Stage::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(advance: &Advance<TypewriterEvent>) -> Option<&str> {
        advance.event.as_ref().map(|TypewriterEvent::Shown(s)| s.as_str())
    }

    #[test]
    fn test_types_one_character_per_step() {
        let mut tw = Typewriter::new("ls", 30);
        let advance = tw.start();
        assert_eq!(shown(&advance), Some(""));
        assert_eq!(advance.timer().map(|t| t.delay_ms), Some(30));

        let advance = tw.fire(advance.timer().unwrap().ticket);
        assert_eq!(shown(&advance), Some("l"));
        assert!(!advance.completed);

        let advance = tw.fire(advance.timer().unwrap().ticket);
        assert_eq!(shown(&advance), Some("ls"));
        assert!(advance.completed);
        assert_eq!(tw.phase(), Phase::Completed);
    }

    #[test]
    fn test_start_delay_precedes_typing() {
        let mut tw = Typewriter::new("x", 30).with_start_delay(500);
        let advance = tw.start();
        assert_eq!(advance.timer().map(|t| t.delay_ms), Some(500));

        let advance = tw.fire(advance.timer().unwrap().ticket);
        assert_eq!(advance.event, None);
        assert_eq!(advance.timer().map(|t| t.delay_ms), Some(30));
        assert_eq!(tw.shown(), "");
    }

    #[test]
    fn test_empty_text_completes_immediately() {
        let mut tw = Typewriter::new("", 30);
        let advance = tw.start();
        assert_eq!(shown(&advance), Some(""));
        assert!(advance.completed);
        assert_eq!(advance.timer(), None);
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut tw = Typewriter::new("C:\\Ünïcode", 10);
        let mut advance = tw.start();
        while let Some(timer) = advance.timer() {
            advance = tw.fire(timer.ticket);
        }
        assert_eq!(tw.shown(), "C:\\Ünïcode");
        assert_eq!(tw.revealed(), 10);
    }

    #[test]
    fn test_set_text_restarts_and_rejects_old_ticket() {
        let mut tw = Typewriter::new("abc", 30);
        let first = tw.start().timer().unwrap();
        let advance = tw.fire(first.ticket);
        let stale = advance.timer().unwrap();

        let advance = tw.set_text("xyz");
        assert_eq!(shown(&advance), Some(""));
        assert_eq!(tw.shown(), "");
        assert_eq!(tw.fire(stale.ticket), Advance::ignored());
        assert_eq!(tw.text(), "xyz");
    }

    #[test]
    fn test_set_same_text_keeps_run() {
        let mut tw = Typewriter::new("abc", 30);
        let timer = tw.start().timer().unwrap();
        assert_eq!(tw.set_text("abc"), Advance::ignored());
        assert_eq!(shown(&tw.fire(timer.ticket)), Some("a"));
    }

    #[test]
    fn test_cancel_stops_typing() {
        let mut tw = Typewriter::new("abc", 30);
        let timer = tw.start().timer().unwrap();
        tw.cancel();
        assert_eq!(tw.fire(timer.ticket), Advance::ignored());
        assert_eq!(tw.phase(), Phase::Cancelled);
        assert_eq!(tw.shown(), "");
    }
}
