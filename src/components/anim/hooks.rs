//! Reactive hooks over the core animation machines.
//!
//! Each hook owns one machine and one timer slot for the lifetime of the
//! calling component. Unmounting the component tears the machine down, so a
//! late timer can neither update the display nor report completion.

use leptos::prelude::*;
use shellfolio_core::anim::{BootLogEvent, RevealEvent, TypewriterEvent};
use shellfolio_core::{Animation, BootLogPlayer, RevealTimer, Typewriter};

use super::driver::Driven;

/// Visibility flag that turns on `delay_ms` after mount.
pub fn use_reveal(delay_ms: u32) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let driven = Driven::new(RevealTimer::new(delay_ms));

    driven.apply(RevealTimer::start, move |event, _| {
        if let Some(event) = event {
            set_visible.set(event == RevealEvent::Shown);
        }
    });
    on_cleanup(move || driven.teardown());

    visible
}

/// Typewriter options beyond the text itself.
#[derive(Clone, Copy, Default)]
pub struct TypewriterOptions {
    pub speed_ms: u32,
    pub start_delay_ms: u32,
    pub on_complete: Option<Callback<()>>,
}

/// Prefix of `text` revealed one character every `speed_ms`.
///
/// A change of `text` restarts the reveal from the empty prefix; setting the
/// same text again keeps the current run.
pub fn use_typewriter(text: Signal<String>, options: TypewriterOptions) -> ReadSignal<String> {
    let (shown, set_shown) = signal(String::new());
    let driven = Driven::new(
        Typewriter::new(String::new(), options.speed_ms)
            .with_start_delay(options.start_delay_ms),
    );
    let on_complete = options.on_complete;

    let sink = move |event: Option<TypewriterEvent>, completed: bool| {
        if let Some(TypewriterEvent::Shown(prefix)) = event {
            set_shown.set(prefix);
        }
        if completed && let Some(callback) = on_complete {
            callback.run(());
        }
    };

    Effect::new(move || {
        let text = text.get();
        driven.apply(move |machine| machine.set_text(text), sink);
    });
    on_cleanup(move || driven.teardown());

    shown
}

/// Boot log lines appended one per `interval_ms`; `on_complete` runs
/// `trailing_ms` after the last one.
pub fn use_boot_log<I, S>(
    lines: I,
    interval_ms: u32,
    trailing_ms: u32,
    on_complete: Callback<()>,
) -> ReadSignal<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (displayed, set_displayed) = signal(Vec::<String>::new());
    let driven = Driven::new(BootLogPlayer::new(lines, interval_ms, trailing_ms));

    driven.apply(BootLogPlayer::start, move |event, completed| {
        if let Some(BootLogEvent::Appended { line, .. }) = event {
            set_displayed.update(|lines| lines.push(line));
        }
        if completed {
            on_complete.run(());
        }
    });
    on_cleanup(move || driven.teardown());

    displayed
}
