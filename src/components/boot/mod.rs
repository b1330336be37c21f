//! Boot sequence screen.
//!
//! Plays the persona's boot log line by line, then reports completion so
//! the router can swap in the main layout.

use leptos::prelude::*;
use shellfolio_core::content::Surface;
use shellfolio_core::models::BootLine;
use shellfolio_core::ShellPersona;

use crate::app::use_app_context;
use crate::components::anim::hooks::use_boot_log;
use crate::components::palette::surface_class;
use crate::config::boot_timing;

stylance::import_crate_style!(css, "src/components/boot/boot.module.css");

/// Keep the newest line in view as the log grows.
fn setup_autoscroll_effect(lines: ReadSignal<Vec<String>>, log_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        lines.track();
        if let Some(el) = log_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Full-screen boot log.
///
/// The persona is read once: the sequence that started keeps playing even if
/// the persona changes before it finishes.
#[component]
pub fn BootScreen(on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.snapshot();
    let shell = state.shell;

    let lines = use_boot_log(
        shell.boot_log().iter().copied(),
        boot_timing::LINE_INTERVAL_MS,
        boot_timing::TRAILING_MS,
        on_complete,
    );

    let log_ref = NodeRef::<leptos::html::Div>::new();
    setup_autoscroll_effect(lines, log_ref);

    let screen_class = format!(
        "{} {}",
        css::screen,
        surface_class(Surface::of(shell, state.theme))
    );

    view! {
        <div class=screen_class>
            <div class=css::header>
                {shell
                    .boot_header()
                    .iter()
                    .map(|line| view! { <p>{*line}</p> })
                    .collect_view()}
            </div>
            <div class=css::log node_ref=log_ref>
                <For
                    each=move || lines.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, line)| view! { <BootLogLine shell=shell line=line /> }
                />
                <span class=css::cursor>"_"</span>
            </div>
        </div>
    }
}

/// One log line: Bash lines highlight their `[ OK ]` tag, PowerShell lines
/// get a `>` marker.
#[component]
fn BootLogLine(shell: ShellPersona, line: String) -> impl IntoView {
    let body = match shell {
        ShellPersona::Bash => {
            let BootLine { status, message } = BootLine::parse(&line);
            let status = status.map(|tag| view! { <span class=css::ok>{tag.to_string()}</span> " " });
            view! { {status} <span>{message.to_string()}</span> }.into_any()
        }
        ShellPersona::PowerShell => view! {
            <span class=css::marker>">"</span>
            " "
            <span>{line}</span>
        }
        .into_any(),
    };

    view! { <div class=css::line>{body}</div> }
}
