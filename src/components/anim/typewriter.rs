//! Typed-out text with an optional blinking cursor.

use leptos::prelude::*;

use super::hooks::{TypewriterOptions, use_typewriter};
use crate::config::TYPEWRITER_SPEED_MS;

stylance::import_crate_style!(css, "src/components/anim/anim.module.css");

#[component]
pub fn TypewriterText(
    #[prop(into)] text: Signal<String>,
    #[prop(default = TYPEWRITER_SPEED_MS)] speed_ms: u32,
    #[prop(optional)] start_delay_ms: u32,
    #[prop(default = true)] show_cursor: bool,
    #[prop(optional)] on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let shown = use_typewriter(
        text,
        TypewriterOptions {
            speed_ms,
            start_delay_ms,
            on_complete,
        },
    );

    view! {
        <span class=css::typed>
            {shown}
            <Show when=move || show_cursor>
                <span class=css::cursor aria-hidden="true"></span>
            </Show>
        </span>
    }
}
