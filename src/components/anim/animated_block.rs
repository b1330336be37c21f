//! Delayed fade-in wrapper.

use leptos::prelude::*;

use super::hooks::use_reveal;

stylance::import_crate_style!(css, "src/components/anim/anim.module.css");

/// Wraps `children` and fades them in `delay_ms` after mount.
///
/// Children are in the DOM from the start; only their visibility changes,
/// so the layout does not shift when the block appears.
#[component]
pub fn AnimatedBlock(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let visible = use_reveal(delay_ms);
    let class = move || if visible.get() { css::shown } else { css::hidden };
    let state = move || if visible.get() { "shown" } else { "hidden" };

    view! { <div class=class data-state=state>{children()}</div> }
}
