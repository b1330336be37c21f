//! Main content area.
//!
//! The page is keyed by the active view: switching views drops the old page
//! (cancelling its timers) and mounts a fresh one whose typewriter and
//! reveal blocks start from zero. Persona and theme changes update the
//! mounted page in place.
//!
//! - [`CommandBar`] - Prompt and typed command
//! - [`views`] - Per-view bodies
//! - [`NextActionPrompt`] - Next-script suggestion on narrow screens

mod command_bar;
mod next_action;
mod views;

use leptos::prelude::*;
use leptos_use::use_media_query;
use shellfolio_core::content::Accent;
use shellfolio_core::{ActiveView, render};

use crate::app::use_app_context;
use crate::config::MOBILE_MEDIA_QUERY;
use command_bar::CommandBar;
use next_action::NextActionPrompt;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

#[component]
pub fn ContentArea() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        let current = ctx.view.get();
        view! { <ViewPage current=current /> }
    }
}

#[component]
fn ViewPage(current: ActiveView) -> impl IntoView {
    let ctx = use_app_context();
    let profile = ctx.profile.get_value();
    let state = ctx.snapshot();
    let page = render(&profile, current, state.shell, state.theme);

    let key = page.key();
    let has_next = page.next.is_some();
    let accent = Signal::derive(move || Accent::of(ctx.shell.get(), ctx.theme.get()));
    let body = views::body_view(page.body, ctx.shell.into(), accent);
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    view! {
        <div class=css::page data-view=key>
            <CommandBar current=current />
            <div class=css::output>
                <div class=css::body>{body}</div>
                <Show when=move || has_next && is_mobile.get()>
                    <NextActionPrompt current=current />
                </Show>
            </div>
        </div>
    }
}
