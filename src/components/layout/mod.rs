//! Main layout: sidebar, toolbar and the scrollable content column.
//!
//! - [`Layout`] - Screen container, mobile top bar and footer
//! - [`sidebar`] - Script explorer navigation
//! - [`toolbar`] - Window title with shell and theme switches

mod sidebar;
mod toolbar;

use leptos::prelude::*;
use leptos_icons::Icon;
use shellfolio_core::ActiveView;
use shellfolio_core::content::Surface;

use crate::app::use_app_context;
use crate::components::content::ContentArea;
use crate::components::icons as ic;
use crate::components::palette::surface_class;
use crate::config::ASSISTANT_TAG;
use crate::utils::dom;
use sidebar::Sidebar;
use toolbar::Toolbar;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Reset the scroll position when the view changes.
fn setup_scroll_reset_effect(view: RwSignal<ActiveView>, scroll_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move |prev: Option<ActiveView>| {
        let current = view.get();
        if prev.is_some_and(|prev| prev != current) {
            if let Some(el) = scroll_ref.get_untracked() {
                el.set_scroll_top(0);
            }
            dom::scroll_window_to_top();
        }
        current
    });
}

// ============================================================================
// Layout
// ============================================================================

#[component]
pub fn Layout() -> impl IntoView {
    let ctx = use_app_context();
    let menu_open = RwSignal::new(false);
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    setup_scroll_reset_effect(ctx.view, scroll_ref);

    let screen_class = move || {
        let surface = Surface::of(ctx.shell.get(), ctx.theme.get());
        format!("{} {}", css::screen, surface_class(surface))
    };

    view! {
        <div class=screen_class>
            <MobileBar menu_open=menu_open />
            <Sidebar menu_open=menu_open />
            <Show when=move || menu_open.get()>
                <div class=css::backdrop on:click=move |_| menu_open.set(false)></div>
            </Show>
            <main class=css::main>
                <Toolbar />
                <div class=css::scroll node_ref=scroll_ref>
                    <ContentArea />
                    <Footer />
                </div>
            </main>
        </div>
    }
}

/// Top bar shown on narrow screens only.
#[component]
fn MobileBar(menu_open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class=css::mobileBar>
            <div class=css::identity>
                {move || {
                    if ctx.shell.get().is_bash() {
                        view! { <Icon icon=ic::TERMINAL /> }.into_any()
                    } else {
                        view! { <span class=css::psBadge>"PS"</span> }.into_any()
                    }
                }}
                <span class=css::mobilePrompt>{move || ctx.shell.get().prompt()}</span>
            </div>
            <button
                class=css::menuButton
                on:click=move |_| menu_open.update(|open| *open = !*open)
                aria-label="Toggle navigation"
            >
                <Icon icon=ic::MENU />
            </button>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.profile.get_value().name.full();

    view! {
        <footer class=css::footer>
            <p>{format!("[USER]: {user} | [ASSISTANT]: {ASSISTANT_TAG}")}</p>
            <p class=css::mode>"Mode: " {move || ctx.shell.get().mode_label()}</p>
        </footer>
    }
}
