//! Application router component.
//!
//! Keeps the active view and the URL hash in step so views can be deep
//! linked (`#/projects`) and the back button walks the view history.
//!
//! # Architecture
//!
//! - **The view signal is the source of truth**: the hash mirrors it
//! - **hashchange events**: back/forward and edited URLs set the view
//! - **Boot first**: the boot screen is shown until its log completes,
//!   then it is replaced by the main layout for the rest of the session

use leptos::prelude::*;
use shellfolio_core::ActiveView;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::{AppContext, use_app_context};
use crate::components::boot::BootScreen;
use crate::components::layout::Layout;
use crate::utils::dom;

// ============================================================================
// Hash Sync
// ============================================================================

/// Follow hashchange events (runs once on mount).
#[cfg(target_arch = "wasm32")]
fn setup_hash_listener(ctx: AppContext) {
    use wasm_bindgen::JsCast;
    let closure = Closure::wrap(Box::new(move || {
        ctx.set_view(ActiveView::from_hash(&dom::get_hash()));
    }) as Box<dyn Fn()>);

    if let Some(window) = dom::window() {
        let _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn setup_hash_listener(_ctx: AppContext) {}

/// Push a history entry whenever the view changes from inside the app.
fn setup_hash_sync_effect(ctx: AppContext) {
    Effect::new(move || {
        let view = ctx.view.get();
        if ActiveView::from_hash(&dom::get_hash()) != view {
            dom::set_hash(&view.to_hash());
        }
    });
}

// ============================================================================
// Main Router
// ============================================================================

#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_app_context();

    setup_hash_listener(ctx);
    setup_hash_sync_effect(ctx);

    let on_boot_complete = Callback::new(move |()| ctx.booted.set(true));

    view! {
        <Show
            when=move || ctx.booted.get()
            fallback=move || view! { <BootScreen on_complete=on_boot_complete /> }
        >
            <Layout />
        </Show>
    }
}
