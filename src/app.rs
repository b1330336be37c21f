//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shared by every
//! component, and application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;
use shellfolio_core::state::Transitions;
use shellfolio_core::{ActiveView, AppState, ContextError, Profile, ShellPersona, ThemeMode};

use crate::components::AppRouter;
use crate::config;
use crate::utils::{dom, platform};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided once at the root of the component tree. The view, persona and
/// theme are independent signals: toggling the persona or the theme never
/// touches the view, so the mounted content keeps its animation state.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Content view in the main area.
    pub view: RwSignal<ActiveView>,
    /// Active shell persona.
    pub shell: RwSignal<ShellPersona>,
    /// Active color theme.
    pub theme: RwSignal<ThemeMode>,
    /// Whether the boot sequence has finished.
    pub booted: RwSignal<bool>,
    /// Parsed profile data.
    pub profile: StoredValue<Arc<Profile>>,
}

impl AppContext {
    pub fn new(initial: AppState, profile: Profile) -> Self {
        Self {
            view: RwSignal::new(initial.view),
            shell: RwSignal::new(initial.shell),
            theme: RwSignal::new(initial.theme),
            booted: RwSignal::new(false),
            profile: StoredValue::new(Arc::new(profile)),
        }
    }

    /// Look up the context provided at the root.
    pub fn try_use() -> Result<Self, ContextError> {
        use_context::<Self>().ok_or_else(ContextError::missing::<Self>)
    }

    /// Switch the content view. Selecting the current view is a no-op, so
    /// its animations are not restarted.
    pub fn set_view(&self, view: ActiveView) {
        if self.view.get_untracked() != view {
            self.view.set(view);
        }
    }

    pub fn toggle_shell(&self) {
        self.shell.update(|shell| *shell = shell.toggled());
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    /// Current state, without subscribing.
    pub fn snapshot(&self) -> AppState {
        AppState {
            view: self.view.get_untracked(),
            shell: self.shell.get_untracked(),
            theme: self.theme.get_untracked(),
        }
    }
}

/// Get the [`AppContext`].
///
/// # Panics
///
/// Panics when called outside the tree rendered by [`App`]; that is a
/// programming error, not a runtime condition.
pub fn use_app_context() -> AppContext {
    AppContext::try_use().unwrap_or_else(|err| panic!("{err}"))
}

// ============================================================================
// Setup
// ============================================================================

/// Initial state from the platform signals and the URL hash.
fn initial_state() -> AppState {
    AppState::from_platform(&platform::read_signals())
        .with_view(ActiveView::from_hash(&dom::get_hash()))
}

/// Keep the `dark` class on the document root in sync with the theme,
/// touching the DOM once per actual change.
fn setup_theme_effect(theme: RwSignal<ThemeMode>) {
    let transitions = StoredValue::new(Transitions::new());
    Effect::new(move || {
        let mode = theme.get();
        if let Some(mode) = transitions.try_update_value(|t| t.observe(mode)).flatten() {
            dom::apply_theme(mode);
        }
    });
}

/// Root component: parses the profile, provides [`AppContext`] and renders
/// the router, or a panic screen listing the profile errors.
#[component]
pub fn App() -> impl IntoView {
    let loaded = config::load_profile().map(|profile| {
        let ctx = AppContext::new(initial_state(), profile);
        provide_context(ctx);
        setup_theme_effect(ctx.theme);
    });
    if let Err(err) = &loaded {
        web_sys::console::error_1(&err.to_string().into());
    }

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class=css::panic>
                    <h1 class=css::panicTitle>"Kernel panic: profile not loaded"</h1>
                    <ul class=css::panicErrors>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| view! { <li>{format!("[ FAIL ] {err}")}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <button class=css::reboot on:click=|_| dom::reload()>
                        "reboot"
                    </button>
                </div>
            }
        }>
            {move || loaded.clone().map(|()| view! { <AppRouter /> })}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        config::load_profile().unwrap()
    }

    #[test]
    fn test_context_missing_outside_root() {
        let owner = Owner::new();
        owner.with(|| {
            let err = AppContext::try_use().err();
            assert_eq!(err, Some(ContextError::missing::<AppContext>()));
        });
    }

    #[test]
    #[should_panic(expected = "AppContext accessed before initialization")]
    fn test_use_app_context_panics_without_provider() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_app_context();
        });
    }

    #[test]
    fn test_toggles_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppContext::new(
                AppState::default().with_view(ActiveView::Projects),
                profile(),
            ));
            let ctx = use_app_context();

            ctx.toggle_shell();
            ctx.toggle_theme();

            let state = ctx.snapshot();
            assert_eq!(state.view, ActiveView::Projects);
            assert_eq!(state.shell, ShellPersona::PowerShell);
            assert_eq!(state.theme, ThemeMode::Light);

            ctx.toggle_theme();
            assert_eq!(ctx.snapshot().theme, ThemeMode::Dark);
        });
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppState::default().with_view(ActiveView::Skills), profile());
            let original = ctx.snapshot();

            ctx.toggle_shell();
            ctx.toggle_theme();
            assert_ne!(ctx.snapshot(), original);
            ctx.toggle_shell();
            ctx.toggle_theme();
            assert_eq!(ctx.snapshot(), original);
        });
    }

    #[test]
    fn test_set_view() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppState::default(), profile());
            assert!(!ctx.booted.get_untracked());

            ctx.set_view(ActiveView::Contact);
            assert_eq!(ctx.view.get_untracked(), ActiveView::Contact);
            ctx.set_view(ActiveView::Contact);
            assert_eq!(ctx.snapshot().view, ActiveView::Contact);
        });
    }
}
