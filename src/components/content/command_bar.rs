//! Prompt and typed command at the top of every page.

use leptos::prelude::*;
use shellfolio_core::content::CommandLine;
use shellfolio_core::{ActiveView, ShellPersona, ThemeMode};

use crate::app::use_app_context;
use crate::components::anim::TypewriterText;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Prompt and command classes for a persona on a theme.
fn line_classes(shell: ShellPersona, theme: ThemeMode) -> (&'static str, &'static str) {
    match (theme, shell) {
        (ThemeMode::Dark, ShellPersona::Bash) => (css::promptBash, css::commandBash),
        (ThemeMode::Dark, ShellPersona::PowerShell) => (css::promptPs, css::commandPs),
        (ThemeMode::Light, ShellPersona::Bash) => (css::promptBashLight, css::commandBashLight),
        (ThemeMode::Light, ShellPersona::PowerShell) => (css::promptPsLight, css::commandPsLight),
    }
}

/// Types the view's command once per mount. A persona switch retypes the
/// new persona's command from the start.
#[component]
pub fn CommandBar(current: ActiveView) -> impl IntoView {
    let ctx = use_app_context();
    let line = Memo::new(move |_| CommandLine::new(current, ctx.shell.get()));
    let command = Signal::derive(move || line.get().command.to_string());
    let classes = Memo::new(move |_| line_classes(ctx.shell.get(), ctx.theme.get()));

    view! {
        <div class=css::commandBar>
            <span class=move || classes.get().0>{move || line.get().prompt}</span>
            <span class=move || classes.get().1>
                <TypewriterText text=command />
            </span>
        </div>
    }
}
