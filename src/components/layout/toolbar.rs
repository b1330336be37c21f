//! Window-style toolbar with the shell and theme switches.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app_context;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    let knob_class = move || {
        if ctx.shell.get().is_bash() {
            css::knob.to_string()
        } else {
            format!("{} {}", css::knob, css::knobRight)
        }
    };

    view! {
        <header class=css::toolbar>
            <div class=css::window>
                <div class=css::lights>
                    <span class=css::red></span>
                    <span class=css::amber></span>
                    <span class=css::green></span>
                </div>
                <div class=css::title>{move || ctx.shell.get().title()}</div>
            </div>

            <div class=css::controls>
                <button
                    class=css::shellSwitch
                    on:click=move |_| ctx.toggle_shell()
                    title="Switch Shell"
                >
                    <span class=css::track>
                        <span class=knob_class></span>
                    </span>
                    <span class=css::badge>{move || ctx.shell.get().badge()}</span>
                </button>
                <button
                    class=css::themeButton
                    on:click=move |_| ctx.toggle_theme()
                    title="Toggle Theme"
                >
                    {move || view! { <Icon icon=ic::theme_icon(ctx.theme.get()) /> }}
                </button>
            </div>
        </header>
    }
}
