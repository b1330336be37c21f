//! Script explorer sidebar.
//!
//! Lists one script per view under the persona's scripts folder. On narrow
//! screens it slides in over the content and carries the shell and theme
//! switches; on wide screens it can be collapsed to an icon rail.

use leptos::prelude::*;
use leptos_icons::Icon;
use shellfolio_core::{ActiveView, ShellPersona};

use crate::app::use_app_context;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/sidebar.module.css");

const SECURITY_CONTEXT: &str = "SecurityContext: Privileged";

#[component]
pub fn Sidebar(menu_open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let collapsed = RwSignal::new(false);
    let expanded = move || !collapsed.get();

    let aside_class = move || {
        let mut class = String::from(css::sidebar);
        if menu_open.get() {
            class.push(' ');
            class.push_str(css::open);
        }
        if collapsed.get() {
            class.push(' ');
            class.push_str(css::collapsed);
        }
        class
    };
    let scripts_root = move || ctx.shell.get().scripts_root();

    view! {
        <aside class=aside_class>
            <div class=css::body>
                <div class=css::heading>
                    <Show when=expanded>
                        <span class=css::title>"Script Explorer"</span>
                    </Show>
                    <button
                        class=css::collapseButton
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                        title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                    >
                        {move || {
                            let icon = if collapsed.get() { ic::CHEVRON_RIGHT } else { ic::CHEVRON_LEFT };
                            view! { <Icon icon=icon /> }
                        }}
                    </button>
                </div>

                <div class=css::root title=scripts_root>
                    <Icon icon=ic::FOLDER />
                    <Show when=expanded>
                        <span class=css::rootLabel>{scripts_root}</span>
                    </Show>
                </div>

                <ul class=css::tree>
                    {ActiveView::ALL
                        .into_iter()
                        .map(|target| {
                            view! { <NavItem target=target collapsed=collapsed menu_open=menu_open /> }
                        })
                        .collect_view()}
                    <li class=css::context title=SECURITY_CONTEXT>
                        <Icon icon=ic::SHIELD />
                        <Show when=expanded>
                            <span>{SECURITY_CONTEXT}</span>
                        </Show>
                    </li>
                </ul>
            </div>
            <MobileSettings />
        </aside>
    }
}

#[component]
fn NavItem(
    target: ActiveView,
    collapsed: RwSignal<bool>,
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let active = move || ctx.view.get() == target;
    let label = move || target.nav_label(ctx.shell.get());

    let item_class = move || {
        if active() {
            format!("{} {}", css::item, css::active)
        } else {
            css::item.to_string()
        }
    };
    let icon_class = move || match (active(), ctx.shell.get()) {
        (true, ShellPersona::Bash) => css::iconActiveBash,
        (true, ShellPersona::PowerShell) => css::iconActivePs,
        (false, ShellPersona::Bash) => css::iconBash,
        (false, ShellPersona::PowerShell) => css::iconPs,
    };

    view! {
        <li>
            <button
                class=item_class
                on:click=move |_| {
                    ctx.set_view(target);
                    menu_open.set(false);
                }
                title=move || if collapsed.get() { label() } else { "" }
            >
                <span class=icon_class>
                    <Icon icon=ic::view_icon(target) />
                </span>
                <Show when=move || !collapsed.get()>
                    <span class=css::label>{label}</span>
                    <span class=css::extension>{move || ctx.shell.get().script_extension()}</span>
                </Show>
            </button>
        </li>
    }
}

/// Shell and theme switches, shown in the slide-in menu on narrow screens.
#[component]
fn MobileSettings() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class=css::settings>
            <div class=css::settingsTitle>"System Config"</div>
            <div class=css::settingsGrid>
                <button class=css::setting on:click=move |_| ctx.toggle_shell()>
                    <Icon icon=ic::TERMINAL />
                    {move || if ctx.shell.get().is_bash() { "BASH" } else { "PS" }}
                </button>
                <button class=css::setting on:click=move |_| ctx.toggle_theme()>
                    {move || view! { <Icon icon=ic::theme_icon(ctx.theme.get()) /> }}
                    {move || ctx.theme.get().badge()}
                </button>
            </div>
        </div>
    }
}
