//! "Suggested next action" button offered below the content on narrow
//! screens.

use leptos::prelude::*;
use leptos_icons::Icon;
use shellfolio_core::content::NextAction;
use shellfolio_core::{ActiveView, ShellPersona};

use crate::app::use_app_context;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

#[component]
pub fn NextActionPrompt(current: ActiveView) -> impl IntoView {
    let ctx = use_app_context();
    let next = Memo::new(move |_| NextAction::after(current, ctx.shell.get()));

    let play_class = move || match ctx.shell.get() {
        ShellPersona::Bash => css::playBash,
        ShellPersona::PowerShell => css::playPs,
    };

    move || {
        next.get().map(|action| {
            let target = action.view;
            view! {
                <div class=css::nextAction>
                    <div class=css::caption>"Suggested Next Action"</div>
                    <button class=css::nextButton on:click=move |_| ctx.set_view(target)>
                        <div class=css::nextRow>
                            <span class=play_class>
                                <Icon icon=ic::PLAY />
                            </span>
                            <span class=css::nextCommand>
                                <span class=css::nextPrompt>{action.prompt}</span>
                                <span class=css::nextInvocation>{action.invocation}</span>
                                <span class=css::nextCursor></span>
                            </span>
                        </div>
                        <div class=css::nextHint>"Click to execute next script..."</div>
                    </button>
                </div>
            }
        })
    }
}
