//! Per-view page bodies.
//!
//! Every body is built once per mount from the profile. Blocks are wrapped
//! in [`AnimatedBlock`] with the delays computed by the core renderer; only
//! persona-dependent colors stay reactive.

use leptos::prelude::*;
use leptos_icons::Icon;
use shellfolio_core::content::{
    Accent, Body, Certification, Contact, Job, Project, Resume, SkillGroup, Staged,
};
use shellfolio_core::ShellPersona;

use crate::components::anim::AnimatedBlock;
use crate::components::icons as ic;
use crate::components::palette::accent_class;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Build the view for `body`. `shell` picks the contact action style and
/// `accent` the highlight color.
pub fn body_view(
    body: Body<'_>,
    shell: Signal<ShellPersona>,
    accent: Signal<Accent>,
) -> AnyView {
    match body {
        Body::Home {
            status,
            name,
            headline,
            tagline,
        } => home(
            status.map(str::to_string),
            name.map(|name| (format!("{} ", name.first), name.last.clone())),
            headline.map(str::to_string),
            tagline.map(str::to_string),
            accent,
        ),
        Body::About(text) => about(text.map(str::to_string)),
        Body::Experience(jobs) => experience(owned(jobs), accent),
        Body::Projects(projects) => projects_grid(owned(projects), accent),
        Body::Certifications(certs) => certifications(owned(certs), accent),
        Body::Skills(groups) => skills(owned(groups), accent),
        Body::Contact(contact) => contact_card(contact.map(Contact::clone), shell),
        Body::Resume(resume) => resume_card(resume.map(Resume::clone)),
    }
}

/// Owned copies of borrowed items, so the views can be `'static`.
fn owned<T: Clone>(items: Vec<Staged<&T>>) -> Vec<Staged<T>> {
    items.into_iter().map(|s| s.map(T::clone)).collect()
}

fn accent_of(accent: Signal<Accent>) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    move || accent_class(accent.get())
}

// ============================================================================
// Views
// ============================================================================

fn home(
    status: Staged<String>,
    name: Staged<(String, String)>,
    headline: Staged<String>,
    tagline: Staged<String>,
    accent: Signal<Accent>,
) -> AnyView {
    let accent = accent_of(accent);
    let (first, last) = name.item;
    let quote = format!("\"{}\"", tagline.item);

    view! {
        <div class=css::home>
            <div class=css::homeStatus>
                <AnimatedBlock delay_ms=status.delay_ms>{status.item}</AnimatedBlock>
            </div>
            <h1 class=css::homeName>
                <AnimatedBlock delay_ms=name.delay_ms>
                    <span>{first}</span>
                    <span class=accent>{last}</span>
                </AnimatedBlock>
            </h1>
            <div class=css::homeHeadline>
                <AnimatedBlock delay_ms=headline.delay_ms>{headline.item}</AnimatedBlock>
            </div>
            <div class=css::homeTagline>
                <AnimatedBlock delay_ms=tagline.delay_ms>{quote}</AnimatedBlock>
            </div>
        </div>
    }
    .into_any()
}

fn about(text: Staged<String>) -> AnyView {
    view! {
        <AnimatedBlock delay_ms=text.delay_ms>
            <div class=css::card>
                <p class=css::prose>{text.item}</p>
            </div>
        </AnimatedBlock>
    }
    .into_any()
}

fn experience(jobs: Vec<Staged<Job>>, accent: Signal<Accent>) -> AnyView {
    let accent = accent_of(accent);
    let entries = jobs
        .into_iter()
        .map(|Staged { delay_ms, item }| {
            let Job {
                company,
                period,
                role,
                highlights,
            } = item;
            let meta = format!("{period} | {role}");
            view! {
                <AnimatedBlock delay_ms=delay_ms>
                    <div class=css::job>
                        <span class=css::jobMarker></span>
                        <h3 class=move || format!("{} {}", css::heading, accent())>{company}</h3>
                        <p class=css::meta>{meta}</p>
                        <div class=css::card>
                            <ul class=css::bullets>
                                {highlights
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </AnimatedBlock>
            }
        })
        .collect_view();

    view! { <div class=css::timeline>{entries}</div> }.into_any()
}

fn projects_grid(projects: Vec<Staged<Project>>, accent: Signal<Accent>) -> AnyView {
    let accent = accent_of(accent);
    let cards = projects
        .into_iter()
        .map(|Staged { delay_ms, item }| {
            let Project {
                name,
                kind,
                summary,
                tags,
                url,
            } = item;
            let link = url.map(|url| {
                view! {
                    <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                        <Icon icon=ic::EXTERNAL_LINK />
                        "source"
                    </a>
                }
            });
            view! {
                <AnimatedBlock delay_ms=delay_ms>
                    <div class=css::project>
                        <div class=css::projectTitle>
                            <span class=accent>
                                <Icon icon=ic::TERMINAL />
                            </span>
                            <h3 class=css::heading>{name}</h3>
                        </div>
                        <p class=css::kind>{kind}</p>
                        <p class=css::summary>{summary}</p>
                        <div class=css::tags>
                            {tags
                                .into_iter()
                                .map(|tag| view! { <span class=css::tag>{tag}</span> })
                                .collect_view()}
                            {link}
                        </div>
                    </div>
                </AnimatedBlock>
            }
        })
        .collect_view();

    view! { <div class=css::grid2>{cards}</div> }.into_any()
}

fn certifications(certs: Vec<Staged<Certification>>, accent: Signal<Accent>) -> AnyView {
    if certs.is_empty() {
        return view! { <p class=css::empty>"No packages installed."</p> }.into_any();
    }

    let accent = accent_of(accent);
    let rows = certs
        .into_iter()
        .map(|Staged { delay_ms, item }| {
            let Certification {
                name,
                issuer,
                status,
            } = item;
            let status = format!("[{status}]");
            view! {
                <AnimatedBlock delay_ms=delay_ms>
                    <div class=css::package>
                        <span class=accent>{name}</span>
                        <span class=css::issuer>{format!("/{issuer}")}</span>
                        <span class=css::status>{status}</span>
                    </div>
                </AnimatedBlock>
            }
        })
        .collect_view();

    view! {
        <div class=css::card>
            <p class=css::listing>"Listing... Done"</p>
            {rows}
        </div>
    }
    .into_any()
}

fn skills(groups: Vec<Staged<SkillGroup>>, accent: Signal<Accent>) -> AnyView {
    let accent = accent_of(accent);
    let columns = groups
        .into_iter()
        .map(|Staged { delay_ms, item }| {
            let SkillGroup { title, items } = item;
            view! {
                <AnimatedBlock delay_ms=delay_ms>
                    <div class=css::card>
                        <h4 class=move || format!("{} {}", css::groupTitle, accent())>{title}</h4>
                        <ul class=css::skillList>
                            {items
                                .into_iter()
                                .map(|skill| {
                                    let marker = skill
                                        .marker
                                        .map(|m| view! { <span class=css::marker>{m}</span> " " });
                                    view! { <li>{marker}{skill.name}</li> }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </AnimatedBlock>
            }
        })
        .collect_view();

    view! { <div class=css::grid3>{columns}</div> }.into_any()
}

fn contact_card(contact: Staged<Contact>, shell: Signal<ShellPersona>) -> AnyView {
    let Staged { delay_ms, item } = contact;
    let mailto = item.mailto();
    let Contact {
        pitch,
        action,
        links,
        ..
    } = item;

    let action_class = move || match shell.get() {
        ShellPersona::Bash => format!("{} {}", css::action, css::actionBash),
        ShellPersona::PowerShell => format!("{} {}", css::action, css::actionPs),
    };
    let links = links
        .into_iter()
        .map(|link| {
            view! {
                <a class=css::link href=link.url target="_blank" rel="noopener noreferrer">
                    <Icon icon=ic::EXTERNAL_LINK />
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <AnimatedBlock delay_ms=delay_ms>
            <div class=css::contact>
                <p class=css::pitch>{pitch}</p>
                <a class=action_class href=mailto>{action}</a>
                <div class=css::links>{links}</div>
            </div>
        </AnimatedBlock>
    }
    .into_any()
}

fn resume_card(resume: Staged<Resume>) -> AnyView {
    let Staged { delay_ms, item } = resume;
    let Resume { file, url, summary } = item;

    view! {
        <AnimatedBlock delay_ms=delay_ms>
            <div class=css::card>
                <div class=css::projectTitle>
                    <Icon icon=ic::FILE_TEXT />
                    <h3 class=css::heading>{file.clone()}</h3>
                </div>
                <p class=css::summary>{summary}</p>
                <a class=css::download href=url download=file>
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </a>
            </div>
        </AnimatedBlock>
    }
    .into_any()
}
