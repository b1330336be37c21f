//! Pure mapping from (view, persona, theme) to the content to display.
//!
//! The body depends only on the view and the profile, so animated blocks
//! keyed to the view survive persona and theme toggles. Everything that
//! depends on persona or theme is split out ([`CommandLine`], [`Surface`],
//! [`Accent`], [`NextAction`]) so the renderer can update it in place.

use super::profile::{Certification, Contact, Job, PersonName, Profile, Project, Resume, SkillGroup};
use crate::models::{ActiveView, ShellPersona, ThemeMode};

/// An item paired with the delay before its reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Staged<T> {
    pub delay_ms: u32,
    pub item: T,
}

impl<T> Staged<T> {
    /// Transform the item, keeping its delay.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Staged<U> {
        Staged {
            delay_ms: self.delay_ms,
            item: f(self.item),
        }
    }
}

/// Linear reveal schedule: first item after `first_ms`, then every `step_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub first_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(first_ms: u32, step_ms: u32) -> Self {
        Self { first_ms, step_ms }
    }

    pub fn delay(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.first_ms
            .saturating_add(self.step_ms.saturating_mul(index))
    }

    pub fn stage<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<Staged<T>> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Staged {
                delay_ms: self.delay(i),
                item,
            })
            .collect()
    }

    fn single<T>(&self, item: T) -> Staged<T> {
        Staged {
            delay_ms: self.first_ms,
            item,
        }
    }
}

impl ActiveView {
    /// Reveal schedule of the view's blocks.
    pub fn stagger(self) -> Stagger {
        match self {
            Self::Home => Stagger::new(500, 300),
            Self::About | Self::Contact | Self::Resume => Stagger::new(800, 0),
            Self::Experience => Stagger::new(800, 600),
            Self::Projects => Stagger::new(800, 400),
            Self::Certifications | Self::Skills => Stagger::new(800, 300),
        }
    }
}

/// Landing view delays: status, name, headline, tagline.
const HOME_DELAYS_MS: [u32; 4] = [500, 800, 1500, 2200];

/// View-specific content block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body<'a> {
    Home {
        status: Staged<&'a str>,
        name: Staged<&'a PersonName>,
        headline: Staged<&'a str>,
        tagline: Staged<&'a str>,
    },
    About(Staged<&'a str>),
    Experience(Vec<Staged<&'a Job>>),
    Projects(Vec<Staged<&'a Project>>),
    Certifications(Vec<Staged<&'a Certification>>),
    Skills(Vec<Staged<&'a SkillGroup>>),
    Contact(Staged<&'a Contact>),
    Resume(Staged<&'a Resume>),
}

impl<'a> Body<'a> {
    pub fn for_view(profile: &'a Profile, view: ActiveView) -> Self {
        let stagger = view.stagger();
        match view {
            ActiveView::Home => {
                let [status, name, headline, tagline] = HOME_DELAYS_MS;
                Self::Home {
                    status: Staged {
                        delay_ms: status,
                        item: profile.home.status.as_str(),
                    },
                    name: Staged {
                        delay_ms: name,
                        item: &profile.name,
                    },
                    headline: Staged {
                        delay_ms: headline,
                        item: profile.home.headline.as_str(),
                    },
                    tagline: Staged {
                        delay_ms: tagline,
                        item: profile.home.tagline.as_str(),
                    },
                }
            }
            ActiveView::About => Self::About(stagger.single(profile.about.as_str())),
            ActiveView::Experience => Self::Experience(stagger.stage(&profile.experience)),
            ActiveView::Projects => Self::Projects(stagger.stage(&profile.projects)),
            ActiveView::Certifications => {
                Self::Certifications(stagger.stage(&profile.certifications))
            }
            ActiveView::Skills => Self::Skills(stagger.stage(&profile.skills)),
            ActiveView::Contact => Self::Contact(stagger.single(&profile.contact)),
            ActiveView::Resume => Self::Resume(stagger.single(&profile.resume)),
        }
    }

    pub fn view(&self) -> ActiveView {
        match self {
            Self::Home { .. } => ActiveView::Home,
            Self::About(_) => ActiveView::About,
            Self::Experience(_) => ActiveView::Experience,
            Self::Projects(_) => ActiveView::Projects,
            Self::Certifications(_) => ActiveView::Certifications,
            Self::Skills(_) => ActiveView::Skills,
            Self::Contact(_) => ActiveView::Contact,
            Self::Resume(_) => ActiveView::Resume,
        }
    }

    /// Reveal delays of every animated block, in display order.
    pub fn delays(&self) -> Vec<u32> {
        fn of<T>(items: &[Staged<T>]) -> Vec<u32> {
            items.iter().map(|s| s.delay_ms).collect()
        }
        match self {
            Self::Home {
                status,
                name,
                headline,
                tagline,
            } => vec![
                status.delay_ms,
                name.delay_ms,
                headline.delay_ms,
                tagline.delay_ms,
            ],
            Self::About(s) => vec![s.delay_ms],
            Self::Experience(items) => of(items),
            Self::Projects(items) => of(items),
            Self::Certifications(items) => of(items),
            Self::Skills(items) => of(items),
            Self::Contact(s) => vec![s.delay_ms],
            Self::Resume(s) => vec![s.delay_ms],
        }
    }
}

/// Prompt and command typed at the top of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandLine {
    pub prompt: &'static str,
    pub command: &'static str,
}

impl CommandLine {
    pub fn new(view: ActiveView, shell: ShellPersona) -> Self {
        Self {
            prompt: shell.prompt(),
            command: view.command(shell),
        }
    }
}

/// Suggested next script, offered on narrow screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextAction {
    pub view: ActiveView,
    pub prompt: &'static str,
    pub invocation: String,
}

impl NextAction {
    pub fn after(view: ActiveView, shell: ShellPersona) -> Option<Self> {
        let next = view.next()?;
        Some(Self {
            view: next,
            prompt: shell.mobile_prompt(),
            invocation: next.script_invocation(shell),
        })
    }
}

/// Background/foreground scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    /// Near-black with green text (Bash, dark)
    Terminal,
    /// Deep blue console (PowerShell, dark)
    Console,
    /// Light paper, shared by both personas
    Paper,
}

impl Surface {
    pub fn of(shell: ShellPersona, theme: ThemeMode) -> Self {
        match (theme, shell) {
            (ThemeMode::Light, _) => Self::Paper,
            (ThemeMode::Dark, ShellPersona::Bash) => Self::Terminal,
            (ThemeMode::Dark, ShellPersona::PowerShell) => Self::Console,
        }
    }
}

/// Highlight color. Light variants are darker so they stay readable on
/// [`Surface::Paper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Green,
    Yellow,
    Forest,
    Amber,
}

impl Accent {
    pub fn of(shell: ShellPersona, theme: ThemeMode) -> Self {
        match (theme, shell) {
            (ThemeMode::Dark, ShellPersona::Bash) => Self::Green,
            (ThemeMode::Dark, ShellPersona::PowerShell) => Self::Yellow,
            (ThemeMode::Light, ShellPersona::Bash) => Self::Forest,
            (ThemeMode::Light, ShellPersona::PowerShell) => Self::Amber,
        }
    }
}

/// Everything shown in the main area for one view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub view: ActiveView,
    pub command: CommandLine,
    pub body: Body<'a>,
    pub next: Option<NextAction>,
    pub surface: Surface,
    pub accent: Accent,
}

impl Page<'_> {
    /// Key that animated state is bound to; a different key means a fresh block.
    pub fn key(&self) -> &'static str {
        self.view.slug()
    }
}

/// Render the content for `view` under the given persona and theme.
pub fn render(
    profile: &Profile,
    view: ActiveView,
    shell: ShellPersona,
    theme: ThemeMode,
) -> Page<'_> {
    Page {
        view,
        command: CommandLine::new(view, shell),
        body: Body::for_view(profile, view),
        next: NextAction::after(view, shell),
        surface: Surface::of(shell, theme),
        accent: Accent::of(shell, theme),
    }
}
