//! Platform-independent core of the shellfolio site.
//!
//! - [`models`] - Shell persona, theme mode and view enumerations
//! - [`anim`] - Timed reveal, typewriter and boot log state machines
//! - [`state`] - View/theme state and platform-signal defaults
//! - [`content`] - Profile data and the per-view renderer
//! - [`error`] - Error types shared with the web crate

pub mod anim;
pub mod content;
pub mod error;
pub mod models;
pub mod state;

pub use anim::{
    Advance, Animation, BootLogPlayer, Phase, RevealTimer, Schedule, Ticket, Timer, Typewriter,
};
pub use content::{Page, Profile, render};
pub use error::{ContentError, ContextError};
pub use models::{ActiveView, ShellPersona, ThemeMode};
pub use state::{AppState, PlatformSignals};
