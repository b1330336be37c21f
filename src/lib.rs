//! Terminal-styled portfolio site.
//!
//! A client-side Leptos app that boots through a fake system log and then
//! presents a profile as shell scripts, in a Bash or PowerShell persona with
//! a dark or light theme. Timing and content logic live in
//! `shellfolio-core`; this crate drives them from browser timers and
//! renders the result.
//!
//! - [`app`] - Root component and the shared [`AppContext`]
//! - [`components`] - Boot screen, layout, content views and animations
//! - [`config`] - Constants and the embedded profile
//! - [`utils`] - DOM access, platform signals and the timer slot

pub mod app;
pub mod components;
pub mod config;
pub mod utils;

pub use app::{App, AppContext, use_app_context};
