//! Data models for the application.
//!
//! - [`ShellPersona`] - Which command-line style the site imitates
//! - [`ThemeMode`] - Light/dark color scheme
//! - [`ActiveView`] - Named content sections and their hash routes

mod shell;
mod theme;
mod view;

pub use shell::{BootLine, ShellPersona};
pub use theme::ThemeMode;
pub use view::{ActiveView, UnknownView};
