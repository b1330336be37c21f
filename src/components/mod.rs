//! UI components built with Leptos.
//!
//! - [`router`] - Boot-then-layout switch and URL hash sync (main entry point)
//! - [`boot`] - Boot sequence screen
//! - [`layout`] - Sidebar, toolbar and content column
//! - [`content`] - Command bar and per-view pages
//! - [`anim`] - Delayed reveal and typewriter building blocks
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`palette`] - Persona and theme color classes

pub mod anim;
pub mod boot;
pub mod content;
pub mod icons;
pub mod layout;
pub mod palette;
pub mod router;

pub use router::AppRouter;
