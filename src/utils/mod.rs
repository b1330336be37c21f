//! Browser utilities.
//!
//! - [`dom`] - Window, document root and URL hash access
//! - [`platform`] - User agent and color-scheme preference
//! - [`TimerSlot`] - Cancellable single-slot timeout

pub mod dom;
pub mod platform;
mod timer;

pub use timer::TimerSlot;
