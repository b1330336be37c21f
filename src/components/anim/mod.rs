//! Animated building blocks.
//!
//! - [`AnimatedBlock`] - Fade children in after a delay
//! - [`TypewriterText`] - Reveal text one character at a time
//! - [`hooks`] - The reactive hooks both are built on
//! - [`Driven`] - Runs a core animation against browser timers

mod animated_block;
pub mod driver;
pub mod hooks;
mod typewriter;

pub use animated_block::AnimatedBlock;
pub use driver::Driven;
pub use typewriter::TypewriterText;
