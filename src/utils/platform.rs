//! One-shot reads of the platform signals that pick the initial persona
//! and theme.

use shellfolio_core::PlatformSignals;

use super::dom::window;
use crate::config::PREFERS_LIGHT_QUERY;

/// Read the user agent and the light-scheme preference.
///
/// Missing APIs yield `None`, which the state layer maps to its defaults.
pub fn read_signals() -> PlatformSignals {
    let Some(window) = window() else {
        return PlatformSignals::default();
    };

    let user_agent = window.navigator().user_agent().ok();
    let prefers_light = window
        .match_media(PREFERS_LIGHT_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches());

    PlatformSignals {
        user_agent,
        prefers_light,
    }
}
