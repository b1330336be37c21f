//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use shellfolio_core::ThemeMode;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Add or remove a class on the document root element.
///
/// Returns `true` if the class list was updated.
pub fn set_root_class(class: &str, enabled: bool) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .is_some_and(|root| root.class_list().toggle_with_force(class, enabled).is_ok())
}

/// Reflect the theme on the document root.
pub fn apply_theme(theme: ThemeMode) {
    if !set_root_class(ThemeMode::ROOT_CLASS, theme.is_dark()) {
        web_sys::console::warn_1(&"theme: document root unavailable".into());
    }
}

/// Scroll the window back to the origin.
pub fn scroll_window_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window()
        && let Err(err) = window.location().reload()
    {
        web_sys::console::warn_2(&"reload failed".into(), &err);
    }
}
