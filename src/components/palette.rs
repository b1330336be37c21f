//! Persona and theme color classes.

use shellfolio_core::content::{Accent, Surface};

stylance::import_crate_style!(css, "src/components/palette.module.css");

/// Background, foreground and border scheme of the whole screen.
pub fn surface_class(surface: Surface) -> &'static str {
    match surface {
        Surface::Terminal => css::terminal,
        Surface::Console => css::console,
        Surface::Paper => css::paper,
    }
}

/// Highlight color for headings and markers.
pub fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Green => css::accentGreen,
        Accent::Yellow => css::accentYellow,
        Accent::Forest => css::accentForest,
        Accent::Amber => css::accentAmber,
    }
}
