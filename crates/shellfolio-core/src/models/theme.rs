//! Light/dark theme mode.

use serde::{Deserialize, Serialize};

/// Color scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark scheme (default)
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Class toggled on the document root while the dark scheme is active.
    pub const ROOT_CLASS: &'static str = "dark";

    /// Pick the default mode from the `prefers-color-scheme: light` signal.
    ///
    /// `None` means the signal is unavailable and falls back to dark.
    pub fn from_prefers_light(prefers_light: Option<bool>) -> Self {
        match prefers_light {
            Some(true) => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Short label for the compact theme switch.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Dark => "DARK",
            Self::Light => "LGHT",
        }
    }
}
