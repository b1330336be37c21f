//! View/theme state and its platform-derived defaults.

use crate::models::{ActiveView, ShellPersona, ThemeMode};

/// Best-effort platform signals, read once at start-up.
///
/// `None` means the signal was unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformSignals {
    /// Coarse platform identification (the browser user agent).
    pub user_agent: Option<String>,
    /// Whether the display prefers a light color scheme.
    pub prefers_light: Option<bool>,
}

/// The active view, shell persona and theme mode.
///
/// Plain values; the web crate wraps each field in a signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ActiveView,
    pub shell: ShellPersona,
    pub theme: ThemeMode,
}

impl AppState {
    /// Initial state: persona and theme from the platform, home view.
    pub fn from_platform(signals: &PlatformSignals) -> Self {
        Self {
            view: ActiveView::Home,
            shell: ShellPersona::from_user_agent(signals.user_agent.as_deref()),
            theme: ThemeMode::from_prefers_light(signals.prefers_light),
        }
    }

    pub fn with_view(mut self, view: ActiveView) -> Self {
        self.view = view;
        self
    }
}

/// Reports a value only when it differs from the last one observed.
///
/// Drives side effects that must run exactly once per transition, such as
/// applying the theme class to the document root.
#[derive(Clone, Debug, Default)]
pub struct Transitions<T> {
    last: Option<T>,
}

impl<T: Copy + PartialEq> Transitions<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `value`; returns it if it is a change (the first value counts).
    pub fn observe(&mut self, value: T) -> Option<T> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_signals() {
        let state = AppState::from_platform(&PlatformSignals::default());
        assert_eq!(state.view, ActiveView::Home);
        assert_eq!(state.shell, ShellPersona::Bash);
        assert_eq!(state.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_defaults_from_windows_light_platform() {
        let signals = PlatformSignals {
            user_agent: Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()),
            prefers_light: Some(true),
        };
        let state = AppState::from_platform(&signals);
        assert_eq!(state.shell, ShellPersona::PowerShell);
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_transitions_fire_once_per_change() {
        let mut watch = Transitions::new();
        assert_eq!(watch.observe(ThemeMode::Dark), Some(ThemeMode::Dark));
        assert_eq!(watch.observe(ThemeMode::Dark), None);
        assert_eq!(watch.observe(ThemeMode::Light), Some(ThemeMode::Light));
        assert_eq!(watch.observe(ThemeMode::Light), None);
        assert_eq!(watch.observe(ThemeMode::Dark), Some(ThemeMode::Dark));
    }
}
