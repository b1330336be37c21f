//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Profile data is loaded at compile time using `include_str!`.

use shellfolio_core::{ContentError, Profile};

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Portfolio profile shown by the content views.
pub const PROFILE_TOML: &str = include_str!("../assets/profile.toml");

/// Parse the embedded profile.
pub fn load_profile() -> Result<Profile, ContentError> {
    Profile::from_toml(PROFILE_TOML)
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Host name shown in prompts and the document title.
pub const APP_NAME: &str = "techfixerlab";

/// Name of the assistant credited in the footer.
pub const ASSISTANT_TAG: &str = "LLM-01";

// =============================================================================
// Animation Timing (milliseconds)
// =============================================================================

/// Boot sequence pacing.
pub mod boot_timing {
    /// Delay between consecutive boot log lines.
    pub const LINE_INTERVAL_MS: u32 = 150;
    /// Pause after the last line before the site appears.
    pub const TRAILING_MS: u32 = 800;
}

/// Per-character delay of the command-line typewriter.
pub const TYPEWRITER_SPEED_MS: u32 = 30;

// =============================================================================
// Media Queries
// =============================================================================

/// Narrow screens get the mobile top bar and the next-action prompt.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

/// Light color-scheme preference, read once at startup.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconTheme {
    /// Lucide icons - clean, minimal line icons
    #[default]
    Lucide,
    /// Bootstrap icons - familiar, versatile icons
    Bootstrap,
}

/// Active icon theme. Change this to switch all icons.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;
    use shellfolio_core::ActiveView;
    use shellfolio_core::content::Body;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = load_profile().unwrap();
        assert!(!profile.name.first.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
    }

    #[test]
    fn test_embedded_profile_covers_every_view() {
        let profile = load_profile().unwrap();
        assert!(!profile.projects.is_empty());
        assert!(!profile.contact.email.is_empty());
        assert!(profile.resume.url.ends_with(".pdf"));
        for view in ActiveView::ALL {
            assert_eq!(Body::for_view(&profile, view).view(), view);
        }
    }

    #[test]
    fn test_embedded_profile_lists_no_certifications() {
        let profile = load_profile().unwrap();
        assert_eq!(
            Body::for_view(&profile, ActiveView::Certifications),
            Body::Certifications(Vec::new())
        );
    }
}
