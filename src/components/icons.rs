//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use shellfolio_core::{ActiveView, ThemeMode};

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuAward as Award, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuDatabase as Database, LuDownload as Download, LuExternalLink as ExternalLink,
        LuFileCode as FileCode, LuFileText as FileText, LuFolder as Folder, LuHouse as Home,
        LuMail as Mail, LuMenu as Menu, LuMoon as Moon, LuPlay as Play, LuServer as Server,
        LuShield as Shield, LuSun as Sun, LuTerminal as Terminal, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsAward as Award, BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDatabase as Database, BsDownload as Download,
        BsEnvelope as Mail, BsFileEarmarkCode as FileCode, BsFileEarmarkText as FileText,
        BsFolderFill as Folder, BsHddStack as Server, BsHouseFill as Home, BsList as Menu,
        BsMoon as Moon, BsPerson as User, BsPlayFill as Play, BsShieldLock as Shield,
        BsSun as Sun, BsTerminal as Terminal,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(AWARD, Award);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(DATABASE, Database);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(HOME, Home);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(MOON, Moon);
themed_icon!(PLAY, Play);
themed_icon!(SERVER, Server);
themed_icon!(SHIELD, Shield);
themed_icon!(SUN, Sun);
themed_icon!(TERMINAL, Terminal);
themed_icon!(USER, User);

/// Sidebar icon of a view.
pub fn view_icon(view: ActiveView) -> Icon {
    match view {
        ActiveView::Home => HOME,
        ActiveView::About => USER,
        ActiveView::Experience => SERVER,
        ActiveView::Projects => FILE_CODE,
        ActiveView::Certifications => AWARD,
        ActiveView::Skills => DATABASE,
        ActiveView::Contact => MAIL,
        ActiveView::Resume => FILE_TEXT,
    }
}

/// Toolbar icon of a theme.
pub fn theme_icon(theme: ThemeMode) -> Icon {
    if theme.is_dark() { MOON } else { SUN }
}
