//! Shell persona and its display strings.

use serde::{Deserialize, Serialize};

/// Cosmetic command-line style used for prompts, commands and boot logs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellPersona {
    /// Bash-like persona (default)
    #[default]
    Bash,
    /// PowerShell-like persona
    PowerShell,
}

const BASH_BOOT_LOG: &[&str] = &[
    "[ OK ] Started Kernel Random Number Generator.",
    "[ OK ] Created slice User and Session Slice.",
    "[ OK ] Started Session 1 of user root.",
    "[ OK ] Reached target Sound Card.",
    "[ OK ] Started User Manager for UID 0...",
    "Mounting /sys/kernel/security...",
    "[ OK ] Mounted /sys/kernel/security.",
    "[ OK ] Started Dispatch Password Requests to Console Directory Watch.",
    "Loading user configuration...",
    "Initializing shell environment...",
    "Connection established.",
];

const POWERSHELL_BOOT_LOG: &[&str] = &[
    "Loading System.Management.Automation...",
    "Preparing modules for first use...",
    "Loading provider: Microsoft.PowerShell.Core",
    "Loading provider: Microsoft.PowerShell.Security",
    "Checking Security Context... Privileged",
    "Initializing User Profile...",
    "Importing ActiveDirectory module...",
    "Importing PSScheduledJob module...",
    "Setting location to C:\\Users\\Administrator",
    "WinRM service is listening on HTTP.",
    "Session ready.",
];

const BASH_BOOT_HEADER: &[&str] = &[
    "TechFixer Linux Kernel v6.8.1-generic",
    "Copyright (c) 1991-2024 TechFixer Labs, Inc.",
    "Booting system...",
];

const POWERSHELL_BOOT_HEADER: &[&str] = &[
    "Windows PowerShell",
    "Copyright (C) Microsoft Corporation. All rights reserved.",
    "Boot Sequence Initiated...",
];

impl ShellPersona {
    /// Pick the default persona from the platform identification string.
    ///
    /// Windows platforms get PowerShell; everything else, including an
    /// unavailable signal, gets Bash.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains("Win") => Self::PowerShell,
            _ => Self::Bash,
        }
    }

    /// The other persona.
    pub fn toggled(self) -> Self {
        match self {
            Self::Bash => Self::PowerShell,
            Self::PowerShell => Self::Bash,
        }
    }

    pub fn is_bash(self) -> bool {
        self == Self::Bash
    }

    /// Prompt shown before every command.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Bash => "root@techfixerlab:~$",
            Self::PowerShell => "PS C:\\Users\\Administrator>",
        }
    }

    /// Prompt used by the compact "next action" suggestion.
    pub fn mobile_prompt(self) -> &'static str {
        match self {
            Self::Bash => "root@mobile:~$",
            Self::PowerShell => "PS C:\\Users\\Mobile>",
        }
    }

    /// Ordered log lines played during boot.
    pub fn boot_log(self) -> &'static [&'static str] {
        match self {
            Self::Bash => BASH_BOOT_LOG,
            Self::PowerShell => POWERSHELL_BOOT_LOG,
        }
    }

    /// Static header printed above the boot log.
    pub fn boot_header(self) -> &'static [&'static str] {
        match self {
            Self::Bash => BASH_BOOT_HEADER,
            Self::PowerShell => POWERSHELL_BOOT_HEADER,
        }
    }

    /// Toolbar title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Bash => "BASH_TERMINAL",
            Self::PowerShell => "POWERSHELL_ADMIN",
        }
    }

    /// Short label for the persona switch.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Bash => "SH",
            Self::PowerShell => "PS",
        }
    }

    /// Script file extension shown next to navigation entries.
    pub fn script_extension(self) -> &'static str {
        match self {
            Self::Bash => ".sh",
            Self::PowerShell => ".ps1",
        }
    }

    /// Root folder shown in the sidebar.
    pub fn scripts_root(self) -> &'static str {
        match self {
            Self::Bash => "root/scripts",
            Self::PowerShell => "C:\\Users\\Admin\\Scripts",
        }
    }

    /// Permission string shown in the footer.
    pub fn mode_label(self) -> &'static str {
        match self {
            Self::Bash => "drwx------",
            Self::PowerShell => "Administrator",
        }
    }
}

/// A boot log line split into its optional status tag and message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootLine<'a> {
    /// Status tag such as `[ OK ]`
    pub status: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> BootLine<'a> {
    const OK_TAG: &'static str = "[ OK ]";

    pub fn parse(line: &'a str) -> Self {
        match line.strip_prefix(Self::OK_TAG) {
            Some(rest) => Self {
                status: Some(Self::OK_TAG),
                message: rest.trim(),
            },
            None => Self {
                status: None,
                message: line,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_from_user_agent() {
        let windows = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15";
        let linux = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

        assert_eq!(ShellPersona::from_user_agent(Some(windows)), ShellPersona::PowerShell);
        assert_eq!(ShellPersona::from_user_agent(Some(mac)), ShellPersona::Bash);
        assert_eq!(ShellPersona::from_user_agent(Some(linux)), ShellPersona::Bash);
        assert_eq!(ShellPersona::from_user_agent(None), ShellPersona::Bash);
    }

    #[test]
    fn test_toggle_round_trip() {
        for persona in [ShellPersona::Bash, ShellPersona::PowerShell] {
            assert_ne!(persona.toggled(), persona);
            assert_eq!(persona.toggled().toggled(), persona);
        }
    }

    #[test]
    fn test_boot_logs_are_distinct_per_persona() {
        let bash = ShellPersona::Bash.boot_log();
        let ps = ShellPersona::PowerShell.boot_log();
        assert_eq!(bash.len(), 11);
        assert_eq!(ps.len(), 11);
        assert_eq!(bash.last(), Some(&"Connection established."));
        assert_eq!(ps.last(), Some(&"Session ready."));
    }

    #[test]
    fn test_boot_line_parse() {
        let ok = BootLine::parse("[ OK ] Reached target Sound Card.");
        assert_eq!(ok.status, Some("[ OK ]"));
        assert_eq!(ok.message, "Reached target Sound Card.");

        let plain = BootLine::parse("Mounting /sys/kernel/security...");
        assert_eq!(plain.status, None);
        assert_eq!(plain.message, "Mounting /sys/kernel/security...");
    }
}
