//! Content views and hash-based routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ShellPersona;

/// Named content section shown in the main area.
///
/// URL format: `#/about`, `#/projects`; an empty hash is [`ActiveView::Home`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Certifications,
    Skills,
    Contact,
    Resume,
}

impl ActiveView {
    /// Every view in navigation order.
    pub const ALL: [ActiveView; 8] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Certifications,
        Self::Skills,
        Self::Contact,
        Self::Resume,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Resume => "resume",
        }
    }

    /// Parse a URL hash. Unknown routes fall back to home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        path.parse().unwrap_or_default()
    }

    pub fn to_hash(self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            view => format!("#/{}", view.slug()),
        }
    }

    /// The view after this one in navigation order.
    pub fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|v| *v == self)?;
        Self::ALL.get(index + 1).copied()
    }

    /// Sidebar entry label.
    pub fn nav_label(self, shell: ShellPersona) -> &'static str {
        match (self, shell) {
            (Self::Home, ShellPersona::Bash) => "init.sh",
            (Self::Home, ShellPersona::PowerShell) => "Start-Process",
            (Self::About, ShellPersona::Bash) => "whoami",
            (Self::About, ShellPersona::PowerShell) => "WhoAmI",
            (Self::Experience, ShellPersona::Bash) => "history",
            (Self::Experience, ShellPersona::PowerShell) => "Get-History",
            (Self::Projects, ShellPersona::Bash) => "list_repos",
            (Self::Projects, ShellPersona::PowerShell) => "Get-ChildItem",
            (Self::Certifications, ShellPersona::Bash) => "apt list",
            (Self::Certifications, ShellPersona::PowerShell) => "Get-Package",
            (Self::Skills, ShellPersona::Bash) => "print_env",
            (Self::Skills, ShellPersona::PowerShell) => "Get-Variable",
            (Self::Contact, ShellPersona::Bash) => "contact.sh",
            (Self::Contact, ShellPersona::PowerShell) => "Send-MailMessage",
            (Self::Resume, ShellPersona::Bash) => "wget resume.pdf",
            (Self::Resume, ShellPersona::PowerShell) => "Invoke-WebRequest",
        }
    }

    /// Command typed into the command bar when the view opens.
    pub fn command(self, shell: ShellPersona) -> &'static str {
        match (self, shell) {
            (Self::Home, ShellPersona::Bash) => "./init.sh",
            (Self::Home, ShellPersona::PowerShell) => "Start-Process -FilePath ./init.ps1",
            (Self::About, ShellPersona::Bash) => "cat ./whoami.txt",
            (Self::About, ShellPersona::PowerShell) => "Get-Content .\\WhoAmI.txt",
            (Self::Experience, ShellPersona::Bash) => "./history.sh | grep \"Work\"",
            (Self::Experience, ShellPersona::PowerShell) => "Get-History | Select-String \"Work\"",
            (Self::Projects, ShellPersona::Bash) => "ls -la ./repos",
            (Self::Projects, ShellPersona::PowerShell) => "Get-ChildItem .\\Repos",
            (Self::Certifications, ShellPersona::Bash) => "apt list --installed | grep cert",
            (Self::Certifications, ShellPersona::PowerShell) => "Get-Package -Name *Cert*",
            (Self::Skills, ShellPersona::Bash) => "printenv | grep SKILLS",
            (Self::Skills, ShellPersona::PowerShell) => "Get-Variable -Name Skills",
            (Self::Contact, ShellPersona::Bash) => "./contact.sh --message",
            (Self::Contact, ShellPersona::PowerShell) => "Send-MailMessage -To \"Me\"",
            (Self::Resume, ShellPersona::Bash) => "wget ./resume.pdf",
            (Self::Resume, ShellPersona::PowerShell) => {
                "Invoke-WebRequest -Uri ./resume.pdf -OutFile resume.pdf"
            }
        }
    }

    /// Script invocation used by the "next action" suggestion.
    pub fn script_invocation(self, shell: ShellPersona) -> String {
        let slug = self.slug();
        match shell {
            ShellPersona::Bash => format!("./{}.sh", slug),
            ShellPersona::PowerShell => {
                let mut chars = slug.chars();
                let capitalized: String = chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default();
                format!(".\\Start-{}.ps1", capitalized)
            }
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string names no view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownView;

impl FromStr for ActiveView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.slug().eq_ignore_ascii_case(s))
            .ok_or(UnknownView)
    }
}
