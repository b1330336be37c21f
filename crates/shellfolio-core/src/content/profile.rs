//! Static profile data shown by the content views.

use serde::Deserialize;

use crate::error::ContentError;

/// Everything the portfolio displays, loaded from a TOML document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: PersonName,
    pub home: HomeCopy,
    pub about: String,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    pub resume: Resume,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Lines of the landing view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomeCopy {
    pub status: String,
    pub headline: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub company: String,
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub kind: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Short file-extension style marker, e.g. `.py`
    pub marker: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub pitch: String,
    pub action: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Resume {
    pub file: String,
    pub url: String,
    pub summary: String,
}

impl Profile {
    /// Parse and validate a profile document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let profile: Profile = toml::from_str(source)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.name.first.trim().is_empty() {
            return Err(ContentError::EmptySection("name.first"));
        }
        if self.about.trim().is_empty() {
            return Err(ContentError::EmptySection("about"));
        }
        if self.skills.iter().any(|g| g.items.is_empty()) {
            return Err(ContentError::EmptySection("skills.items"));
        }
        Ok(())
    }
}
