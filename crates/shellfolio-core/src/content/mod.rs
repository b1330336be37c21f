//! Portfolio content and the per-view renderer.

mod page;
mod profile;

pub use page::{Accent, Body, CommandLine, NextAction, Page, Staged, Stagger, Surface, render};
pub use profile::{
    Certification, Contact, HomeCopy, Job, Link, PersonName, Profile, Project, Resume, Skill,
    SkillGroup,
};
