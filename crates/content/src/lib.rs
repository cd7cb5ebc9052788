//! The portfolio's static content, loaded once at startup and shared
//! read-only by every request.

mod types;

use std::{collections::HashSet, path::Path};

use config::{Config, File, FileFormat};
use serde::Deserialize;

pub use types::*;

/// Content shipped with the binary.
pub const DEFAULT_PORTFOLIO: &str = include_str!("../portfolio.toml");

/// Ids of the sections rendered by the landing page, in page order.
pub const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "skills",
    "certifications",
    "projects",
    "experience",
    "contact",
];

pub const PARTICLE_COUNT: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Clone, Debug)]
pub struct Portfolio {
    pub meta: Meta,
    pub hero: Hero,
    pub navigation: Vec<NavItem>,
    pub links: Vec<Link>,
    pub resume: Resume,
    pub about: About,
    pub headings: Headings,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl Portfolio {
    /// Loads the embedded content, with the tables of `path` layered on top
    /// when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_PORTFOLIO, FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let portfolio: Portfolio = builder.build()?.try_deserialize()?;
        portfolio.validate()?;

        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.name.trim().is_empty() {
            return Err(ContentError::Invalid("hero.name is empty".to_owned()));
        }

        if self.resume.filename.trim().is_empty() {
            return Err(ContentError::Invalid("resume.filename is empty".to_owned()));
        }

        if let Some(skill) = self
            .skills
            .iter()
            .flat_map(|c| c.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(ContentError::Invalid(format!(
                "skill {} has level {} (max 100)",
                skill.name, skill.level
            )));
        }

        let mut anchors = HashSet::new();
        for item in &self.navigation {
            let anchor = item.anchor();
            if !SECTION_IDS.contains(&anchor.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "navigation item {} has no matching section",
                    item.label()
                )));
            }
            if !anchors.insert(anchor) {
                return Err(ContentError::Invalid(format!(
                    "navigation item {} appears twice",
                    item.label()
                )));
            }
        }

        Ok(())
    }

    pub fn particles(&self) -> Vec<Particle> {
        (0..PARTICLE_COUNT).map(Particle::nth).collect()
    }

    /// Link with the given icon, used for the hero buttons.
    pub fn link(&self, icon: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.icon == icon)
    }
}
