use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub typing: Typing,
}

/// Roles cycled by the typing effect under the name.
#[derive(Deserialize, Clone, Debug)]
pub struct Typing {
    pub roles: Vec<String>,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u32,
    #[serde(default = "default_speed")]
    pub speed: u32,
}

fn default_pause_ms() -> u32 {
    2000
}

fn default_speed() -> u32 {
    50
}

impl Typing {
    pub fn roles_attr(&self) -> String {
        self.roles.join("|")
    }

    pub fn first_role(&self) -> &str {
        self.roles.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct NavItem(pub String);

impl NavItem {
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn anchor(&self) -> String {
        self.0.to_lowercase()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Link {
    pub label: String,
    pub text: String,
    pub href: String,
    pub icon: String,
}

impl Link {
    /// External links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Resume {
    pub label: String,
    pub href: String,
    pub filename: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct About {
    pub heading: String,
    pub subheading: String,
    pub paragraphs: Vec<String>,
    pub photo: String,
    pub photo_alt: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Headings {
    pub skills: String,
    pub certifications: String,
    pub projects: String,
    pub experience: String,
    pub contact: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(
    Deserialize, EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Default,
)]
pub enum Status {
    #[default]
    Completed,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Ongoing,
}

impl Status {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Status::Completed => "badge-green",
            Status::InProgress => "badge-yellow",
            Status::Ongoing => "badge-blue",
        }
    }
}

/// Two-stop accent drawn on top of a card.
#[derive(Deserialize, Clone, Debug)]
pub struct Accent {
    pub from: String,
    pub to: String,
}

impl Accent {
    pub fn css(&self) -> String {
        format!("linear-gradient(90deg, {}, {})", self.from, self.to)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub status: Status,
    pub accent: Accent,
}

impl Certification {
    /// Certifications only tell finished from not finished yet.
    pub fn badge_class(&self) -> &'static str {
        match self.status {
            Status::Completed => "badge-green",
            Status::InProgress | Status::Ongoing => "badge-yellow",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tools: Vec<String>,
    pub status: Status,
    pub accent: Accent,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub kind: String,
}

impl TimelineEntry {
    pub fn badge_class(&self) -> &'static str {
        match self.kind.as_str() {
            "education" => "badge-blue",
            "learning" => "badge-green",
            _ => "badge-purple",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ContactSection {
    pub intro: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Footer {
    pub text: String,
}

/// A dot of the hero background. Positions are deterministic so the page
/// renders identically on every request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub duration: u32,
    pub delay: f64,
}

impl Particle {
    pub fn nth(i: usize) -> Self {
        let n = i as f64;

        Self {
            left: (n * 7.3) % 100.0,
            top: (n * 11.7) % 100.0,
            duration: (i % 3) as u32 + 2,
            delay: (i % 5) as f64 * 0.4,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {}s; animation-delay: {:.1}s",
            self.left, self.top, self.duration, self.delay
        )
    }
}
