use chrono::Datelike;
use serde::Deserialize;

use crate::components::icon::IconKind;
use crate::error::PortfolioError;

const EMBEDDED: &str = include_str!("../assets/portfolio.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn summary(&self) -> String {
        self.items.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Projects {
    pub heading: String,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub label: String,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Blue,
    Green,
    Purple,
    Gray,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Blue => "tag-blue",
            Tone::Green => "tag-green",
            Tone::Purple => "tag-purple",
            Tone::Gray => "tag-gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub body: String,
    pub cta_label: String,
    /// The call to action is inert unless a link is configured.
    pub cta_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub owner: String,
    pub year: Option<i32>,
}

impl Footer {
    pub fn copyright(&self) -> String {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        format!("© {} {}. All rights reserved.", year, self.owner)
    }
}

impl Portfolio {
    pub fn embedded() -> Result<Self, PortfolioError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(json)?)
    }
}
