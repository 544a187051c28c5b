//! The portfolio snapshot: who the site is about and what they built.
//!
//! A [`PortfolioSnapshot`] is built once at startup (either the built-in
//! profile or one loaded from a TOML file) and then only ever shared by
//! reference.

mod builtin;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use builtin::builtin;

/// Social profile identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// A named group of skills, e.g. `Frontend: React, TypeScript`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    /// Degree or level, e.g. "B.Tech in Computer Science".
    pub role: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// Immutable description of the portfolio's subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub name: String,
    pub role: String,
    pub about: String,
    pub location: String,
    pub socials: Socials,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub education: Vec<Education>,
}

impl PortfolioSnapshot {
    /// Loads a snapshot from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse portfolio file: {}", path.display()))
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize portfolio")
    }
}
