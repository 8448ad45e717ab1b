//! Portfolio content.
//!
//! The sections shown by the UI are plain data. A `content.yml` next to the
//! configuration replaces the built-in sample profile.

use crate::config::ConfigError;
use log::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const FILE_NAME: &str = "content.yml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Everything rendered by the section views.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub competencies: Vec<Competency>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Portfolio {
            profile: Profile {
                name: "Alex Morgan".to_string(),
                title: "Software Engineer".to_string(),
                tagline: "Building reliable tools for people who live in the terminal.".to_string(),
                location: "Remote".to_string(),
                email: "alex@example.com".to_string(),
                links: vec![
                    Link {
                        label: "GitHub".to_string(),
                        url: "https://github.com/example".to_string(),
                    },
                    Link {
                        label: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/in/example".to_string(),
                    },
                ],
            },
            about: strings(&[
                "I enjoy turning fuzzy requirements into small, well-tested programs.",
                "Most of my work sits between backend services and the tools developers use every day.",
            ]),
            projects: vec![
                Project {
                    title: "Task Board".to_string(),
                    description: "Keyboard-driven kanban client for a hosted project tracker.".to_string(),
                    tech: strings(&["Rust", "ratatui", "reqwest"]),
                    link: Some("https://github.com/example/task-board".to_string()),
                },
                Project {
                    title: "Log Lens".to_string(),
                    description: "Structured log viewer with live filtering.".to_string(),
                    tech: strings(&["Rust", "tokio"]),
                    link: None,
                },
            ],
            education: vec![Education {
                institution: "State University".to_string(),
                degree: "B.Sc. Computer Science".to_string(),
                period: "2014 - 2018".to_string(),
                details: Some("Focus on distributed systems.".to_string()),
            }],
            competencies: vec![
                Competency {
                    title: "API Design".to_string(),
                    description: "Small, predictable interfaces with clear error contracts.".to_string(),
                },
                Competency {
                    title: "Testing".to_string(),
                    description: "Fast unit tests around pure state transitions.".to_string(),
                },
            ],
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    skills: strings(&["Rust", "TypeScript", "SQL"]),
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    skills: strings(&["Git", "Docker", "PostgreSQL"]),
                },
            ],
        }
    }
}

impl Portfolio {
    /// Load `content.yml` from the directory, or the built-in sample if the
    /// file does not exist.
    ///
    pub fn load(dir_path: &Path) -> Result<Portfolio, ConfigError> {
        let file_path = dir_path.join(FILE_NAME);
        if !file_path.exists() {
            debug!("No {} found; using sample content.", FILE_NAME);
            return Ok(Portfolio::default());
        }
        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Same as `load`, but an unreadable file falls back to the sample.
    ///
    pub fn load_or_default(dir_path: &Path) -> Portfolio {
        Portfolio::load(dir_path).unwrap_or_else(|e| {
            warn!("Failed to load {}; using sample content: {}", FILE_NAME, e);
            Portfolio::default()
        })
    }
}
