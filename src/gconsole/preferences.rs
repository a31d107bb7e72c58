use std::collections::HashMap;
use std::ops::Deref;

use log::{debug, info};

/// Preference holding the comma separated project ids.
pub const PROJECTS: &str = "projects";

/// Preference holding the keyword that activates the launcher.
pub const KEYWORD: &str = "keyword";

pub const DEFAULT_KEYWORD: &str = "gcloud";

/// The configured projects in the order the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectList(Vec<String>);

impl ProjectList {
    /// Splits the preference value by comma. Entries are trimmed and empty
    /// entries dropped, duplicates are kept.
    pub fn parse(value: Option<&str>) -> Self {
        let projects = value.unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|project| !project.is_empty())
            .map(String::from)
            .collect();

        Self(projects)
    }
}

impl Deref for ProjectList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

/// The preferences as last committed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    projects: ProjectList,
    keyword: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            projects: ProjectList::default(),
            keyword: DEFAULT_KEYWORD.into(),
        }
    }
}

impl Preferences {
    /// Missing or null values fall back to their defaults.
    pub fn from_map(preferences: &HashMap<String, Option<String>>) -> Self {
        let mut result = Self::default();

        for (id, value) in preferences {
            result.update(id, value.as_deref());
        }

        result
    }

    /// Applies a single changed preference. Returns true if the value was
    /// one we care about.
    pub fn update(&mut self, id: &str, new_value: Option<&str>) -> bool {
        match id {
            PROJECTS => {
                self.projects = ProjectList::parse(new_value);
                info!("Using {} configured projects", self.projects.len());
                true
            }

            KEYWORD => {
                self.keyword = new_value
                    .map(str::trim)
                    .filter(|keyword| !keyword.is_empty())
                    .unwrap_or(DEFAULT_KEYWORD)
                    .to_string();

                info!("Keyword is now {:?}", self.keyword);
                true
            }

            _ => {
                debug!("Ignoring preference {:?}", id);
                false
            }
        }
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}
