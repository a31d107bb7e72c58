use serde::{Deserialize, Serialize};

pub use catalog::AreaEntry;
pub use error::{Error, Result};
pub use events::{Action, Event, Extension};
pub use matchers::*;
pub use preferences::{Preferences, ProjectList};
pub use query::Query;

pub mod catalog;
pub mod host;
mod error;
mod events;
mod matchers;
mod preferences;
mod query;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Path of the bundled image shown next to the entry.
    pub icon: String,

    /// The title will be used to display the entry in the result list.
    pub title: String,

    pub subtitle: String,

    /// The URL that will be opened on selection.
    pub url: String,
}

impl ResultEntry {
    pub fn for_area(area: &AreaEntry) -> Self {
        Self {
            icon: area.icon_path(),
            title: area.name.to_string(),
            subtitle: area.description().to_string(),
            url: area.url(),
        }
    }

    pub fn for_project(area: &AreaEntry, project: &str) -> Self {
        Self {
            icon: area.icon_path(),
            title: format!("{} – {}", area.name, project),
            subtitle: format!("{} – {}", area.description(), project),
            url: area.url_for_project(project),
        }
    }
}

pub trait Matcher {
    /// Applies the argument typed by the user against the console areas and
    /// the configured projects and returns the entries to show, best first.
    fn matches(&self, argument: Option<&str>, projects: &[String]) -> Vec<ResultEntry>;
}
