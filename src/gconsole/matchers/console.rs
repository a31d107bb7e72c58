use itertools::Itertools;
use log::debug;

use crate::gconsole::catalog::{self, AreaEntry};
use crate::gconsole::{Matcher, Query, ResultEntry};

/// The launcher never shows more entries than this.
pub const MAX_RESULTS: usize = 9;

/// Case sensitive substring matching against the area slugs, and with
/// projects configured, of up to two tokens against slugs and project ids.
pub struct ConsoleMatcher {
    areas: &'static [AreaEntry],
}

impl ConsoleMatcher {
    pub fn new(areas: &'static [AreaEntry]) -> Self {
        Self { areas }
    }

    // the whole argument is a single token here, it is never split
    fn without_projects(&self, argument: Option<&str>) -> Vec<ResultEntry> {
        self.areas.iter()
            .filter(|area| argument.map_or(true, |argument| area.slug.contains(argument)))
            .take(MAX_RESULTS)
            .map(ResultEntry::for_area)
            .collect()
    }

    fn with_projects(&self, argument: Option<&str>, projects: &[String]) -> Vec<ResultEntry> {
        let query = Query::parse(argument);
        let tokens = [query.first, query.second].into_iter().flatten().collect_vec();

        // every token must be found in either the project or the area
        projects.iter()
            .cartesian_product(self.areas.iter())
            .filter(|(project, area)| tokens
                .iter()
                .all(|&token| project.contains(token) || area.slug.contains(token)))
            .take(MAX_RESULTS)
            .map(|(project, area)| ResultEntry::for_project(area, project))
            .collect()
    }
}

impl Default for ConsoleMatcher {
    fn default() -> Self {
        Self::new(catalog::areas())
    }
}

impl Matcher for ConsoleMatcher {
    fn matches(&self, argument: Option<&str>, projects: &[String]) -> Vec<ResultEntry> {
        let entries = if projects.is_empty() {
            self.without_projects(argument)
        } else {
            self.with_projects(argument, projects)
        };

        debug!("{:?} matched {} entries for {} projects", argument, entries.len(), projects.len());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn titles(entries: &[ResultEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.title.as_str()).collect()
    }

    #[test]
    fn empty_query_without_projects_lists_catalog() {
        let entries = ConsoleMatcher::default().matches(None, &[]);

        let expected = catalog::areas().iter()
            .take(MAX_RESULTS)
            .map(ResultEntry::for_area)
            .collect_vec();

        assert_eq!(entries, expected);
        assert_eq!(entries.len(), MAX_RESULTS);
        assert_eq!(ConsoleMatcher::default().matches(Some(""), &[]), expected);
    }

    #[test]
    fn filters_areas_by_slug_without_projects() {
        let entries = ConsoleMatcher::default().matches(Some("pubsub"), &[]);
        assert_eq!(titles(&entries), vec![
            "Pub/Sub Subscriptions",
            "Pub/Sub Topics",
            "Pub/Sub Lite Reservations",
            "Pub/Sub Lite Subscriptions",
            "Pub/Sub Lite Topics",
        ]);
    }

    #[test]
    fn area_entry_without_project() {
        let entries = ConsoleMatcher::default().matches(Some("logs"), &[]);
        assert_eq!(entries, vec![ResultEntry {
            icon: "images/cloud_logging.png".into(),
            title: "Logs Explorer".into(),
            subtitle: "Cloud Logging".into(),
            url: "https://console.cloud.google.com/logs/query".into(),
        }]);
    }

    #[test]
    fn whole_argument_filters_without_projects() {
        let matcher = ConsoleMatcher::default();

        let entries = matcher.matches(Some("iam service"), &[]);
        assert_eq!(titles(&entries), vec!["IAM Service Accounts"]);

        let entries = matcher.matches(Some("pubsub topics"), &[]);
        assert_eq!(titles(&entries), vec!["Pub/Sub Topics"]);

        assert!(matcher.matches(Some("iam whatever"), &[]).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(ConsoleMatcher::default().matches(Some("Logs"), &[]).is_empty());
        assert!(ConsoleMatcher::default().matches(Some("logs"), &projects(&["Prod"])).len() == 1);
        assert!(ConsoleMatcher::default().matches(Some("prod"), &projects(&["Prod"])).is_empty());
    }

    #[test]
    fn empty_query_with_projects_is_project_major() {
        let entries = ConsoleMatcher::default().matches(None, &projects(&["p1", "p2"]));

        let expected = catalog::areas().iter()
            .take(MAX_RESULTS)
            .map(|area| ResultEntry::for_project(area, "p1"))
            .collect_vec();

        assert_eq!(entries, expected);
    }

    #[test]
    fn area_then_project() {
        let entries = ConsoleMatcher::default().matches(Some("logs myproject"), &projects(&["myproject"]));
        assert_eq!(entries, vec![ResultEntry {
            icon: "images/cloud_logging.png".into(),
            title: "Logs Explorer – myproject".into(),
            subtitle: "Cloud Logging – myproject".into(),
            url: "https://console.cloud.google.com/logs/query?project=myproject".into(),
        }]);
    }

    #[test]
    fn token_order_does_not_matter() {
        let matcher = ConsoleMatcher::default();
        let projects = projects(&["myproject", "other"]);

        let forward = matcher.matches(Some("logs myproject"), &projects);
        let backward = matcher.matches(Some("myproject logs"), &projects);

        assert_eq!(forward, backward);
        assert_eq!(titles(&forward), vec!["Logs Explorer – myproject"]);
    }

    #[test]
    fn single_token_matches_project_or_area() {
        let matcher = ConsoleMatcher::default();
        let projects = projects(&["alpha", "sql-box"]);

        // "sql" is found in the project "sql-box" for every area, and in the
        // "sql instances" area for "alpha"
        let entries = matcher.matches(Some("sql"), &projects);
        assert_eq!(entries[0].title, "SQL Instances – alpha");
        assert_eq!(entries[1].title, "Artifact Registry Repositories – sql-box");
        assert_eq!(entries.len(), MAX_RESULTS);
    }

    #[test]
    fn both_tokens_may_hit_the_same_field() {
        let entries = ConsoleMatcher::default().matches(Some("pubsub topics"), &projects(&["p"]));
        assert_eq!(titles(&entries), vec![
            "Pub/Sub Topics – p",
            "Pub/Sub Lite Topics – p",
        ]);
    }

    #[test]
    fn unmatched_token_yields_nothing() {
        let matcher = ConsoleMatcher::default();
        assert!(matcher.matches(Some("zzz"), &projects(&["p1", "p2"])).is_empty());
        assert!(matcher.matches(Some("zzz"), &[]).is_empty());
        assert!(matcher.matches(Some("logs zzz"), &projects(&["p1"])).is_empty());
    }

    #[test]
    fn duplicate_projects_are_kept() {
        let entries = ConsoleMatcher::default().matches(Some("billing"), &projects(&["p", "p"]));
        assert_eq!(titles(&entries), vec!["Billing – p", "Billing – p"]);
    }

    #[test]
    fn custom_catalog_is_respected() {
        static AREAS: &[AreaEntry] = &[AreaEntry {
            slug: "home",
            name: "Home",
            description: None,
            icon: "home",
            path: "home/dashboard",
        }];

        let entries = ConsoleMatcher::new(AREAS).matches(None, &projects(&["a", "b"]));
        assert_eq!(titles(&entries), vec!["Home – a", "Home – b"]);
        assert_eq!(entries[1].subtitle, "Home – b");
        assert_eq!(entries[1].url, "https://console.cloud.google.com/home/dashboard?project=b");
    }
}
