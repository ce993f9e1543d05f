//! Catalog page helpers: search, category slug lookup and tab ordering.

use crate::{Category, CourseSummary, LookupError};

/// Number of cards in the "Frequently Bought" grid.
pub const FREQUENTLY_BOUGHT_LIMIT: usize = 4;

/// Courses whose name contains `term`, ASCII case-insensitively, in input
/// order. A blank term keeps every course; otherwise surrounding spaces are
/// part of the term.
pub fn filter_courses(courses: &[CourseSummary], term: &str) -> Vec<CourseSummary> {
    if term.trim().is_empty() {
        return courses.to_vec();
    }
    let needle = term.to_ascii_lowercase();
    courses
        .iter()
        .filter(|course| course.name.to_ascii_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Ticket handed out by [`LoadGeneration::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks which page load is the latest, so an older response that resolves
/// late is not shown under a newer route.
#[derive(Debug, Default)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    /// Starts a new load; every earlier ticket stops being current.
    pub fn begin(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    /// Whether `ticket` belongs to the most recent load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current == ticket.0
    }
}

/// URL segment for a category name: words joined by `-`, lower-cased.
pub fn catalog_slug(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

/// Id of the single category whose slug equals `catalog_name`.
pub fn resolve_category_id(
    categories: &[Category],
    catalog_name: &str,
) -> Result<String, LookupError> {
    let wanted = catalog_name.trim().to_ascii_lowercase();
    let mut matches = categories
        .iter()
        .filter(|category| catalog_slug(&category.name) == wanted);

    match (matches.next(), matches.count()) {
        (Some(category), 0) => Ok(category.id.clone()),
        (Some(_), extra) => Err(LookupError::Ambiguous {
            name: wanted,
            count: extra + 1,
        }),
        (None, _) => Err(LookupError::NotFound(wanted)),
    }
}

/// Tabs above the "Courses to get you started" slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    /// Server order.
    #[default]
    MostPopular,
    /// Newest first.
    New,
}

impl CatalogTab {
    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            CatalogTab::MostPopular => "Most Popular",
            CatalogTab::New => "New",
        }
    }
}

/// Courses for the active tab.
///
/// `New` sorts by `createdAt` descending; the sort is stable and courses
/// without a timestamp go last.
pub fn tab_courses(courses: &[CourseSummary], tab: CatalogTab) -> Vec<CourseSummary> {
    let mut ordered = courses.to_vec();
    if tab == CatalogTab::New {
        // RFC 3339 strings in one offset order lexicographically.
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
    ordered
}

/// Leading slice of the most-selling list shown as a grid.
pub fn frequently_bought(courses: &[CourseSummary]) -> &[CourseSummary] {
    &courses[..courses.len().min(FREQUENTLY_BOUGHT_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str, created_at: Option<&str>) -> CourseSummary {
        CourseSummary {
            id: id.to_string(),
            name: name.to_string(),
            created_at: created_at.map(str::to_string),
            ..CourseSummary::default()
        }
    }

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            ..Category::default()
        }
    }

    #[test]
    fn filter_on_empty_list_is_empty() {
        assert!(filter_courses(&[], "go").is_empty());
        assert!(filter_courses(&[], "").is_empty());
    }

    #[test]
    fn blank_term_keeps_order() {
        let courses = vec![course("1", "Rust", None), course("2", "Go", None)];
        assert_eq!(filter_courses(&courses, ""), courses);
        assert_eq!(filter_courses(&courses, "   "), courses);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let courses = vec![
            course("1", "Intro To Go", None),
            course("2", "Advanced Rust", None),
            course("3", "Go Concurrency", None),
        ];
        let ids = filter_courses(&courses, "go")
            .into_iter()
            .map(|course| course.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
        assert_eq!(filter_courses(&courses, "RUST").len(), 1);
        assert!(filter_courses(&courses, "python").is_empty());
    }

    #[test]
    fn surrounding_spaces_are_matched_literally() {
        let courses = vec![
            course("1", "Go Concurrency", None),
            course("2", "Intro", None),
            course("3", "Learn Go Fast", None),
        ];
        let leading = filter_courses(&courses, " go")
            .into_iter()
            .map(|course| course.id)
            .collect::<Vec<_>>();
        assert_eq!(leading, vec!["3".to_string()]);
        assert!(filter_courses(&courses, "intro ").is_empty());
        assert_eq!(filter_courses(&courses, "   ").len(), 3);
    }

    #[test]
    fn only_the_latest_load_is_current() {
        let mut loads = LoadGeneration::default();
        let first = loads.begin();
        assert!(loads.is_current(first));

        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    #[test]
    fn slug_joins_words_with_dashes() {
        assert_eq!(catalog_slug("Web Development"), "web-development");
        assert_eq!(catalog_slug("  AI   and ML "), "ai-and-ml");
    }

    #[test]
    fn resolve_requires_exactly_one_match() {
        let categories = vec![
            category("c1", "Web Development"),
            category("c2", "Data Science"),
            category("c3", "data  science"),
        ];
        assert_eq!(resolve_category_id(&categories, "web-development"), Ok("c1".to_string()));
        assert_eq!(
            resolve_category_id(&categories, "mobile"),
            Err(LookupError::NotFound("mobile".to_string()))
        );
        assert_eq!(
            resolve_category_id(&categories, "data-science"),
            Err(LookupError::Ambiguous {
                name: "data-science".to_string(),
                count: 2,
            })
        );
    }

    #[test]
    fn new_tab_sorts_newest_first() {
        let courses = vec![
            course("old", "A", Some("2024-01-01T00:00:00Z")),
            course("none", "B", None),
            course("new", "C", Some("2024-06-01T00:00:00Z")),
        ];
        let ids = |tab| {
            tab_courses(&courses, tab)
                .into_iter()
                .map(|course| course.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(CatalogTab::MostPopular), vec!["old", "none", "new"]);
        assert_eq!(ids(CatalogTab::New), vec!["new", "old", "none"]);
    }

    #[test]
    fn frequently_bought_caps_at_four() {
        let courses = (0..6)
            .map(|i| course(&i.to_string(), "X", None))
            .collect::<Vec<_>>();
        assert_eq!(frequently_bought(&courses).len(), 4);
        assert_eq!(frequently_bought(&courses[..2]).len(), 2);
    }
}
