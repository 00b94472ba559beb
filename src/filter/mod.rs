//! Client-side filtering and aggregation.
//!
//! Every collection is narrowed by three predicates: a case-insensitive
//! substring search over a fixed set of text fields, a category equality
//! check and a status-tab equality check. The sentinel `all` bypasses the
//! equality checks. Summaries are always computed over the unfiltered
//! collection.

mod stats;

pub use stats::*;

use std::str::FromStr;

use serde::Serialize;

use crate::errors::ConsoleError;
use crate::models::{Alert, DangerZone, Disaster, Resource, SafeRoute, SosRequest, Volunteer};

/// Sentinel accepted for "no restriction".
pub const ALL: &str = "all";

/// A category or tab selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted.eq_ignore_ascii_case(value),
        }
    }
}

impl FromStr for Selection {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(raw) => raw.parse().unwrap_or_default(),
            None => Selection::All,
        }
    }
}

/// Active filter predicates for one collection view.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub search: String,
    pub category: Selection,
    pub tab: Selection,
}

impl FilterQuery {
    pub fn new(search: impl Into<String>, category: Selection, tab: Selection) -> Self {
        Self {
            search: search.into(),
            category,
            tab,
        }
    }
}

/// A record that can be narrowed by [`FilterQuery`].
pub trait Filterable {
    /// Fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;
    /// Field compared against the category selection.
    fn category(&self) -> &str;
    /// Field compared against the status tab.
    fn tab(&self) -> &str;
}

pub fn matches_search<T: Filterable>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches<T: Filterable>(record: &T, query: &FilterQuery) -> bool {
    matches_search(record, &query.search)
        && query.category.matches(record.category())
        && query.tab.matches(record.tab())
}

/// Records passing every predicate, in their original order.
pub fn apply<'a, T: Filterable>(records: &'a [T], query: &FilterQuery) -> Vec<&'a T> {
    records.iter().filter(|r| matches(*r, query)).collect()
}

/// A filtered view together with the totals of the whole collection.
#[derive(Debug, Serialize)]
pub struct CollectionView<'a, T: Summarize> {
    pub summary: T::Summary,
    pub visible: Vec<&'a T>,
}

impl<'a, T: Filterable + Summarize> CollectionView<'a, T> {
    pub fn new(records: &'a [T], query: &FilterQuery) -> Self {
        Self {
            summary: T::summarize(records),
            visible: apply(records, query),
        }
    }
}

impl Filterable for Disaster {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.kind.as_str(), self.description.as_str(), self.id.as_str()]
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn tab(&self) -> &str {
        self.status_label()
    }
}

impl Filterable for Volunteer {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.specialization.as_str(),
            self.location.as_str(),
            self.contact.as_str(),
        ]
    }

    fn category(&self) -> &str {
        &self.specialization
    }

    fn tab(&self) -> &str {
        self.status.as_str()
    }
}

impl Filterable for SosRequest {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.requester.as_str(),
            self.location.as_str(),
            self.kind.as_str(),
            self.message.as_str(),
        ]
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn tab(&self) -> &str {
        self.status.as_str()
    }
}

impl Filterable for Resource {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str(), self.location.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tab(&self) -> &str {
        self.stock_level().as_str()
    }
}

impl Filterable for DangerZone {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.as_str(), self.location.as_str()]
    }

    fn category(&self) -> &str {
        &self.kind
    }

    fn tab(&self) -> &str {
        self.severity.as_str()
    }
}

impl Filterable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.message.as_str(), self.target_area.as_str()]
    }

    fn category(&self) -> &str {
        self.severity.as_str()
    }

    fn tab(&self) -> &str {
        self.status.as_str()
    }
}

impl Filterable for SafeRoute {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.origin.as_str(), self.destination.as_str()]
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn tab(&self) -> &str {
        self.status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VolunteerStatus;
    use crate::samples;

    fn query(search: &str, category: &str, tab: &str) -> FilterQuery {
        FilterQuery::new(search, category.parse().unwrap(), tab.parse().unwrap())
    }

    #[test]
    fn test_available_volunteers_in_delhi() {
        let volunteers = samples::volunteers();
        let hits = apply(&volunteers, &query("Delhi", "all", "available"));

        let expected: Vec<&str> = volunteers
            .iter()
            .filter(|v| v.location.contains("Delhi") && v.status == VolunteerStatus::Available)
            .map(|v| v.id.as_str())
            .collect();
        let got: Vec<&str> = hits.iter().map(|v| v.id.as_str()).collect();

        assert_eq!(got, expected);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let volunteers = samples::volunteers();
        let upper = apply(&volunteers, &query("DELHI", "all", "all"));
        let lower = apply(&volunteers, &query("delhi", "all", "all"));
        assert_eq!(upper.len(), lower.len());
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let sos = samples::sos_requests();
        let hits = apply(&sos, &FilterQuery::default());
        let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
        let all: Vec<&str> = sos.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn test_filtered_is_ordered_subset_for_every_combination() {
        let resources = samples::resources();
        let searches = ["", "kit", "water", "zzz"];
        let categories = ["all", "medical", "food", "shelter"];
        let tabs = ["all", "critical", "low", "medium", "good"];

        for search in searches {
            for category in categories {
                for tab in tabs {
                    let hits = apply(&resources, &query(search, category, tab));
                    let mut cursor = 0;
                    for hit in hits {
                        let pos = resources[cursor..]
                            .iter()
                            .position(|r| std::ptr::eq(r, hit))
                            .expect("hit must come from the collection, in order");
                        cursor += pos + 1;
                    }
                }
            }
        }
    }

    #[test]
    fn test_category_and_tab_equality() {
        let disasters = samples::disasters();
        let floods = apply(&disasters, &query("", "flood", "all"));
        assert!(floods.iter().all(|d| d.kind == "flood"));
        assert!(!floods.is_empty());

        let inactive = apply(&disasters, &query("", "all", "inactive"));
        assert!(inactive.iter().all(|d| !d.active));
    }

    #[test]
    fn test_all_sentinel_parses_to_bypass() {
        assert_eq!("ALL".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "busy".parse::<Selection>().unwrap(),
            Selection::Only("busy".to_string())
        );
        assert_eq!(Selection::from(None), Selection::All);
    }

    #[test]
    fn test_view_summary_ignores_filters() {
        let volunteers = samples::volunteers();
        let unfiltered = CollectionView::new(&volunteers, &FilterQuery::default());
        let narrowed = CollectionView::new(&volunteers, &query("Mumbai", "all", "busy"));

        assert_eq!(unfiltered.summary, narrowed.summary);
        assert!(narrowed.visible.len() < unfiltered.visible.len());
    }
}
