//! Directive state held for one table session
//!
//! The state lives as long as the view it drives and is passed explicitly
//! through every engine call. Mutation consumes and returns the state, so
//! callers hold exactly one authoritative copy and no operation is
//! observable half-applied.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ast::{FilterDirective, PageSpec, SortSpec};

/// Filter map, sort, and page window for one table session.
///
/// The filter map is insertion-ordered, so filter application and
/// serialization stay deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveState {
    #[serde(default)]
    filters: IndexMap<String, FilterDirective>,
    #[serde(default)]
    sort: Option<SortSpec>,
    #[serde(default)]
    page: Option<PageSpec>,
}

impl DirectiveState {
    /// Creates an empty state: no filters, no sort, no window
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or removes the filter for one column.
    ///
    /// `None` removes the column's entry entirely, which is the true
    /// "no filter" state; an empty value filter also matches everything
    /// but still occupies a map slot. Rewinds the window to the first
    /// page, since the old position is meaningless against a new match
    /// set.
    #[must_use]
    pub fn set_filter(mut self, column: impl Into<String>, directive: Option<FilterDirective>) -> Self {
        let column = column.into();
        match directive {
            Some(directive) => {
                self.filters.insert(column, directive);
            }
            None => {
                self.filters.shift_remove(&column);
            }
        }
        self.page = self.page.map(|page| page.rewound());
        self
    }

    /// Sets or clears the global sort. Rewinds the window to the first
    /// page.
    #[must_use]
    pub fn set_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self.page = self.page.map(|page| page.rewound());
        self
    }

    /// Sets or removes the page window. Filters and sort are untouched.
    #[must_use]
    pub fn set_page(mut self, page: Option<PageSpec>) -> Self {
        self.page = page;
        self
    }

    /// Empties the filter map and clears sort and window in one step
    #[must_use]
    pub fn clear_all(mut self) -> Self {
        self.filters.clear();
        self.sort = None;
        self.page = None;
        self
    }

    /// The filter map, in insertion order
    pub fn filters(&self) -> &IndexMap<String, FilterDirective> {
        &self.filters
    }

    /// The filter for one column, if any
    pub fn filter(&self, column: &str) -> Option<&FilterDirective> {
        self.filters.get(column)
    }

    /// The global sort, if any
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// The page window, if any
    pub fn page(&self) -> Option<PageSpec> {
        self.page
    }

    /// True when no directive of any kind is held
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sort.is_none() && self.page.is_none()
    }
}
