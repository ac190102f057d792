//! View pipeline composition
//!
//! Ties the stages together in strict order: filter, then sort, then
//! page. Each computation is independent of every previous one; calling
//! on every keystroke of a filter input is safe and accumulates nothing.

use crate::directive::{DirectiveState, PageSpec};
use crate::record::Record;

use super::filters::DirectiveFilter;
use super::sorter::{case_insensitive, Collation, RecordSorter};

/// The computed view: surviving records plus pipeline accounting
#[derive(Debug, Clone)]
pub struct ViewResult {
    /// Records in view order
    pub records: Vec<Record>,
    /// Input collection size
    pub scanned_count: usize,
    /// Records surviving the filter stage
    pub matched_count: usize,
    /// Records returned after the page window
    pub returned_count: usize,
}

impl ViewResult {
    /// Returns true if no records survived
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in the view
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns an iterator over the records in view order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

/// Computes table views from records and directive state
pub struct TableView;

impl TableView {
    /// Computes the view with the default collation.
    ///
    /// Pure: same records and state produce the same view on every call.
    pub fn compute(records: &[Record], state: &DirectiveState) -> ViewResult {
        Self::compute_with(records, state, case_insensitive)
    }

    /// Computes the view with a caller-supplied lexical collation
    pub fn compute_with(
        records: &[Record],
        state: &DirectiveState,
        collation: Collation,
    ) -> ViewResult {
        let scanned_count = records.len();

        // Stage 1: filter. Runs strictly before sort so ordering can
        // never influence which records are included.
        let mut matched: Vec<Record> = records
            .iter()
            .filter(|record| DirectiveFilter::matches(record, state.filters()))
            .cloned()
            .collect();
        let matched_count = matched.len();

        // Stage 2: sort (absence preserves source order)
        if let Some(spec) = state.sort() {
            RecordSorter::sort_with(&mut matched, spec, collation);
        }

        // Stage 3: page window
        let records = match state.page() {
            Some(page) if !page.is_unbounded() => Self::apply_page(matched, page),
            _ => matched,
        };
        let returned_count = records.len();

        log::debug!(
            "view recomputed: scanned={} matched={} returned={} filters={} sorted={}",
            scanned_count,
            matched_count,
            returned_count,
            state.filters().len(),
            state.sort().is_some()
        );

        ViewResult {
            records,
            scanned_count,
            matched_count,
            returned_count,
        }
    }

    /// A page past the end yields an empty view, not an error
    fn apply_page(records: Vec<Record>, page: PageSpec) -> Vec<Record> {
        records
            .into_iter()
            .skip(page.offset())
            .take(page.per_page)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{FilterDirective, SortSpec};
    use chrono::{TimeZone, Utc};

    fn make_record(id: &str, name: &str) -> Record {
        Record::new(id, name, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn names(result: &ViewResult) -> Vec<&str> {
        result.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_state_preserves_source_order() {
        let records = vec![make_record("1", "Bob"), make_record("2", "Ann")];

        let result = TableView::compute(&records, &DirectiveState::new());

        assert_eq!(names(&result), vec!["Bob", "Ann"]);
        assert_eq!(result.scanned_count, 2);
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.returned_count, 2);
    }

    #[test]
    fn test_filter_runs_before_sort() {
        let records = vec![
            make_record("1", "Cid"),
            make_record("2", "Ann"),
            make_record("3", "Bob"),
        ];
        let state = DirectiveState::new()
            .set_filter("name", Some(FilterDirective::values(["Ann", "Cid"])))
            .set_sort(Some(SortSpec::asc("name")));

        let result = TableView::compute(&records, &state);

        assert_eq!(names(&result), vec!["Ann", "Cid"]);
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.scanned_count, 3);
    }

    #[test]
    fn test_page_window() {
        let records: Vec<Record> = (1..=5)
            .map(|i| make_record(&i.to_string(), &format!("R{}", i)))
            .collect();
        let state = DirectiveState::new().set_page(Some(PageSpec::new(2, 2)));

        let result = TableView::compute(&records, &state);

        assert_eq!(names(&result), vec!["R3", "R4"]);
        assert_eq!(result.matched_count, 5);
        assert_eq!(result.returned_count, 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let records = vec![make_record("1", "Ann")];
        let state = DirectiveState::new().set_page(Some(PageSpec::new(4, 10)));

        let result = TableView::compute(&records, &state);

        assert!(result.is_empty());
        assert_eq!(result.matched_count, 1);
    }

    #[test]
    fn test_zero_sized_page_is_no_window() {
        let records = vec![make_record("1", "Ann"), make_record("2", "Bob")];
        let state = DirectiveState::new().set_page(Some(PageSpec::new(1, 0)));

        let result = TableView::compute(&records, &state);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_recomputation_is_pure() {
        let records = vec![make_record("2", "Bob"), make_record("1", "Ann")];
        let state = DirectiveState::new().set_sort(Some(SortSpec::asc("name")));

        let first = TableView::compute(&records, &state);
        let second = TableView::compute(&records, &state);

        assert_eq!(first.records, second.records);
        // Inputs are untouched
        assert_eq!(records[0].name, "Bob");
    }
}
