//! Record sorting for view computation
//!
//! One comparator serves every column. Values resolve to strings, so the
//! comparator tiers its interpretation: numeric when both sides parse as
//! numbers, calendar when both parse as dates, collation otherwise. The
//! same dynamic column can hold numeric-looking, date-looking, or free
//! text values across records and still order sensibly.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::column::{resolve_value, CREATED_AT_FORMAT};
use crate::directive::{SortDirection, SortSpec};
use crate::record::Record;

/// Lexical collation used by the final comparator tier.
///
/// The default folds case via Unicode lowercasing; a caller rendering for
/// a specific locale supplies its own.
pub type Collation = fn(&str, &str) -> Ordering;

/// Default collation: case-insensitive lexical comparison
pub fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Date formats accepted by the calendar tier: the display format used
/// for creation timestamps, then ISO
const DATE_FORMATS: [&str; 2] = [CREATED_AT_FORMAT, "%Y-%m-%d"];

/// Sorts records by a resolved column value
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts records according to the sort directive.
    ///
    /// Stable: records with equal resolved values keep their relative
    /// source order, which often encodes recency.
    pub fn sort(records: &mut [Record], spec: &SortSpec) {
        Self::sort_with(records, spec, case_insensitive);
    }

    /// Sorts with a caller-supplied collation for the lexical tier
    pub fn sort_with(records: &mut [Record], spec: &SortSpec, collation: Collation) {
        records.sort_by(|a, b| {
            let a_val = resolve_value(a, &spec.column);
            let b_val = resolve_value(b, &spec.column);

            let ordering = Self::compare_with(&a_val, &b_val, collation);

            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Compares two resolved values with the default collation
    pub fn compare_values(a: &str, b: &str) -> Ordering {
        Self::compare_with(a, b, case_insensitive)
    }

    /// Compares two resolved values, first applicable tier wins:
    ///
    /// 1. Both parse fully as numbers: numeric comparison
    /// 2. Both parse as calendar dates: compare by day
    /// 3. Collation
    pub fn compare_with(a: &str, b: &str, collation: Collation) -> Ordering {
        if let (Some(a_num), Some(b_num)) = (parse_number(a), parse_number(b)) {
            return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
        }

        if let (Some(a_date), Some(b_date)) = (parse_date(a), parse_date(b)) {
            return a_date.cmp(&b_date);
        }

        collation(a, b)
    }
}

/// Locale-invariant full-string numeric parse
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
