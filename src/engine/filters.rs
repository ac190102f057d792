//! Directive filtering for view computation
//!
//! Evaluates filter directives against resolved column values. Matching
//! is fail-open throughout: an empty value set, an unknown operator, or
//! an unresolvable column widens the result rather than narrowing it,
//! so a filtering bug reads as "too many rows" instead of "no data".

use indexmap::IndexMap;

use crate::column::resolve_value;
use crate::directive::{ConditionOp, FilterDirective};
use crate::record::Record;

/// Evaluates filter directives against records
pub struct DirectiveFilter;

impl DirectiveFilter {
    /// Checks if a record satisfies every directive in the map.
    ///
    /// AND semantics across columns, resolving each column once. One
    /// pass, O(directives) per record.
    pub fn matches(record: &Record, filters: &IndexMap<String, FilterDirective>) -> bool {
        filters.iter().all(|(column, directive)| {
            let value = resolve_value(record, column);
            Self::matches_directive(&value, directive)
        })
    }

    /// Checks if a resolved value satisfies a single directive
    pub fn matches_directive(value: &str, directive: &FilterDirective) -> bool {
        match directive {
            // Empty selection matches everything, not nothing
            FilterDirective::Values { values } => values.is_empty() || values.contains(value),
            FilterDirective::Condition { op, value: operand } => {
                Self::condition_match(value, *op, operand)
            }
        }
    }

    /// Evaluates one condition operator.
    ///
    /// Equality is case-sensitive (it compares against an exact value the
    /// user typed); the substring family folds case (it is a search).
    fn condition_match(value: &str, op: ConditionOp, operand: &str) -> bool {
        match op {
            ConditionOp::Equals => value == operand,
            ConditionOp::NotEquals => value != operand,
            ConditionOp::Contains => value.to_lowercase().contains(&operand.to_lowercase()),
            ConditionOp::NotContains => !value.to_lowercase().contains(&operand.to_lowercase()),
            ConditionOp::StartsWith => value.to_lowercase().starts_with(&operand.to_lowercase()),
            // Resolution already maps null and missing to ""
            ConditionOp::IsEmpty => value.is_empty(),
            ConditionOp::IsNotEmpty => !value.is_empty(),
            ConditionOp::Unknown => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn make_record(name: &str) -> Record {
        Record::new(
            "c_1",
            name,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
        )
        .with_email("ada@example.com")
        .with_property("city", json!("Torino"))
    }

    fn single(column: &str, directive: FilterDirective) -> IndexMap<String, FilterDirective> {
        let mut filters = IndexMap::new();
        filters.insert(column.to_string(), directive);
        filters
    }

    #[test]
    fn test_value_filter_membership() {
        let record = make_record("Ann");

        let filters = single("name", FilterDirective::values(["Ann", "Cid"]));
        assert!(DirectiveFilter::matches(&record, &filters));

        let filters = single("name", FilterDirective::values(["Bob"]));
        assert!(!DirectiveFilter::matches(&record, &filters));
    }

    #[test]
    fn test_empty_value_filter_matches_everything() {
        let record = make_record("Ann");
        let filters = single("name", FilterDirective::values(Vec::<String>::new()));
        assert!(DirectiveFilter::matches(&record, &filters));
    }

    #[test]
    fn test_equals_is_case_sensitive() {
        assert!(DirectiveFilter::matches_directive(
            "Torino",
            &FilterDirective::condition(ConditionOp::Equals, "Torino")
        ));
        assert!(!DirectiveFilter::matches_directive(
            "torino",
            &FilterDirective::condition(ConditionOp::Equals, "Torino")
        ));
        assert!(DirectiveFilter::matches_directive(
            "torino",
            &FilterDirective::condition(ConditionOp::NotEquals, "Torino")
        ));
    }

    #[test]
    fn test_contains_folds_case() {
        let directive = FilterDirective::condition(ConditionOp::Contains, "Smith");
        assert!(DirectiveFilter::matches_directive("john smith", &directive));
        assert!(!DirectiveFilter::matches_directive("john smyth", &directive));

        let directive = FilterDirective::condition(ConditionOp::NotContains, "Smith");
        assert!(!DirectiveFilter::matches_directive("john smith", &directive));
    }

    #[test]
    fn test_starts_with_folds_case() {
        let directive = FilterDirective::condition(ConditionOp::StartsWith, "jo");
        assert!(DirectiveFilter::matches_directive("John Smith", &directive));
        assert!(!DirectiveFilter::matches_directive("Dr John", &directive));
    }

    #[test]
    fn test_emptiness_checks_ignore_operand() {
        let directive = FilterDirective::condition(ConditionOp::IsEmpty, "ignored");
        assert!(DirectiveFilter::matches_directive("", &directive));
        assert!(!DirectiveFilter::matches_directive("0", &directive));

        let directive = FilterDirective::condition(ConditionOp::IsNotEmpty, "ignored");
        assert!(DirectiveFilter::matches_directive("0", &directive));
        assert!(!DirectiveFilter::matches_directive("", &directive));
    }

    #[test]
    fn test_unknown_operator_matches_everything() {
        let directive: FilterDirective =
            serde_json::from_value(json!({"kind": "condition", "op": "fuzzy", "value": "x"}))
                .unwrap();
        assert!(DirectiveFilter::matches_directive("anything", &directive));
        assert!(DirectiveFilter::matches_directive("", &directive));
    }

    #[test]
    fn test_multiple_directives_and() {
        let record = make_record("Ann");

        let mut filters = single("name", FilterDirective::values(["Ann"]));
        filters.insert(
            "prop:city".to_string(),
            FilterDirective::condition(ConditionOp::Contains, "tori"),
        );
        assert!(DirectiveFilter::matches(&record, &filters));

        filters.insert(
            "email".to_string(),
            FilterDirective::condition(ConditionOp::StartsWith, "bob@"),
        );
        assert!(!DirectiveFilter::matches(&record, &filters));
    }

    #[test]
    fn test_missing_property_matches_is_empty() {
        let record = make_record("Ann");
        let filters = single("prop:missing", FilterDirective::op(ConditionOp::IsEmpty));
        assert!(DirectiveFilter::matches(&record, &filters));
    }
}
