//! Column value resolution
//!
//! Resolution is a pure string projection: fixed columns apply a
//! dedicated accessor, dynamic columns strip the synthesizing prefix and
//! look up the property bag. Never errors, never panics.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::engine::RecordSorter;
use crate::record::Record;

/// Prefix synthesizing a column identifier from a property bag key
pub const PROPERTY_PREFIX: &str = "prop:";

/// Delimiter used when a list-membership set resolves to one cell
pub const LIST_DELIMITER: &str = ", ";

/// Day-first display format for the creation timestamp
pub const CREATED_AT_FORMAT: &str = "%d/%m/%Y";

/// Builds the column identifier for a property bag key
pub fn property_column(key: &str) -> String {
    format!("{}{}", PROPERTY_PREFIX, key)
}

/// Recovers the property bag key from a dynamic column identifier
pub fn property_key(column: &str) -> Option<&str> {
    column.strip_prefix(PROPERTY_PREFIX)
}

/// Returns true if the identifier references the property bag
pub fn is_property_column(column: &str) -> bool {
    property_key(column).is_some()
}

/// Resolves a record's value for a column identifier.
///
/// Total: unknown identifiers and missing property keys resolve to the
/// empty string rather than erroring, so a stale saved directive can
/// never take the whole view down.
pub fn resolve_value(record: &Record, column: &str) -> String {
    if let Some(key) = property_key(column) {
        return record
            .properties
            .get(key)
            .map(stringify_scalar)
            .unwrap_or_default();
    }

    match column {
        "name" => record.name.clone(),
        "email" => record.email.clone(),
        "phone" => record.phone.clone(),
        "status" => record.status.as_str().to_string(),
        "owner" => record
            .owner
            .as_ref()
            .map(|owner| owner.full_name())
            .unwrap_or_default(),
        "lists" => record.lists.join(LIST_DELIMITER),
        "created_at" => record.created_at.format(CREATED_AT_FORMAT).to_string(),
        _ => String::new(),
    }
}

/// Union of property bag keys across the record set, as sorted column
/// identifiers. This is the set of dynamic columns offered to the user.
pub fn dynamic_columns(records: &[Record]) -> Vec<String> {
    let mut keys: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        keys.extend(record.properties.keys().map(String::as_str));
    }
    keys.into_iter().map(property_column).collect()
}

/// Distinct non-empty resolved values for a column, ordered by the
/// sorting comparator so numeric facets list numerically.
pub fn distinct_values(records: &[Record], column: &str) -> Vec<String> {
    let unique: BTreeSet<String> = records
        .iter()
        .map(|record| resolve_value(record, column))
        .filter(|value| !value.is_empty())
        .collect();

    let mut values: Vec<String> = unique.into_iter().collect();
    values.sort_by(|a, b| RecordSorter::compare_values(a, b));
    values
}

/// Stringifies a scalar bag value; arrays and objects are rejected at
/// ingestion, so anything else here resolves empty
fn stringify_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
