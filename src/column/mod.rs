//! Column resolution subsystem for gridview
//!
//! Column identifiers are opaque strings: either one of the fixed field
//! names or a `prop:`-prefixed reference into the property bag. There is
//! no compile-time column list; identifiers resolve at lookup time.
//!
//! # Design Principles
//!
//! - Total: every (record, column) pair resolves to a `String`
//! - Fail-open: unknown columns and missing keys resolve to `""`
//! - Deterministic: discovery helpers return sorted, deduplicated output

mod resolver;

pub use resolver::{
    distinct_values, dynamic_columns, is_property_column, property_column, property_key,
    resolve_value, CREATED_AT_FORMAT, LIST_DELIMITER, PROPERTY_PREFIX,
};
