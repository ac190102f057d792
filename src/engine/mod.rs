//! View engine subsystem for gridview
//!
//! The engine turns (records, directive state) into the sequence a table
//! renders, in a strict pipeline order.
//!
//! # Pipeline (strict order)
//!
//! 1. Filter: AND across the directive map, one pass over the records
//! 2. Sort: tiered comparator, stable, reversed for descending
//! 3. Page: skip/take window over the sorted survivors
//!
//! # Design Principles
//!
//! - Pure: same inputs produce the same view, every call, no held state
//! - Fail-open: malformed directives widen the view, never empty it
//! - Sorting never influences which records are included
//! - Full recomputation per call; no incremental deltas to get wrong

mod filters;
mod sorter;
mod view;

pub use filters::DirectiveFilter;
pub use sorter::{case_insensitive, Collation, RecordSorter};
pub use view::{TableView, ViewResult};
