//! gridview - A deterministic, fail-open, in-memory table view engine
//!
//! Records in, per-column directives in, filtered/sorted/windowed view out.

pub mod column;
pub mod directive;
pub mod engine;
pub mod record;
