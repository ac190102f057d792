//! Record model for gridview
//!
//! A record is one row of the view: a fixed set of contact-style fields
//! plus an open-ended property bag of scalar values. Records arrive as
//! JSON from a remote backend and are validated once at the boundary;
//! past that point every engine operation on them is total.

mod errors;
mod types;

pub use errors::{RecordError, RecordResult};
pub use types::{OwnerRef, Record, RecordStatus};
