//! View models returned by the query layer.
//!
//! These are the shapes the HTTP-facing layer serializes: entity models are
//! converted at the repository boundary so callers never handle raw database
//! rows.

pub mod group;
pub mod semester;
pub mod sport;
