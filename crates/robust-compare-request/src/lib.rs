//! Group comparison requests
//!
//! Decodes the client payload `{"groups": [{"name": ..., "filter": ...}, ...]}`
//! into a [`ComparisonRequest`]. A payload that does not have this shape is a
//! [`Error::Malformed`] failure, reported as `400 Bad Request`; it never
//! becomes one of the domain errors in `robust_compare_core`.

mod error;
mod model;

pub use error::{Error, Result};
pub use model::{ComparisonGroupSpec, ComparisonRequest, RawFilter};
