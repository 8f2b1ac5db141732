//! Validation layer for statistical group comparisons
//!
//! Re-exports the error catalog from `robust-compare-core` and the request
//! model from `robust-compare-request`, and adds [`Error`], the single failure
//! a comparison pipeline reports: either a malformed payload (400) or one of
//! the domain conditions in [`ComparisonError`] (422).
//!
//! # Example
//!
//! ```rust
//! use robust_compare::{validation, ComparisonRequest, Error, Renderable};
//!
//! fn check(raw: &str) -> Result<(), Error> {
//!     let request: ComparisonRequest = ComparisonRequest::parse(raw)?;
//!     validation::ensure_enough_groups(request.len())?;
//!     Ok(())
//! }
//!
//! assert_eq!(check("{}").unwrap_err().render().status_code, 400);
//! assert_eq!(check(r#"{"groups": []}"#).unwrap_err().render().status_code, 422);
//! ```

pub use robust_compare_core::{
    assert_not_nan, validation, ApiError, ColumnType, ComparisonError, ComparisonMethod,
    MissingValue, Renderable, StatusClass,
};
pub use robust_compare_request::{ComparisonGroupSpec, ComparisonRequest, RawFilter};

/// Request-level errors
pub mod request {
    pub use robust_compare_request::{Error, Result};
}

use thiserror::Error;

/// Any failure a comparison request can end with
#[derive(Error, Debug)]
pub enum Error {
    /// Domain condition found while checking or computing the comparison
    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    /// Payload did not decode as a comparison request
    #[error(transparent)]
    Request(#[from] robust_compare_request::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Renderable for Error {
    fn status(&self) -> StatusClass {
        match self {
            Self::Comparison(err) => err.status(),
            Self::Request(err) => err.status(),
        }
    }
}
