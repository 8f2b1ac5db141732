//! Error catalog and validation checks for statistical group comparisons
//!
//! This crate names every reason a group comparison can be refused once the
//! request has been understood, and fixes how each reason is presented to the
//! client.
//!
//! # Overview
//!
//! - [`ComparisonError`]: the closed set of domain failures, each rendering a
//!   self-contained message
//! - [`Renderable`] / [`ApiError`]: conversion into the `{message, status_code}`
//!   pair consumed by the response adapter
//! - [`assert_not_nan`]: guard to run right after computing a statistic
//! - [`validation`]: group-count, emptiness, column-type and exclusivity checks
//!
//! # Example
//!
//! ```rust
//! use robust_compare_core::{
//!     validation, ColumnType, ComparisonMethod, Renderable,
//! };
//!
//! let err = validation::ensure_supported_column(ComparisonMethod::TTest, ColumnType::Text)
//!     .unwrap_err();
//!
//! let api = err.render();
//! assert_eq!(api.status_code, 422);
//! assert!(api.message.starts_with("T-Test can only be used"));
//! ```

mod api;
mod catalog;
mod config;
mod guard;
pub mod validation;

pub use api::{ApiError, Renderable, StatusClass};
pub use catalog::{ComparisonError, Result};
pub use config::{ColumnType, ComparisonMethod};
pub use guard::{assert_not_nan, MissingValue};
