//! Shape of a group comparison request
//!
//! A request is an ordered list of named groups, each selecting rows through a
//! filter expression. The filter type is a parameter: decoding it is left to
//! the filter engine's own `Deserialize` implementation. Only the shape is
//! checked here; whether the groups make sense for the data (count, emptiness,
//! overlap) is decided later by the checks in `robust_compare_core::validation`.

use crate::error::Result;
use robust_compare_core::validation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Filter kept as undecoded JSON, for callers that hand it on unchanged
pub type RawFilter = serde_json::Value;

/// One named side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonGroupSpec<F = RawFilter> {
    name: String,
    filter: F,
}

impl<F> ComparisonGroupSpec<F> {
    pub fn new(name: impl Into<String>, filter: F) -> Self {
        Self {
            name: name.into(),
            filter,
        }
    }

    /// User-facing label of the group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predicate selecting the group's rows
    pub fn filter(&self) -> &F {
        &self.filter
    }
}

/// Ordered groups to compare
///
/// Group names are passed through as given; duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest<F = RawFilter> {
    groups: Vec<ComparisonGroupSpec<F>>,
}

impl<F> ComparisonRequest<F> {
    pub fn new(groups: Vec<ComparisonGroupSpec<F>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ComparisonGroupSpec<F>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group names in request order
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(ComparisonGroupSpec::name).collect()
    }

    /// Fail with `NotEnoughGroups` unless at least two groups were supplied
    pub fn ensure_enough_groups(&self) -> robust_compare_core::Result<()> {
        validation::ensure_enough_groups(self.groups.len())
    }
}

impl<F: DeserializeOwned> ComparisonRequest<F> {
    /// Decode a request from JSON text
    ///
    /// # Example
    ///
    /// ```rust
    /// use robust_compare_request::ComparisonRequest;
    ///
    /// let request: ComparisonRequest = ComparisonRequest::parse(
    ///     r#"{"groups": [{"name": "A", "filter": {"column": "age", "gt": 30}}]}"#,
    /// ).unwrap();
    /// assert_eq!(request.group_names(), vec!["A"]);
    ///
    /// assert!(ComparisonRequest::<serde_json::Value>::parse("{}").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        Self::decoded(serde_json::from_str(raw))
    }

    /// Decode a request from raw bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        Self::decoded(serde_json::from_slice(raw))
    }

    /// Decode a request from an already parsed JSON document
    pub fn from_value(raw: serde_json::Value) -> Result<Self> {
        Self::decoded(serde_json::from_value(raw))
    }

    fn decoded(result: serde_json::Result<Self>) -> Result<Self> {
        match result {
            Ok(request) => {
                log::trace!("decoded comparison request with {} group(s)", request.len());
                Ok(request)
            }
            Err(err) => {
                log::debug!("rejected malformed comparison request: {err}");
                Err(err.into())
            }
        }
    }
}
