//! Domain failures for group comparisons
//!
//! Every condition that makes a comparison impossible for the data at hand is
//! a variant of [`ComparisonError`]. Each variant carries everything its
//! message needs, so rendering never looks anything up. All of them are
//! reported as `422 Unprocessable Entity`.

use crate::api::{Renderable, StatusClass};
use thiserror::Error;

/// Closed set of group-comparison failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// Fewer than two groups were supplied
    #[error("At least two groups have to be provided for a statistic test.")]
    NotEnoughGroups,

    /// A group resolved to zero comparable rows
    #[error(
        "{group} does not have any values that can be compared.{}",
        overlap_hint(.group, .exclude_overlapping_rows)
    )]
    EmptyGroup {
        group: String,
        /// Whether rows shared with other groups were dropped before comparing
        exclude_overlapping_rows: bool,
    },

    /// The comparison method cannot handle the column's data type
    #[error(
        "{method} can only be used to compare columns of type {}, but received \"{column_type}\" instead.",
        .supported_types.join(", ")
    )]
    InvalidColumnType {
        method: String,
        supported_types: Vec<String>,
        column_type: String,
    },

    /// Two groups that must be disjoint share rows
    #[error(
        "All subdatasets should be mutually exclusive, but \"{group1}\" and \"{group2}\" shares {overlap_count} overlapping rows."
    )]
    NotMutuallyExclusive {
        group1: String,
        group2: String,
        overlap_count: usize,
    },

    /// A computed statistic came out undefined
    #[error(
        "We weren't able to successfully calculate the {test_type} between the following groups: {} due to a math domain error. This may be caused by developer oversight or sample sizes that are too small.",
        group_list(.groups)
    )]
    NaNStatisticResult {
        test_type: String,
        groups: Vec<String>,
    },
}

fn overlap_hint(group: &str, exclude_overlapping_rows: &bool) -> String {
    if *exclude_overlapping_rows {
        format!(
            " If you have \"Exclude Overlapping Rows\" turned on; this may be because {group} is a subset of the other groups."
        )
    } else {
        String::new()
    }
}

fn group_list(groups: &[String]) -> String {
    if groups.is_empty() {
        "(no groups)".to_string()
    } else {
        groups.join(", ")
    }
}

/// Result type alias for comparison checks
pub type Result<T> = std::result::Result<T, ComparisonError>;

impl ComparisonError {
    /// Create an error for a request with fewer than two groups
    pub fn not_enough_groups() -> Self {
        Self::NotEnoughGroups
    }

    /// Create an error for a group without comparable rows
    pub fn empty_group(group: impl Into<String>, exclude_overlapping_rows: bool) -> Self {
        Self::EmptyGroup {
            group: group.into(),
            exclude_overlapping_rows,
        }
    }

    /// Create an error for a column type the method cannot compare
    pub fn invalid_column_type<I, S>(
        method: impl Into<String>,
        supported_types: I,
        column_type: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidColumnType {
            method: method.into(),
            supported_types: supported_types.into_iter().map(Into::into).collect(),
            column_type: column_type.into(),
        }
    }

    /// Create an error for two groups sharing rows
    ///
    /// An `overlap_count` of zero is accepted as-is.
    pub fn not_mutually_exclusive(
        group1: impl Into<String>,
        group2: impl Into<String>,
        overlap_count: usize,
    ) -> Self {
        Self::NotMutuallyExclusive {
            group1: group1.into(),
            group2: group2.into(),
            overlap_count,
        }
    }

    /// Create an error for a statistic that came out NaN
    pub fn nan_statistic_result<I, S>(test_type: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NaNStatisticResult {
            test_type: test_type.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable identifier of the variant, for logs and metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotEnoughGroups => "not_enough_groups",
            Self::EmptyGroup { .. } => "empty_group",
            Self::InvalidColumnType { .. } => "invalid_column_type",
            Self::NotMutuallyExclusive { .. } => "not_mutually_exclusive",
            Self::NaNStatisticResult { .. } => "nan_statistic_result",
        }
    }

    /// Log the rejection and hand it back as an `Err`
    pub(crate) fn reject<T>(self) -> Result<T> {
        log::debug!("comparison rejected [{}]: {self}", self.kind());
        Err(self)
    }
}

impl Renderable for ComparisonError {
    fn status(&self) -> StatusClass {
        match self {
            Self::NotEnoughGroups
            | Self::EmptyGroup { .. }
            | Self::InvalidColumnType { .. }
            | Self::NotMutuallyExclusive { .. }
            | Self::NaNStatisticResult { .. } => StatusClass::UnprocessableEntity,
        }
    }
}
