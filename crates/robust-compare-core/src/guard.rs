//! Guard for undefined statistic values
//!
//! Statistic implementations report math-domain failures as NaN (or as an
//! absent value). [`assert_not_nan`] turns the first such value into a
//! [`ComparisonError::NaNStatisticResult`] so the caller can bail out with `?`
//! right after computing a statistic.

use crate::catalog::{ComparisonError, Result};

/// Values that may stand for a missing or undefined statistic
pub trait MissingValue {
    /// True when the value is NaN or absent
    fn is_missing(&self) -> bool;
}

impl MissingValue for f64 {
    #[inline]
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl MissingValue for f32 {
    #[inline]
    fn is_missing(&self) -> bool {
        self.is_nan()
    }
}

impl<T: MissingValue> MissingValue for Option<T> {
    #[inline]
    fn is_missing(&self) -> bool {
        self.as_ref().map_or(true, MissingValue::is_missing)
    }
}

impl<T: MissingValue + ?Sized> MissingValue for &T {
    #[inline]
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

/// Fail on the first missing value in `values`
///
/// Values after the first missing one are never pulled from the iterator.
///
/// # Example
///
/// ```rust
/// use robust_compare_core::{assert_not_nan, ComparisonError};
///
/// assert!(assert_not_nan("mean-diff", &["A", "B"], [1.0, 2.0]).is_ok());
///
/// let err = assert_not_nan("mean-diff", &["A", "B"], [1.0, f64::NAN]).unwrap_err();
/// assert!(matches!(err, ComparisonError::NaNStatisticResult { .. }));
/// ```
pub fn assert_not_nan<S, I>(test_type: &str, groups: &[S], values: I) -> Result<()>
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: MissingValue,
{
    if let Some(position) = values.into_iter().position(|value| value.is_missing()) {
        log::trace!("{test_type} is undefined at position {position}");
        return ComparisonError::nan_statistic_result(
            test_type,
            groups.iter().map(|group| group.as_ref().to_owned()),
        )
        .reject();
    }
    Ok(())
}
