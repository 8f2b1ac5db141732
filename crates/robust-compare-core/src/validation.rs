//! Precondition checks run once groups have been resolved against the data
//!
//! Each check returns the matching [`ComparisonError`] so the caller can chain
//! them with `?` and report exactly one condition.

use crate::catalog::{ComparisonError, Result};
use crate::config::{ColumnType, ComparisonMethod};
use std::collections::HashSet;

/// Minimum number of groups a statistic test needs
pub const MIN_GROUPS: usize = 2;

/// Fail with `NotEnoughGroups` when fewer than [`MIN_GROUPS`] groups are given
pub fn ensure_enough_groups(count: usize) -> Result<()> {
    if count < MIN_GROUPS {
        return ComparisonError::not_enough_groups().reject();
    }
    Ok(())
}

/// Fail with `EmptyGroup` when a group has no comparable rows left
pub fn ensure_not_empty(group: &str, row_count: usize, exclude_overlapping_rows: bool) -> Result<()> {
    if row_count == 0 {
        return ComparisonError::empty_group(group, exclude_overlapping_rows).reject();
    }
    Ok(())
}

/// Fail with `InvalidColumnType` when `method` cannot compare `column_type`
pub fn ensure_supported_column(method: ComparisonMethod, column_type: ColumnType) -> Result<()> {
    if !method.supports(column_type) {
        return ComparisonError::invalid_column_type(
            method.name(),
            method.supported_types().iter().map(ColumnType::name),
            column_type.name(),
        )
        .reject();
    }
    Ok(())
}

/// Number of distinct row ids present in both groups
pub fn overlap_count(a: &[usize], b: &[usize]) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let lookup: HashSet<usize> = small.iter().copied().collect();
    large
        .iter()
        .copied()
        .collect::<HashSet<usize>>()
        .intersection(&lookup)
        .count()
}

/// Fail with `NotMutuallyExclusive` for the first pair of groups sharing rows
///
/// Pairs are visited in request order: `(0, 1), (0, 2), ..., (1, 2), ...`.
pub fn ensure_mutually_exclusive<N, R>(groups: &[(N, R)]) -> Result<()>
where
    N: AsRef<str>,
    R: AsRef<[usize]>,
{
    for (i, (name1, rows1)) in groups.iter().enumerate() {
        for (name2, rows2) in &groups[i + 1..] {
            let shared = overlap_count(rows1.as_ref(), rows2.as_ref());
            if shared > 0 {
                return ComparisonError::not_mutually_exclusive(name1.as_ref(), name2.as_ref(), shared)
                    .reject();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_count() {
        assert_eq!(ensure_enough_groups(0), Err(ComparisonError::NotEnoughGroups));
        assert_eq!(ensure_enough_groups(1), Err(ComparisonError::NotEnoughGroups));
        assert!(ensure_enough_groups(2).is_ok());
        assert!(ensure_enough_groups(10).is_ok());
    }

    #[test]
    fn test_empty_group() {
        assert!(ensure_not_empty("A", 3, true).is_ok());
        assert_eq!(
            ensure_not_empty("A", 0, true),
            Err(ComparisonError::empty_group("A", true))
        );
    }

    #[test]
    fn test_unsupported_column_message() {
        let err = ensure_supported_column(ComparisonMethod::TTest, ColumnType::Text).unwrap_err();
        assert_eq!(
            err.to_string(),
            "T-Test can only be used to compare columns of type numeric, but received \"text\" instead."
        );
        assert!(ensure_supported_column(ComparisonMethod::KruskalWallis, ColumnType::Ordinal).is_ok());
    }

    #[test]
    fn test_overlap_count() {
        assert_eq!(overlap_count(&[1, 2, 3], &[4, 5]), 0);
        assert_eq!(overlap_count(&[1, 2, 3], &[3, 2, 9, 10]), 2);
        assert_eq!(overlap_count(&[], &[1]), 0);
        // duplicates within a group count once
        assert_eq!(overlap_count(&[1, 1, 2], &[1, 1]), 1);
    }

    #[test]
    fn test_disjoint_groups_pass() {
        let groups = [("A", vec![0, 1, 2]), ("B", vec![3, 4]), ("C", vec![5])];
        assert!(ensure_mutually_exclusive(&groups).is_ok());
    }

    #[test]
    fn test_first_overlapping_pair_is_reported() {
        let groups = [
            ("A", vec![0, 1, 2]),
            ("B", vec![3, 4]),
            ("C", vec![4, 5]),
            ("D", vec![2, 6]),
        ];
        let err = ensure_mutually_exclusive(&groups).unwrap_err();
        assert_eq!(err, ComparisonError::not_mutually_exclusive("A", "D", 1));
    }

    #[test]
    fn test_single_group_is_trivially_exclusive() {
        let groups: [(&str, &[usize]); 1] = [("A", &[1, 2])];
        assert!(ensure_mutually_exclusive(&groups).is_ok());
    }
}
