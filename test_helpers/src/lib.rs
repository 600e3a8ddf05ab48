#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]
//! This crate contains stuff that's really helpful for tests.
use std::ops::{Range, RangeInclusive};

use proptest::prelude::*;

/// Folds `values[range]` from left to right, the reference every structure is checked against.
/// # Panics
/// If `range` is empty or not inside `values`.
/// # Example
/// ```
/// # use test_helpers::fold_range;
/// assert_eq!(fold_range(&[1, 3, 2, 5, 4], 1..=3, |a, b| a * b), 30);
/// ```
pub fn fold_range<T: Clone>(
    values: &[T],
    range: RangeInclusive<usize>,
    f: impl Fn(&T, &T) -> T,
) -> T {
    values[range]
        .iter()
        .cloned()
        .reduce(|acc, value| f(&acc, &value))
        .expect("fold_range needs a non-empty range")
}

/// An operation on a range query structure, used to generate interleavings of updates and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace the element at `position` with `value`.
    PointChange {
        /// position to replace
        position: usize,
        /// new value
        value: i64,
    },
    /// Apply `operand` to every element in `range`.
    RangeAct {
        /// affected positions
        range: RangeInclusive<usize>,
        /// the operand
        operand: i64,
    },
    /// Combine every element in `range`.
    RangeQuery {
        /// queried positions
        range: RangeInclusive<usize>,
    },
}

/// Gives a strategy generating non-empty inclusive ranges inside `0..len`.
/// # Panics
/// If `len == 0`.
pub fn range_in(len: usize) -> impl Strategy<Value = RangeInclusive<usize>> {
    (0..len, 0..len).prop_map(|(a, b)| a.min(b)..=a.max(b))
}

prop_compose! {
    /// Gives a strategy generating a non-empty vector of at most `max_len` elements taken from
    /// `elements` together with a valid range into it.
    pub fn values_with_range(elements: Range<i64>, max_len: usize)
                            (values in prop::collection::vec(elements, 1..max_len))
                            (range in range_in(values.len()), values in Just(values))
        -> (Vec<i64>, RangeInclusive<usize>) {
        (values, range)
    }
}

prop_compose! {
    /// Gives a strategy generating a non-empty vector together with up to `max_operations`
    /// point changes and range queries on it.
    pub fn point_operations(elements: Range<i64>, max_len: usize, max_operations: usize)
                           (values in prop::collection::vec(elements.clone(), 1..max_len))
                           (operations in prop::collection::vec(
                               prop_oneof![
                                   (0..values.len(), elements.clone())
                                       .prop_map(|(position, value)| Operation::PointChange { position, value }),
                                   range_in(values.len()).prop_map(|range| Operation::RangeQuery { range }),
                               ],
                               0..max_operations),
                            values in Just(values))
        -> (Vec<i64>, Vec<Operation>) {
        (values, operations)
    }
}

prop_compose! {
    /// Gives a strategy generating a non-empty vector together with up to `max_operations`
    /// range updates and range queries on it.
    pub fn range_operations(elements: Range<i64>, max_len: usize, max_operations: usize)
                           (values in prop::collection::vec(elements.clone(), 1..max_len))
                           (operations in prop::collection::vec(
                               prop_oneof![
                                   (range_in(values.len()), elements.clone())
                                       .prop_map(|(range, operand)| Operation::RangeAct { range, operand }),
                                   range_in(values.len()).prop_map(|range| Operation::RangeQuery { range }),
                               ],
                               0..max_operations),
                            values in Just(values))
        -> (Vec<i64>, Vec<Operation>) {
        (values, operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_ranges_are_valid((values, range) in values_with_range(0..10, 50)) {
            prop_assert!(range.start() <= range.end());
            prop_assert!(*range.end() < values.len());
        }

        #[test]
        fn generated_operations_stay_in_bounds((values, operations) in range_operations(0..10, 50, 20)) {
            for operation in operations {
                match operation {
                    Operation::RangeAct { range, .. } | Operation::RangeQuery { range } => {
                        prop_assert!(*range.end() < values.len())
                    }
                    Operation::PointChange { .. } => prop_assert!(false, "no point changes expected"),
                }
            }
        }
    }
}
