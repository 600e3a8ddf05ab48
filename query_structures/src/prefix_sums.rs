//! Prefix sums for O(1) range sums over a fixed sequence.

use std::ops::{Add, RangeInclusive, Sub};

use common::QsResult;
use num::Zero;

use crate::range::checked_bounds;

/// Stores `values[0] + ... + values[i]` for every `i`.
/// A range sum is the difference of two prefix sums, so `T` needs a subtraction
/// inverting its addition.
/// # Example
/// ```
/// # use query_structures::PrefixSums;
/// let sums = PrefixSums::new(&[1, 3, 2, 5, 4]);
/// assert_eq!(sums.ask(1..=3).unwrap(), 10);
/// assert_eq!(sums.ask(0..=4).unwrap(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixSums<T> {
    prefix_sums: Vec<T>,
}

impl<T> PrefixSums<T>
where
    T: Clone + Zero + Add<Output = T> + Sub<Output = T>,
{
    /// Builds the prefix sums in O(n).
    pub fn new(values: &[T]) -> Self {
        let prefix_sums = values
            .iter()
            .scan(T::zero(), |sum, value| {
                *sum = sum.clone() + value.clone();
                Some(sum.clone())
            })
            .collect();
        Self { prefix_sums }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.prefix_sums.len()
    }

    /// Whether there are no elements at all.
    pub fn is_empty(&self) -> bool {
        self.prefix_sums.is_empty()
    }

    /// The sum of all elements in `range`.
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    pub fn ask(&self, range: RangeInclusive<usize>) -> QsResult<T> {
        let (left, right) = checked_bounds(&range, self.len())?;
        let before = match left {
            0 => T::zero(),
            _ => self.prefix_sums[left - 1].clone(),
        };
        Ok(self.prefix_sums[right].clone() - before)
    }
}
