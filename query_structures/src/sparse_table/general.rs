use std::ops::RangeInclusive;

use common::QsResult;

use super::{Base, SparseTable};
use crate::{range::checked_bounds, FloorLog};

/// A sparse table for operations which are associative and commutative, e.g. sum,
/// product or lcm. Idempotency is not needed.
///
/// Level `L` stores the combined value of every window `[i, i + 2^L)`.
/// A query splits the range into disjoint power-of-two windows, the largest first,
/// so no element is combined twice.
/// # Runtime
/// Building takes O(n log n), a query O(log n).
#[derive(Debug, Clone)]
pub struct GeneralSparseTable<'l, T, F> {
    base: Base<'l, T, F>,
    // level 0 are the values in `base`, so this starts at level 1
    sparse: Vec<Vec<T>>,
}

impl<'l, T, F> GeneralSparseTable<'l, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds the table over a copy of `values`.
    /// The table grows `floor_log` if it does not cover `values.len()` yet.
    pub fn new(values: &[T], f: F, floor_log: &'l FloorLog) -> Self {
        let mut table = Self {
            base: Base::new(values, f, floor_log),
            sparse: Vec::new(),
        };
        table.initialize();
        log::debug!(
            "built general sparse table over {} elements with {} levels",
            table.len(),
            table.count_of_levels()
        );
        table
    }

    fn initialize(&mut self) {
        let n = self.base.len();
        let mut sparse: Vec<Vec<T>> = Vec::with_capacity(self.base.log.saturating_sub(1));
        for level in 1..self.base.log {
            let half = 1 << (level - 1);
            let previous = match sparse.last() {
                Some(row) => row.as_slice(),
                None => self.base.values.as_slice(),
            };
            let row = (0..=n - (1 << level))
                .map(|i| (self.base.f)(&previous[i], &previous[i + half]))
                .collect();
            sparse.push(row);
        }
        self.sparse = sparse;
    }

    fn window(&self, level: usize, start: usize) -> &T {
        if level == 0 {
            &self.base.values[start]
        } else {
            &self.sparse[level - 1][start]
        }
    }
}

impl<'l, T, F> SparseTable<T> for GeneralSparseTable<'l, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    fn len(&self) -> usize {
        self.base.len()
    }

    fn count_of_levels(&self) -> usize {
        self.base.log
    }

    fn ask_value(&self, range: RangeInclusive<usize>) -> QsResult<T> {
        let (mut left, right) = checked_bounds(&range, self.len())?;
        let level = self.base.level_for(right - left + 1);
        let mut result = self.window(level, left).clone();
        left += 1 << level;
        while left <= right {
            let level = self.base.level_for(right - left + 1);
            result = (self.base.f)(&result, self.window(level, left));
            left += 1 << level;
        }
        Ok(result)
    }
}
