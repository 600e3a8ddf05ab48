use std::ops::RangeInclusive;

use common::QsResult;

use super::{Base, SparseTable};
use crate::{range::checked_bounds, FloorLog};

/// A sparse table for operations which are associative, commutative and idempotent,
/// e.g. min, max or gcd.
///
/// Every level stores the index of the element which wins its window. Two windows of a
/// query may overlap, idempotency makes the overlap harmless.
/// # Runtime
/// Building takes O(n log n), a query O(1).
/// # Remarks
/// The element at `i` wins against the one at `j` iff `f(a[i], a[j]) == a[i]`.
/// An operation which returns neither of its arguments is not supported.
#[derive(Debug, Clone)]
pub struct IdempotentSparseTable<'l, T, F> {
    base: Base<'l, T, F>,
    sparse: Vec<Vec<usize>>,
}

impl<'l, T, F> IdempotentSparseTable<'l, T, F>
where
    T: Clone + PartialEq,
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
            "built idempotent sparse table over {} elements with {} levels",
            table.len(),
            table.count_of_levels()
        );
        table
    }

    fn initialize(&mut self) {
        let n = self.base.len();
        if n == 0 {
            return;
        }
        let mut sparse = Vec::with_capacity(self.base.log);
        sparse.push((0..n).collect::<Vec<_>>());
        for level in 1..self.base.log {
            let half = 1 << (level - 1);
            let previous: &Vec<usize> = &sparse[level - 1];
            let row = (0..=n - (1 << level))
                .map(|i| self.winner(previous[i], previous[i + half]))
                .collect();
            sparse.push(row);
        }
        self.sparse = sparse;
    }

    fn winner(&self, i: usize, j: usize) -> usize {
        let values = &self.base.values;
        if (self.base.f)(&values[i], &values[j]) == values[i] {
            i
        } else {
            j
        }
    }

    /// Gives the position of the element which represents the combination of `range`.
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    /// # Example
    /// ```
    /// # use query_structures::{FloorLog, IdempotentSparseTable};
    /// let floor_log = FloorLog::new();
    /// let table = IdempotentSparseTable::new(&[1, 3, 2, 5, 4], |a: &i32, b: &i32| *a.max(b), &floor_log);
    /// assert_eq!(table.ask_index(0..=4).unwrap(), 3);
    /// assert!(table.ask_index(2..=5).is_err());
    /// ```
    pub fn ask_index(&self, range: RangeInclusive<usize>) -> QsResult<usize> {
        let (left, right) = checked_bounds(&range, self.len())?;
        let level = self.base.level_for(right - left + 1);
        let from_left = self.sparse[level][left];
        let from_right = self.sparse[level][right + 1 - (1 << level)];
        Ok(self.winner(from_left, from_right))
    }
}

impl<'l, T, F> SparseTable<T> for IdempotentSparseTable<'l, T, F>
where
    T: Clone + PartialEq,
    F: Fn(&T, &T) -> T,
{
    fn len(&self) -> usize {
        self.base.len()
    }

    fn count_of_levels(&self) -> usize {
        self.base.log
    }

    fn ask_value(&self, range: RangeInclusive<usize>) -> QsResult<T> {
        let index = self.ask_index(range)?;
        Ok(self.base.values[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::IdempotentSparseTable;
    use crate::{FloorLog, SparseTable};

    #[test]
    fn ties_are_won_by_the_left_window() {
        let floor_log = FloorLog::new();
        let values = [(2, 'a'), (1, 'b'), (1, 'c'), (3, 'd')];
        let table = IdempotentSparseTable::new(
            &values,
            |a: &(i32, char), b: &(i32, char)| if b.0 < a.0 { *b } else { *a },
            &floor_log,
        );
        assert_eq!(table.ask_index(0..=3).unwrap(), 1);
        assert_eq!(table.ask_value(1..=2).unwrap(), (1, 'b'));
        assert_eq!(table.ask_value(2..=3).unwrap(), (1, 'c'));
    }

    #[test]
    fn levels_cover_every_power_of_two() {
        let floor_log = FloorLog::new();
        let values: Vec<u32> = (0..17).collect();
        let table = IdempotentSparseTable::new(&values, |a: &u32, b: &u32| *a.min(b), &floor_log);
        assert_eq!(table.count_of_levels(), 5);
        assert_eq!(table.sparse.len(), 5);
        assert_eq!(table.sparse[4].len(), 2);
    }
}
