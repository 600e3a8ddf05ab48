//! This module contains the static sparse tables.
//!
//! Both tables precompute, for every power of two `2^level` and every start `i`,
//! the answer for the window `[i, i + 2^level)`. They differ in what is stored and
//! how a query combines the windows:
//! * [IdempotentSparseTable] stores the index of the winning element and answers with
//!   two overlapping windows. The operation has to be idempotent.
//! * [GeneralSparseTable] stores combined values and answers with disjoint windows.

use std::ops::RangeInclusive;

use common::QsResult;

use crate::FloorLog;

/// A trait which abstracts over the sparse table types.
/// # Example
/// ```
/// # use query_structures::{FloorLog, GeneralSparseTable, IdempotentSparseTable, SparseTable};
/// fn ask_all<T>(table: &impl SparseTable<T>) -> T {
///     table.ask_value(0..=table.len() - 1).unwrap()
/// }
/// let floor_log = FloorLog::new();
/// let values = [1, 3, 2, 5, 4];
/// let min = IdempotentSparseTable::new(&values, |a: &i32, b: &i32| *a.min(b), &floor_log);
/// let sum = GeneralSparseTable::new(&values, |a: &i32, b: &i32| a + b, &floor_log);
/// assert_eq!(ask_all(&min), 1);
/// assert_eq!(ask_all(&sum), 15);
/// ```
pub trait SparseTable<T> {
    /// Number of elements the table was built from.
    fn len(&self) -> usize;

    /// Whether the table was built from an empty sequence.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of precomputed levels, that is `floor(log2(len)) + 1` or 0 if the table is empty.
    fn count_of_levels(&self) -> usize;

    /// Combines all elements in `range`.
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    fn ask_value(&self, range: RangeInclusive<usize>) -> QsResult<T>;
}

// What both tables need: the source values, the operation and the logarithms.
#[derive(Debug, Clone)]
struct Base<'l, T, F> {
    values: Vec<T>,
    f: F,
    log: usize,
    floor_log: &'l FloorLog,
}

impl<'l, T: Clone, F: Fn(&T, &T) -> T> Base<'l, T, F> {
    fn new(values: &[T], f: F, floor_log: &'l FloorLog) -> Self {
        let log = if values.is_empty() {
            0
        } else {
            floor_log.get_floor_log(values.len()) + 1
        };
        Self {
            values: values.to_vec(),
            f,
            log,
            floor_log,
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    // Largest level whose windows fit into a range of `len` elements.
    fn level_for(&self, len: usize) -> usize {
        self.floor_log.get_floor_log(len)
    }
}

mod idempotent;
pub use idempotent::IdempotentSparseTable;

mod general;
pub use general::GeneralSparseTable;
