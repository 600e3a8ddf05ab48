//! A lazily grown table of floor(log2(n)).

use std::cell::RefCell;

/// Memoizes `floor(log2(n))` for all `n` up to the largest value asked for so far.
///
/// The cache is owned by the caller and handed to the sparse tables by reference,
/// so several tables can share one table while each of them may still grow it.
/// Growing needs interior mutability, hence `FloorLog` is not `Sync`.
/// # Example
/// ```
/// # use query_structures::FloorLog;
/// let floor_log = FloorLog::new();
/// assert_eq!(floor_log.get_floor_log(1), 0);
/// assert_eq!(floor_log.get_floor_log(1000), 9);
/// assert_eq!(floor_log.get_floor_log(1024), 10);
/// ```
#[derive(Debug, Clone)]
pub struct FloorLog {
    table: RefCell<Vec<usize>>,
}

impl Default for FloorLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorLog {
    /// Creates a cache which knows the answers for 0 and 1.
    pub fn new() -> Self {
        Self {
            table: RefCell::new(vec![0, 0]),
        }
    }

    /// Creates a cache which is already grown up to `n`.
    pub fn with_capacity(n: usize) -> Self {
        let floor_log = Self::new();
        floor_log.initialize_to_or_clear_after(n);
        floor_log
    }

    /// Largest `n` for which the answer is currently stored.
    pub fn computed_up_to(&self) -> usize {
        self.table.borrow().len() - 1
    }

    /// Grows the table up to `n`, or drops all stored entries above `n`.
    /// Dropping entries never changes an answer, they are just recomputed on demand.
    pub fn initialize_to_or_clear_after(&self, n: usize) {
        let mut table = self.table.borrow_mut();
        let n = n.max(1);
        if table.len() > n + 1 {
            table.truncate(n + 1);
            return;
        }
        let missing = n + 1 - table.len();
        table.reserve(missing);
        for i in table.len()..=n {
            let value = table[i / 2] + 1;
            table.push(value);
        }
    }

    /// Returns `floor(log2(n))`, growing the table if `n` was not seen so far.
    /// # Remarks
    /// For `n == 0` this returns 0.
    pub fn get_floor_log(&self, n: usize) -> usize {
        if n > self.computed_up_to() {
            log::trace!("growing floor log table to {}", n);
            self.initialize_to_or_clear_after(n);
        }
        self.table.borrow()[n]
    }
}

#[cfg(test)]
mod tests {
    use super::FloorLog;
    use proptest::prelude::*;

    #[test]
    fn matches_float_logarithm() {
        let floor_log = FloorLog::new();
        for i in 1..=1000usize {
            assert_eq!(
                floor_log.get_floor_log(i),
                (i as f64).log2() as usize,
                "wrong logarithm for {}",
                i
            );
        }
    }

    #[test]
    fn growing_and_truncating_keeps_answers() {
        let floor_log = FloorLog::new();
        floor_log.initialize_to_or_clear_after(100);
        assert_eq!(floor_log.computed_up_to(), 100);
        assert_eq!(floor_log.get_floor_log(1), 0);
        assert_eq!(floor_log.get_floor_log(2), 1);
        assert_eq!(floor_log.get_floor_log(4), 2);

        floor_log.initialize_to_or_clear_after(200);
        assert_eq!(floor_log.get_floor_log(1), 0);
        assert_eq!(floor_log.get_floor_log(4), 2);
        assert_eq!(floor_log.get_floor_log(128), 7);
        assert_eq!(floor_log.get_floor_log(256), 8);

        floor_log.initialize_to_or_clear_after(50);
        assert_eq!(floor_log.computed_up_to(), 50);
        assert_eq!(floor_log.get_floor_log(2), 1);
        assert_eq!(floor_log.get_floor_log(32), 5);
        assert_eq!(floor_log.get_floor_log(64), 6);
        assert_eq!(floor_log.computed_up_to(), 64);
    }

    #[test]
    fn growing_after_truncating_to_one_recomputes() {
        let floor_log = FloorLog::with_capacity(300);
        floor_log.initialize_to_or_clear_after(1);
        assert_eq!(floor_log.computed_up_to(), 1);
        assert_eq!(floor_log.get_floor_log(3), 1);
        assert_eq!(floor_log.get_floor_log(300), 8);
        assert_eq!(floor_log.computed_up_to(), 300);
    }

    #[test]
    fn with_capacity_is_grown() {
        let floor_log = FloorLog::with_capacity(17);
        assert_eq!(floor_log.computed_up_to(), 17);
        assert_eq!(floor_log.get_floor_log(17), 4);
    }

    #[test]
    fn powers_of_two() {
        let floor_log = FloorLog::new();
        for k in 0..20 {
            assert_eq!(floor_log.get_floor_log(1 << k), k);
        }
    }

    proptest! {
        #[test]
        fn monotone_and_stable_after_growth(n in 1..4096usize, m in 1..4096usize) {
            let floor_log = FloorLog::new();
            let before = floor_log.get_floor_log(n);
            floor_log.get_floor_log(n.max(m) * 2);
            prop_assert_eq!(floor_log.get_floor_log(n), before);
            if n <= m {
                prop_assert!(floor_log.get_floor_log(n) <= floor_log.get_floor_log(m));
            }
        }
    }
}
