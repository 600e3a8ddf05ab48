use std::ops::{Range, RangeInclusive};

use common::{QsError, QsResult};

/// Unpacks an inclusive query range and checks that it lies inside `0..len`.
pub(crate) fn checked_bounds(range: &RangeInclusive<usize>, len: usize) -> QsResult<(usize, usize)> {
    let (left, right) = (*range.start(), *range.end());
    QsError::check_range(left, right, len)?;
    Ok((left, right))
}

/// Node ranges of the segment tree are half-open.
pub trait RangeExt {
    fn is_splittable(&self) -> bool;

    fn is_empty(&self) -> bool;

    /// Splits at the midpoint, the left half gets the smaller part.
    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized;

    fn intersects(&self, rhs: &Self) -> bool;

    fn is_superset(&self, other: &Self) -> bool;
}

impl RangeExt for Range<usize> {
    fn is_splittable(&self) -> bool {
        self.end > self.start + 1
    }

    fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    fn split(&self) -> Option<(Self, Self)>
    where
        Self: Sized,
    {
        if self.is_splittable() {
            let mid = self.start + (self.end - self.start) / 2;
            Some((self.start..mid, mid..self.end))
        } else {
            None
        }
    }

    fn intersects(&self, rhs: &Self) -> bool {
        if RangeExt::is_empty(self) || RangeExt::is_empty(rhs) {
            return false;
        }

        if self.start <= rhs.start {
            self.end > rhs.start
        } else {
            rhs.end > self.start
        }
    }

    fn is_superset(&self, other: &Self) -> bool {
        RangeExt::is_empty(other) || (self.start <= other.start && other.end <= self.end)
    }
}
