//! This module contains the Segment Tree datastructure.

use std::ops::{Range, RangeInclusive};

use common::{QsError, QsResult};
use derive_more::*;
use typed_index_collections::TiVec;

use crate::range::{checked_bounds, RangeExt};

// An Index into a SegmentTree. The children of `v` are `2v + 1` and `2v + 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
struct SegmentTreeNodeIdx(usize);

impl SegmentTreeNodeIdx {
    const ROOT: Self = SegmentTreeNodeIdx(0);

    fn children(self) -> (Self, Self) {
        (Self(2 * self.0 + 1), Self(2 * self.0 + 2))
    }
}

/// A segment tree over a fixed number of elements supporting point updates and range queries
/// for any associative operation. Commutativity is not required.
///
/// Every node covers a half-open range of positions and stores the combination of it.
/// Queries which miss a node entirely use `identity`, which therefore has to satisfy
/// `f(identity, x) == x == f(x, identity)`, e.g. 0 for sums, 1 for products or the
/// largest value for minima.
/// # Runtime
/// Building takes O(n), queries and updates O(log n).
/// # Example
/// ```
/// # use query_structures::SegmentTree;
/// let mut tree = SegmentTree::new(&[5, 1, 4, 2], |a: &i32, b: &i32| *a.min(b), i32::MAX);
/// assert_eq!(tree.ask_value_on(0..=3).unwrap(), 1);
/// tree.change_value(1, 9).unwrap();
/// assert_eq!(tree.ask_value_on(0..=3).unwrap(), 2);
/// assert_eq!(tree.ask_value_on(0..=2).unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentTree<T, F> {
    len: usize,
    identity: T,
    f: F,
    data: TiVec<SegmentTreeNodeIdx, T>,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds the tree over `values`.
    pub fn new(values: &[T], f: F, identity: T) -> Self {
        let len = values.len();
        let mut tree = Self {
            len,
            data: vec![identity.clone(); 4 * len].into(),
            identity,
            f,
        };
        if len > 0 {
            tree.build(values, SegmentTreeNodeIdx::ROOT, 0..len);
        }
        log::debug!(
            "built segment tree over {} elements with {} nodes",
            len,
            tree.data.len()
        );
        tree
    }

    /// Number of positions covered by the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree covers no position at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gives the element which is combined for positions outside a query.
    pub fn identity(&self) -> &T {
        &self.identity
    }

    fn combine_children(&mut self, node: SegmentTreeNodeIdx) {
        let (left, right) = node.children();
        self.data[node] = (self.f)(&self.data[left], &self.data[right]);
    }

    fn build(&mut self, values: &[T], node: SegmentTreeNodeIdx, node_range: Range<usize>) {
        match node_range.split() {
            Some((left_range, right_range)) => {
                let (left, right) = node.children();
                self.build(values, left, left_range);
                self.build(values, right, right_range);
                self.combine_children(node);
            }
            None => self.data[node] = values[node_range.start].clone(),
        }
    }

    fn ask(
        &self,
        node: SegmentTreeNodeIdx,
        node_range: Range<usize>,
        query_range: &Range<usize>,
    ) -> T {
        if !node_range.intersects(query_range) {
            return self.identity.clone();
        }
        if query_range.is_superset(&node_range) {
            return self.data[node].clone();
        }
        match node_range.split() {
            Some((left_range, right_range)) => {
                let (left, right) = node.children();
                (self.f)(
                    &self.ask(left, left_range, query_range),
                    &self.ask(right, right_range, query_range),
                )
            }
            // a leaf which intersects the query is always contained in it
            None => self.data[node].clone(),
        }
    }

    fn alter(
        &mut self,
        node: SegmentTreeNodeIdx,
        node_range: Range<usize>,
        position: usize,
        value: T,
    ) {
        match node_range.split() {
            Some((left_range, right_range)) => {
                let (left, right) = node.children();
                if left_range.contains(&position) {
                    self.alter(left, left_range, position, value);
                } else {
                    self.alter(right, right_range, position, value);
                }
                self.combine_children(node);
            }
            None => self.data[node] = value,
        }
    }

    /// Combines all elements in `range` from left to right.
    /// # Runtime
    /// O(log n)
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    pub fn ask_value_on(&self, range: RangeInclusive<usize>) -> QsResult<T> {
        let (left, right) = checked_bounds(&range, self.len)?;
        Ok(self.ask(SegmentTreeNodeIdx::ROOT, 0..self.len, &(left..right + 1)))
    }

    /// Replaces the element at `position` with `value`.
    /// # Runtime
    /// O(log n)
    /// # Errors
    /// Returns an InvalidRangeQsError if `position >= self.len()`.
    pub fn change_value(&mut self, position: usize, value: T) -> QsResult<()> {
        QsError::check_range(position, position, self.len)?;
        self.alter(SegmentTreeNodeIdx::ROOT, 0..self.len, position, value);
        Ok(())
    }
}
