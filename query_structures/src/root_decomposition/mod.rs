//! This module contains the square root decomposition with lazy range updates.

use std::ops::RangeInclusive;

use common::{QsError, QsResult};

use crate::{exponentiation::generic_exponentiate, range::checked_bounds};

mod block;
use block::Block;

/// Splits a sequence into blocks of `floor(sqrt(n))` elements to answer range queries and
/// to apply an operand to a whole range, both in O(sqrt(n)).
///
/// Applying an operand `x` to an element `a` means replacing it with `f(a, x)`, so updates
/// and queries use the same operation. Blocks which are entirely covered by an update
/// only remember the operand; the combined result of such a block is then derived with the
/// exponentiation rule `fexp(x, f, block_length)`, the effect of applying `x` once to
/// every element.
///
/// The operation must be associative and commutative, and the exponentiation rule must
/// agree with applying `f` repeatedly. [generic_exponentiate] is always correct, but costs
/// O(block length); see [exponentiation](crate::exponentiation) for closed forms.
/// # Example
/// ```
/// # use query_structures::{exponentiation::repeated_addition, RootDecomposition};
/// let mut blocks = RootDecomposition::with_exponentiation(
///     &[1, 3, 2, 5, 4],
///     |a: &i64, b: &i64| a + b,
///     repeated_addition,
/// );
/// blocks.act(0..=2, 10).unwrap();
/// assert_eq!(blocks.get_result_on(0..=4).unwrap(), 45);
/// assert_eq!(blocks.get(1).unwrap(), 13);
/// ```
pub struct RootDecomposition<T, F, E = fn(&T, &F, usize) -> T> {
    len: usize,
    block_length: usize,
    blocks: Vec<Block<T>>,
    f: F,
    fexp: E,
}

impl<T, F> RootDecomposition<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds the blocks using [generic_exponentiate] as exponentiation rule.
    pub fn new(values: &[T], f: F) -> Self {
        Self::with_exponentiation(values, f, generic_exponentiate::<T, F>)
    }
}

impl<T, F, E> RootDecomposition<T, F, E>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
    E: Fn(&T, &F, usize) -> T,
{
    /// Builds the blocks with a custom exponentiation rule.
    pub fn with_exponentiation(values: &[T], f: F, fexp: E) -> Self {
        let len = values.len();
        let block_length = num::integer::sqrt(len).max(1);
        let blocks: Vec<_> = values
            .chunks(block_length)
            .map(|chunk| {
                let mut block = Block::new(chunk[0].clone());
                for element in &chunk[1..] {
                    block.add_new_element(element.clone(), &f);
                }
                block
            })
            .collect();
        log::debug!(
            "built root decomposition over {} elements in {} blocks of length {}",
            len,
            blocks.len(),
            block_length
        );
        Self {
            len,
            block_length,
            blocks,
            f,
            fexp,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no elements at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements in every block but the last.
    pub fn block_length(&self) -> usize {
        self.block_length
    }

    /// Number of blocks.
    pub fn count_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Number of blocks which currently hold an operand that is not applied to their elements.
    pub fn count_of_pending_blocks(&self) -> usize {
        self.blocks.iter().filter(|block| block.has_pending()).count()
    }

    // Block and offset within it of `position`.
    fn locate(&self, position: usize) -> (usize, usize) {
        (position / self.block_length, position % self.block_length)
    }

    // Offsets of the part of `[left, right]` which lies in `block`.
    fn offsets_in(&self, block: usize, left: usize, right: usize) -> (usize, usize) {
        let start = block * self.block_length;
        let end = start + self.blocks[block].len() - 1;
        (left.max(start) - start, right.min(end) - start)
    }

    fn result_on_block(&mut self, block: usize, left: usize, right: usize) -> T {
        let (from, to) = self.offsets_in(block, left, right);
        let (f, fexp) = (&self.f, &self.fexp);
        if from == 0 && to == self.blocks[block].len() - 1 {
            self.blocks[block].full_result(f, fexp)
        } else {
            self.blocks[block].part_result_on(from, to, f, fexp)
        }
    }

    fn act_on_block(&mut self, block: usize, left: usize, right: usize, operand: &T) {
        let (from, to) = self.offsets_in(block, left, right);
        let (f, fexp) = (&self.f, &self.fexp);
        if from == 0 && to == self.blocks[block].len() - 1 {
            self.blocks[block].act_on_entire_block(operand, f)
        } else {
            self.blocks[block].act_on_part_of_block(from, to, operand, f, fexp)
        }
    }

    /// Gives the current element at `position`.
    /// # Errors
    /// Returns an InvalidRangeQsError if `position >= self.len()`.
    pub fn get(&self, position: usize) -> QsResult<T> {
        QsError::check_range(position, position, self.len)?;
        let (block, offset) = self.locate(position);
        Ok(self.blocks[block].get(offset, &self.f))
    }

    /// Combines all elements in `range` from left to right.
    /// Blocks which are only partially covered get their pending operand pushed down.
    /// # Runtime
    /// O(sqrt(n)) plus the cost of the exponentiation rule for every covered block.
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    pub fn get_result_on(&mut self, range: RangeInclusive<usize>) -> QsResult<T> {
        let (left, right) = checked_bounds(&range, self.len)?;
        let (left_block, _) = self.locate(left);
        let (right_block, _) = self.locate(right);

        let mut answer = self.result_on_block(left_block, left, right);
        for block in left_block + 1..=right_block {
            let block_answer = self.result_on_block(block, left, right);
            answer = (self.f)(&answer, &block_answer);
        }
        Ok(answer)
    }

    /// Replaces every element `a` in `range` with `f(a, operand)`.
    /// Blocks which are entirely covered only record the operand.
    /// # Runtime
    /// O(sqrt(n)) plus the cost of the exponentiation rule for the partially covered blocks.
    /// # Errors
    /// Returns an InvalidRangeQsError unless `range.start() <= range.end() < self.len()`.
    pub fn act(&mut self, range: RangeInclusive<usize>, operand: T) -> QsResult<()> {
        let (left, right) = checked_bounds(&range, self.len)?;
        let (left_block, _) = self.locate(left);
        let (right_block, _) = self.locate(right);

        for block in left_block..=right_block {
            self.act_on_block(block, left, right, &operand);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
