#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains the range query structures.
//!
//! All of them are built from a sequence and an associative operation `f: Fn(&T, &T) -> T`
//! and answer "what is `f` folded over the positions `l..=r`?". Which further properties
//! `f` needs is documented on each structure; they cannot be checked at runtime.
//!
//! | structure | build | query | update |
//! |---|---|---|---|
//! | [IdempotentSparseTable] | O(n log n) | O(1) | - |
//! | [GeneralSparseTable] | O(n log n) | O(log n) | - |
//! | [SegmentTree] | O(n) | O(log n) | point, O(log n) |
//! | [RootDecomposition] | O(n) | O(sqrt n) | range, O(sqrt n) |
//! | [PrefixSums] | O(n) | O(1) | - |
//!
//! Ranges outside the structure are reported as `common::QsError::InvalidRangeQsError`.

mod floor_log;
pub use floor_log::FloorLog;

pub mod exponentiation;

mod range;

pub mod sparse_table;
pub use sparse_table::{GeneralSparseTable, IdempotentSparseTable, SparseTable};

pub mod segment_tree;
pub use segment_tree::SegmentTree;

pub mod root_decomposition;
pub use root_decomposition::RootDecomposition;

pub mod prefix_sums;
pub use prefix_sums::PrefixSums;
