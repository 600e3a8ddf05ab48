use super::RootDecomposition;
use crate::exponentiation::{idempotent_exponentiate, repeated_addition};
use common::{logging::init_test_logging, QsError};
use itertools::iproduct;
use proptest::prelude::*;
use test_helpers::{fold_range, range_operations, Operation};

fn sum(a: &i64, b: &i64) -> i64 {
    a.wrapping_add(*b)
}

fn min(a: &i64, b: &i64) -> i64 {
    *a.min(b)
}

#[test]
fn add_to_prefix_then_query_everything() {
    init_test_logging();
    let mut blocks = RootDecomposition::new(&[1, 3, 2, 5, 4], sum);
    blocks.act(0..=2, 10).unwrap();
    // (1 + 10) + (3 + 10) + (2 + 10) + 5 + 4
    assert_eq!(blocks.get_result_on(0..=4).unwrap(), 45);
    assert_eq!(blocks.get_result_on(3..=4).unwrap(), 9);
}

#[test]
fn block_layout() {
    let values: Vec<i64> = (0..10).collect();
    let blocks = RootDecomposition::new(&values, sum);
    assert_eq!(blocks.len(), 10);
    assert_eq!(blocks.block_length(), 3);
    assert_eq!(blocks.count_of_blocks(), 4);
}

#[test]
fn covered_blocks_stay_lazy() {
    let values: Vec<i64> = (1..=16).collect();
    let mut blocks = RootDecomposition::with_exponentiation(&values, sum, repeated_addition);
    blocks.act(2..=13, 100).unwrap();
    // blocks 1 and 2 are covered, blocks 0 and 3 only partially
    assert_eq!(blocks.count_of_pending_blocks(), 2);

    // fully covered blocks are answered without pushing down
    assert_eq!(blocks.get_result_on(4..=11).unwrap(), (5..=12).sum::<i64>() + 800);
    assert_eq!(blocks.count_of_pending_blocks(), 2);

    // a partial query pushes down exactly the touched block
    assert_eq!(blocks.get_result_on(5..=6).unwrap(), 6 + 7 + 200);
    assert_eq!(blocks.count_of_pending_blocks(), 1);
    assert_eq!(blocks.get(9).unwrap(), 110);
}

#[test]
fn pending_operands_compose() {
    let values = [4, 8, 1, 9];
    let mut blocks = RootDecomposition::with_exponentiation(&values, min, idempotent_exponentiate);
    blocks.act(0..=3, 6).unwrap();
    blocks.act(0..=1, 5).unwrap();
    blocks.act(2..=3, 0).unwrap();
    let expected = [4, 5, 0, 0];
    for (l, r) in iproduct!(0..4, 0..4).filter(|(l, r)| l <= r) {
        assert_eq!(blocks.get_result_on(l..=r).unwrap(), fold_range(&expected, l..=r, min));
    }
}

#[test]
fn single_element() {
    let mut blocks = RootDecomposition::new(&[7], sum);
    blocks.act(0..=0, 3).unwrap();
    blocks.act(0..=0, 3).unwrap();
    assert_eq!(blocks.get_result_on(0..=0).unwrap(), 13);
    assert_eq!(blocks.get(0).unwrap(), 13);
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn invalid_ranges_are_errors_and_change_nothing() {
    let mut blocks = RootDecomposition::new(&[1, 3, 2, 5, 4], sum);
    assert!(matches!(
        blocks.act(3..=1, 100),
        Err(QsError::InvalidRangeQsError { left: 3, right: 1, len: 5 })
    ));
    assert!(blocks.act(0..=5, 100).is_err());
    assert!(blocks.get_result_on(4..=5).is_err());
    assert!(blocks.get(5).is_err());
    assert_eq!(blocks.get_result_on(0..=4).unwrap(), 15);
}

#[test]
fn empty_decomposition_rejects_everything() {
    let values: [i64; 0] = [];
    let mut blocks = RootDecomposition::new(&values, sum);
    assert!(blocks.is_empty());
    assert_eq!(blocks.count_of_blocks(), 0);
    assert!(blocks.get_result_on(0..=0).is_err());
    assert!(blocks.act(0..=0, 1).is_err());
}

// Applies every operation eagerly to a plain vector and compares the answers.
fn check_against_eager<E>(
    mut values: Vec<i64>,
    operations: Vec<Operation>,
    f: fn(&i64, &i64) -> i64,
    fexp: E,
) -> Result<(), TestCaseError>
where
    E: Fn(&i64, &fn(&i64, &i64) -> i64, usize) -> i64,
{
    let mut blocks = RootDecomposition::with_exponentiation(&values, f, fexp);
    for operation in operations {
        match operation {
            Operation::RangeAct { range, operand } => {
                for value in &mut values[range.clone()] {
                    *value = f(value, &operand);
                }
                blocks.act(range, operand).unwrap();
            }
            Operation::RangeQuery { range } => {
                prop_assert_eq!(
                    blocks.get_result_on(range.clone()).unwrap(),
                    fold_range(&values, range, f)
                );
            }
            Operation::PointChange { .. } => unreachable!(),
        }
    }
    for (position, value) in values.iter().enumerate() {
        prop_assert_eq!(blocks.get(position).unwrap(), *value);
    }
    Ok(())
}

proptest! {
    #[test]
    fn sum_with_closed_form_is_transparent((values, operations) in range_operations(-1000..1000, 150, 60)) {
        check_against_eager(values, operations, sum, repeated_addition)?;
    }

    #[test]
    fn sum_with_generic_rule_is_transparent((values, operations) in range_operations(-1000..1000, 150, 60)) {
        check_against_eager(values, operations, sum, crate::exponentiation::generic_exponentiate)?;
    }

    #[test]
    fn min_is_transparent((values, operations) in range_operations(-1000..1000, 150, 60)) {
        check_against_eager(values, operations, min, idempotent_exponentiate)?;
    }
}
