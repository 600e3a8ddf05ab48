//! Rules which collapse `times` repeated applications of an operand into one value.
//!
//! An exponentiation rule has the shape `Fn(&T, &F, usize) -> T` where `F` is the
//! combining operation. [RootDecomposition](crate::RootDecomposition) uses it to fold a
//! pending operand into the result of a whole block without touching every element.

use std::ops::Mul;

use num::{FromPrimitive, One};

/// Applies `f` `times - 1` times, which is correct for every operation.
/// # Remarks
/// For `times == 0` the operand itself is returned.
/// # Example
/// ```
/// # use query_structures::exponentiation::generic_exponentiate;
/// let add = |a: &u32, b: &u32| a + b;
/// assert_eq!(generic_exponentiate(&3, &add, 4), 12);
/// ```
pub fn generic_exponentiate<T, F>(value: &T, f: &F, times: usize) -> T
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    let mut answer = value.clone();
    for _ in 1..times {
        answer = f(&answer, value);
    }
    answer
}

/// Closed form for addition: adding `x` `k` times is adding `k * x`.
/// Falls back to [generic_exponentiate] if `times` is not representable in `T`.
pub fn repeated_addition<T, F>(value: &T, f: &F, times: usize) -> T
where
    T: Clone + Mul<Output = T> + FromPrimitive,
    F: Fn(&T, &T) -> T,
{
    match T::from_usize(times) {
        Some(times) => value.clone() * times,
        None => generic_exponentiate(value, f, times),
    }
}

/// Closed form for multiplication by exponentiation by squaring.
pub fn repeated_multiplication<T, F>(value: &T, _f: &F, times: usize) -> T
where
    T: Clone + One + Mul<Output = T>,
    F: Fn(&T, &T) -> T,
{
    num::pow::pow(value.clone(), times)
}

/// For idempotent operations (min, max, gcd, ...) repeating an operand changes nothing.
pub fn idempotent_exponentiate<T, F>(value: &T, _f: &F, _times: usize) -> T
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    value.clone()
}
