//! The reductions themselves. All functions here are pure.

use super::error::{ReduceError, ReduceResult};
use super::sequence::{InputSequence, Reduction};

/// Largest n whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// n! in a widened accumulator.
pub fn factorial(n: i64) -> ReduceResult<Reduction> {
    if n < 0 {
        return Err(ReduceError::NegativeFactorial { n });
    }
    let mut product: u128 = 1;
    for i in 2..=n as u128 {
        product = product
            .checked_mul(i)
            .ok_or(ReduceError::FactorialOverflow { n })?;
    }
    Ok(Reduction::Factorial(product))
}

/// Sum of all elements. Empty input sums to 0.
pub fn sum(sequence: &InputSequence) -> Reduction {
    Reduction::Sum(sequence.iter().map(|&v| i128::from(v)).sum())
}

/// A reversed copy of `sequence`, which must hold exactly `expected_len` values.
pub fn reverse(sequence: &InputSequence, expected_len: usize) -> ReduceResult<Reduction> {
    check_length(sequence, expected_len)?;
    Ok(Reduction::Reversed(
        sequence.iter().rev().copied().collect(),
    ))
}

pub fn check_length(sequence: &InputSequence, expected: usize) -> ReduceResult<()> {
    if sequence.len() != expected {
        return Err(ReduceError::WrongLength {
            expected,
            actual: sequence.len(),
        });
    }
    Ok(())
}
