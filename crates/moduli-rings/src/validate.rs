//! Input-contract enforcement for coefficient sequences and operands.
//!
//! These guards are called inline at the top of every fallible operation,
//! before anything is allocated or mutated. They never modify their inputs.

use crate::error::RingError;

/// The largest supported modulus.
///
/// Capping the base at 2^32 keeps every convolution accumulator within
/// `i128`: a single coefficient product stays below 2^64, and the carry of
/// any realistically sized convolution fits an `i64`.
pub const MAX_BASE: u64 = 1 << 32;

/// Checks that `base` is a usable modulus.
///
/// # Errors
///
/// Returns [`RingError::InvalidBase`] unless `2 <= base <= 2^32`.
pub fn validate_base(base: u64) -> Result<(), RingError> {
    if (2..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RingError::InvalidBase { base })
    }
}

/// Checks that a single coefficient is reduced modulo `base`.
///
/// # Errors
///
/// Returns [`RingError::InvalidCoefficient`] unless `|value| < base`.
pub fn validate_coefficient(value: i64, base: u64) -> Result<(), RingError> {
    if value.unsigned_abs() < base {
        Ok(())
    } else {
        Err(RingError::InvalidCoefficient { value, base })
    }
}

/// Checks that every element of a coefficient sequence is reduced modulo
/// `base`.
///
/// Applied to raw input before trimming, and shared by every entry point
/// that accepts a sequence: construction, indexed writes, and carry setters.
///
/// # Errors
///
/// Returns [`RingError::InvalidCoefficient`] for the first offending element.
pub fn validate_coefficients(values: &[i64], base: u64) -> Result<(), RingError> {
    for &value in values {
        validate_coefficient(value, base)?;
    }
    Ok(())
}

/// Checks that two operands live over the same modulus.
///
/// # Errors
///
/// Returns [`RingError::OperandMismatch`] if the bases differ.
pub fn ensure_same_base(left: u64, right: u64) -> Result<(), RingError> {
    if left == right {
        Ok(())
    } else {
        Err(RingError::OperandMismatch { left, right })
    }
}
