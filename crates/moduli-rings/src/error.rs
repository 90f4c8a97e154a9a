//! Error type shared by the ring and polynomial layers.

use thiserror::Error;

/// Errors surfaced at the boundary of ring and polynomial operations.
///
/// Every variant is a precondition violation: it is detected before any
/// mutation occurs, never retried, and never coerced into a partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// The modulus is outside the supported range `[2, 2^32]`.
    #[error("base {base} is not a valid modulus (expected 2 <= base <= 2^32)")]
    InvalidBase {
        /// The rejected modulus.
        base: u64,
    },

    /// A coefficient has magnitude greater than or equal to the base.
    #[error("coefficient {value} is not reduced modulo base {base}")]
    InvalidCoefficient {
        /// The rejected coefficient.
        value: i64,
        /// The modulus it was checked against.
        base: u64,
    },

    /// Two polynomials over different bases were combined.
    #[error("bases must match ({left} != {right})")]
    OperandMismatch {
        /// Base of the left operand.
        left: u64,
        /// Base of the right operand.
        right: u64,
    },

    /// Carries were requested before any were produced or set.
    #[error("no carries have been produced or set for this polynomial")]
    CarriesUnset,

    /// A division was attempted whose divisor's leading coefficient shares a
    /// nontrivial common factor with the base.
    #[error("{unit} is not invertible modulo {base}")]
    NonInvertibleDivisor {
        /// The non-unit leading coefficient.
        unit: i64,
        /// The modulus it was inverted against.
        base: u64,
    },
}
