//! # moduli-poly
//!
//! Exact univariate polynomial arithmetic over the ring of integers modulo a
//! base `b`.
//!
//! Coefficients double as base-`b` digits: with `b = 2`, `10`, or `2^32`, a
//! [`Polynomial`] is the internal representation of an arbitrary-precision
//! integer, and the carry vector produced by each combining operation is the
//! overflow a higher-precision consumer propagates into the next digit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use moduli_rings::RingError;
