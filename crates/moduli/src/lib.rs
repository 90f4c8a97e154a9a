//! # Moduli
//!
//! Exact arithmetic over univariate polynomials whose coefficients live in a
//! ring of integers modulo a base `b`.
//!
//! Choosing `b` as a number base (2, 10, 2^32, ...) turns coefficients into
//! base-`b` digits: polynomial addition, subtraction, and multiplication with
//! recorded carries become the engine underneath arbitrary-precision integer
//! and radix-point arithmetic, and schoolbook long division rounds out the
//! Euclidean structure of the ring.
//!
//! ## Quick Start
//!
//! ```rust
//! use moduli::prelude::*;
//!
//! // the digits of 123 and 8, least significant first
//! let a = Polynomial::new(vec![3, 2, 1], 10)?;
//! let b = Polynomial::new(vec![8], 10)?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum.coefficients(), &[1, 2, 1]);
//! assert_eq!(sum.carries()?, &[0, 1, 0, 0]); // 3 + 8 = 11 carries into x^1
//! # Ok::<(), RingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use moduli_poly as poly;
pub use moduli_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use moduli_poly::Polynomial;
    pub use moduli_rings::{unit_inverse, RingError};
}
