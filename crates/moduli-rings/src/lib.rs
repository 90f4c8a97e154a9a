//! # moduli-rings
//!
//! Ring-level primitives for the moduli workspace.
//!
//! This crate provides the leaves everything else is built on:
//! - The shared [`RingError`] type
//! - Input-contract validation for coefficient sequences and bases
//! - The extended-Euclidean modular inverse ([`unit_inverse`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod modular;
pub mod validate;


pub use error::RingError;
pub use modular::unit_inverse;
pub use validate::{
    ensure_same_base, validate_base, validate_coefficient, validate_coefficients, MAX_BASE,
};
