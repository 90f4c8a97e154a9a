//! Modular inverses via the extended Euclidean algorithm.

use crate::error::RingError;
use crate::validate::validate_base;

/// Computes `unit^-1 mod base` using the extended Euclidean algorithm.
///
/// `unit` is reduced into `[0, base)` first, so negative units are accepted.
/// The result is the unique inverse in `[0, base)`.
///
/// Polynomial division uses this to normalize the divisor's leading
/// coefficient; it fails there exactly when that coefficient is not a unit
/// of the ring.
///
/// # Errors
///
/// Returns [`RingError::InvalidBase`] for an unusable modulus, and
/// [`RingError::NonInvertibleDivisor`] when `gcd(unit, base) > 1` (which
/// includes `unit ≡ 0 (mod base)`).
pub fn unit_inverse(unit: i64, base: u64) -> Result<u64, RingError> {
    validate_base(base)?;

    let modulus = i128::from(base);
    let reduced = i128::from(unit).rem_euclid(modulus);

    // Extended Euclidean algorithm on (base, unit), tracking the Bezout
    // coefficient of `unit`.
    let mut t: i128 = 0;
    let mut new_t: i128 = 1;
    let mut r: i128 = modulus;
    let mut new_r: i128 = reduced;

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r > 1 {
        return Err(RingError::NonInvertibleDivisor { unit, base });
    }

    if t < 0 {
        t += modulus;
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let inverse = t as u64;
    Ok(inverse)
}
