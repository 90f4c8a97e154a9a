//! Dense univariate polynomials over integers modulo a base.
//!
//! Coefficients are stored in ascending degree order, trimmed of trailing
//! zeros, with every element reduced so that `|c| < base`. The zero
//! polynomial stores an empty sequence and reports degree −1.
//!
//! Combining operations are pure ring arithmetic: each result coefficient is
//! the non-negative remainder modulo the base, and the floor-division
//! overflow at every position is recorded in a parallel carry vector rather
//! than folded into higher digits. A consumer representing big numbers reads
//! the carries back and propagates them itself.

use std::hash::{Hash, Hasher};

use moduli_rings::{
    ensure_same_base, unit_inverse, validate_base, validate_coefficient, validate_coefficients,
    RingError,
};

/// A univariate polynomial with coefficients in `Z_base`.
///
/// Value semantics: every combining operation allocates a fresh result. The
/// one in-place mutation is [`Polynomial::set`], which grows the coefficient
/// storage on out-of-range writes.
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order, trimmed, `|c| < base`.
    coeffs: Vec<i64>,
    /// The ring modulus; immutable for the lifetime of the value.
    base: u64,
    /// Carries recorded by the most recent combining operation, if any.
    carries: Option<Vec<i64>>,
}

impl Polynomial {
    /// Creates a polynomial from least-significant-first coefficients.
    ///
    /// The input is validated against the base and then trimmed of trailing
    /// zero (highest-power) coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidBase`] for an unusable modulus, or
    /// [`RingError::InvalidCoefficient`] if any element has magnitude
    /// greater than or equal to the base.
    pub fn new(coeffs: Vec<i64>, base: u64) -> Result<Self, RingError> {
        validate_base(base)?;
        validate_coefficients(&coeffs, base)?;
        Ok(Self::from_parts(coeffs, base, None))
    }

    /// Creates a polynomial from most-significant-first coefficients.
    ///
    /// The sequence is reversed before validation and trimming, so digit
    /// strings written the usual way round can be passed directly.
    ///
    /// # Errors
    ///
    /// Same contract as [`Polynomial::new`].
    pub fn from_msd(mut coeffs: Vec<i64>, base: u64) -> Result<Self, RingError> {
        coeffs.reverse();
        Self::new(coeffs, base)
    }

    /// Creates a polynomial with a pre-seeded carry vector.
    ///
    /// The carries pass through the same validation as the coefficients.
    ///
    /// # Errors
    ///
    /// Same contract as [`Polynomial::new`], applied to both sequences.
    pub fn with_carries(
        coeffs: Vec<i64>,
        base: u64,
        carries: Vec<i64>,
    ) -> Result<Self, RingError> {
        let mut poly = Self::new(coeffs, base)?;
        poly.set_carries(carries)?;
        Ok(poly)
    }

    /// Creates the zero polynomial over the given base.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidBase`] for an unusable modulus.
    pub fn zero(base: u64) -> Result<Self, RingError> {
        Self::new(Vec::new(), base)
    }

    /// Creates the monomial `c * x^power`.
    ///
    /// # Errors
    ///
    /// Same contract as [`Polynomial::new`].
    pub fn monomial(c: i64, power: usize, base: u64) -> Result<Self, RingError> {
        validate_base(base)?;
        validate_coefficient(c, base)?;
        let mut coeffs = vec![0; power + 1];
        coeffs[power] = c;
        Ok(Self::from_parts(coeffs, base, None))
    }

    /// Internal constructor for sequences already validated against `base`.
    fn from_parts(mut coeffs: Vec<i64>, base: u64, carries: Option<Vec<i64>>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self {
            coeffs,
            base,
            carries,
        }
    }

    /// Returns the ring modulus.
    #[must_use]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the degree: the highest power with a nonzero coefficient, or
    /// −1 for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    /// Returns the coefficient at the degree, or 0 for the zero polynomial.
    #[must_use]
    pub fn leading_coefficient(&self) -> i64 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// Returns the trimmed coefficient sequence, least significant first.
    #[must_use]
    pub fn coefficients(&self) -> &[i64] {
        &self.coeffs
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of `x^i`, reading 0 above the degree.
    ///
    /// Every polynomial thus behaves as an infinite coefficient sequence
    /// that is eventually all zero.
    #[must_use]
    pub fn get(&self, i: usize) -> i64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Writes the coefficient of `x^i` in place.
    ///
    /// Writes above the current degree zero-extend the storage first;
    /// writing a zero over the leading coefficient re-trims. This is the one
    /// mutating operation on an otherwise value-semantic type.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCoefficient`] if `|value| >= base`; the
    /// polynomial is left untouched.
    pub fn set(&mut self, i: usize, value: i64) -> Result<(), RingError> {
        validate_coefficient(value, self.base)?;
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, 0);
        }
        self.coeffs[i] = value;
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
        Ok(())
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// Accumulation is done in `i128`; evaluating at `x = base` yields the
    /// number the digit sequence denotes.
    #[must_use]
    pub fn eval(&self, x: i64) -> i128 {
        let x = i128::from(x);
        let mut result: i128 = 0;
        for &c in self.coeffs.iter().rev() {
            result = result * x + i128::from(c);
        }
        result
    }

    /// Adds two polynomials over the same base.
    ///
    /// For each index, the result coefficient is `(a + b) mod base` and the
    /// floor-division overflow `(a + b) div base` is recorded at the next
    /// index of the carry vector. The carries are output only; they are not
    /// folded into higher result digits.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OperandMismatch`] if the bases differ.
    pub fn add(&self, other: &Self) -> Result<Self, RingError> {
        ensure_same_base(self.base, other.base)?;
        Ok(self.combine(other, |a, b| a + b))
    }

    /// Subtracts another polynomial over the same base.
    ///
    /// Mirrors [`Polynomial::add`] with a difference per index; under floor
    /// division the recorded borrow is nonpositive whenever the difference
    /// is negative and not a multiple of the base.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OperandMismatch`] if the bases differ.
    pub fn sub(&self, other: &Self) -> Result<Self, RingError> {
        ensure_same_base(self.base, other.base)?;
        Ok(self.combine(other, |a, b| a - b))
    }

    /// Index-wise combination over `max(deg) + 1` positions.
    fn combine(&self, other: &Self, op: impl Fn(i64, i64) -> i64) -> Self {
        let n = self.coeffs.len().max(other.coeffs.len());
        #[allow(clippy::cast_possible_wrap)]
        let base = self.base as i64;

        let mut coeffs = Vec::with_capacity(n);
        let mut carries = vec![0i64; n + 1];
        for i in 0..n {
            let raw = op(self.get(i), other.get(i));
            coeffs.push(raw.rem_euclid(base));
            carries[i + 1] = raw.div_euclid(base);
        }

        Self::from_parts(coeffs, self.base, Some(carries))
    }

    /// Multiplies two polynomials over the same base.
    ///
    /// Reference schoolbook convolution, quadratic in the degree: output
    /// coefficient `i` accumulates `sum(a[j] * b[i - j])` exactly, is
    /// reduced modulo the base, and the overflow is recorded in the carry
    /// vector. A transform-based near-linearithmic path may replace this as
    /// a drop-in with the same contract.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OperandMismatch`] if the bases differ.
    pub fn mul(&self, other: &Self) -> Result<Self, RingError> {
        ensure_same_base(self.base, other.base)?;

        let n = usize::try_from(self.degree() + other.degree() + 1).unwrap_or(0);
        let base = i128::from(self.base);

        let mut coeffs = Vec::with_capacity(n);
        let mut carries = vec![0i64; n + 1];
        for i in 0..n {
            let mut acc: i128 = 0;
            for j in 0..=i {
                acc += i128::from(self.get(j)) * i128::from(other.get(i - j));
            }
            #[allow(clippy::cast_possible_truncation)]
            {
                coeffs.push(acc.rem_euclid(base) as i64);
                carries[i + 1] = acc.div_euclid(base) as i64;
            }
        }

        Ok(Self::from_parts(coeffs, self.base, Some(carries)))
    }

    /// Divides by another polynomial, returning `(quotient, remainder)`.
    ///
    /// Schoolbook long division: the divisor's leading coefficient is
    /// inverted modulo the base, and each step cancels the remainder's
    /// leading term with one quotient monomial, strictly reducing the
    /// remainder's degree. On success `self = quotient * divisor + remainder`
    /// coefficient-wise modulo the base, with
    /// `remainder.degree() < divisor.degree()`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::OperandMismatch`] if the bases differ, or
    /// [`RingError::NonInvertibleDivisor`] if the divisor's leading
    /// coefficient is not a unit of the ring (the zero divisor included).
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), RingError> {
        ensure_same_base(self.base, other.base)?;
        let inverse = unit_inverse(other.leading_coefficient(), self.base)?;
        let base = i128::from(self.base);

        let mut quotient = Self::from_parts(Vec::new(), self.base, None);
        let mut remainder = Self::from_parts(self.coeffs.clone(), self.base, None);

        while remainder.degree() >= other.degree() {
            #[allow(clippy::cast_sign_loss)]
            let shift = (remainder.degree() - other.degree()) as usize;

            // The leading coefficients cancel exactly: lead * inverse * lead(other)
            // is congruent to lead modulo the base.
            let lead = i128::from(remainder.leading_coefficient());
            #[allow(clippy::cast_possible_truncation)]
            let scaled = (lead * i128::from(inverse)).rem_euclid(base) as i64;

            let mut term_coeffs = vec![0; shift + 1];
            term_coeffs[shift] = scaled;
            let term = Self::from_parts(term_coeffs, self.base, None);

            quotient = quotient.add(&term)?;
            remainder = remainder.sub(&term.mul(other)?)?;
        }

        Ok((quotient, remainder))
    }

    /// Returns the carries recorded by the most recent combining operation,
    /// or explicitly set via [`Polynomial::set_carries`].
    ///
    /// Index 0 is always 0 (nothing carries into the constant term); entry
    /// `i + 1` is the overflow produced at position `i`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::CarriesUnset`] if no carries have ever been
    /// produced or set for this value.
    pub fn carries(&self) -> Result<&[i64], RingError> {
        self.carries.as_deref().ok_or(RingError::CarriesUnset)
    }

    /// Replaces the carry vector.
    ///
    /// The sequence passes through the same validation as coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidCoefficient`] if any entry has magnitude
    /// greater than or equal to the base; the stored carries are left
    /// untouched.
    pub fn set_carries(&mut self, carries: Vec<i64>) -> Result<(), RingError> {
        validate_coefficients(&carries, self.base)?;
        self.carries = Some(carries);
        Ok(())
    }
}

/// Value equality: trimmed coefficient sequences and bases. Carries never
/// participate.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.coeffs == other.coeffs
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.coeffs.hash(state);
    }
}
