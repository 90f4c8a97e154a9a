//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use moduli_rings::unit_inverse;

    // Strategy for generating a small runtime modulus
    fn base() -> impl Strategy<Value = u64> {
        2u64..64
    }

    // Canonical digit vectors in [0, base), up to degree 7
    #[allow(clippy::cast_possible_wrap)]
    fn digits(base: u64) -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(0..base as i64, 0..8)
    }

    fn poly_pair() -> impl Strategy<Value = (Polynomial, Polynomial)> {
        base().prop_flat_map(|b| {
            (digits(b), digits(b)).prop_map(move |(x, y)| {
                (
                    Polynomial::new(x, b).unwrap(),
                    Polynomial::new(y, b).unwrap(),
                )
            })
        })
    }

    fn poly_triple() -> impl Strategy<Value = (Polynomial, Polynomial, Polynomial)> {
        base().prop_flat_map(|b| {
            (digits(b), digits(b), digits(b)).prop_map(move |(x, y, z)| {
                (
                    Polynomial::new(x, b).unwrap(),
                    Polynomial::new(y, b).unwrap(),
                    Polynomial::new(z, b).unwrap(),
                )
            })
        })
    }

    // Dividend plus a divisor whose leading coefficient is a unit mod base
    fn division_pair() -> impl Strategy<Value = (Polynomial, Polynomial)> {
        base()
            .prop_flat_map(|b| {
                (digits(b), digits(b)).prop_map(move |(x, y)| {
                    (
                        Polynomial::new(x, b).unwrap(),
                        Polynomial::new(y, b).unwrap(),
                    )
                })
            })
            .prop_filter("divisor's leading coefficient must be a unit", |(_, d)| {
                unit_inverse(d.leading_coefficient(), d.base()).is_ok()
            })
    }

    proptest! {
        #[test]
        fn construction_round_trips((a, _) in poly_pair()) {
            for (i, &c) in a.coefficients().iter().enumerate() {
                prop_assert_eq!(a.get(i), c);
            }
            let above = usize::try_from(a.degree() + 1).unwrap_or(0);
            prop_assert_eq!(a.get(above), 0);
            prop_assert_eq!(a.get(above + 100), 0);
        }

        #[test]
        fn trimmed_leading_coefficient_is_nonzero((a, _) in poly_pair()) {
            if !a.is_zero() {
                prop_assert!(a.leading_coefficient() != 0);
            }
        }

        #[test]
        fn add_commutative((a, b) in poly_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn add_associative((a, b, c) in poly_triple()) {
            prop_assert_eq!(
                a.add(&b).unwrap().add(&c).unwrap(),
                a.add(&b.add(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn sub_undoes_add((a, b) in poly_pair()) {
            prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
        }

        #[test]
        fn add_identity((a, _) in poly_pair()) {
            let zero = Polynomial::zero(a.base()).unwrap();
            prop_assert_eq!(a.add(&zero).unwrap(), a.clone());
            prop_assert_eq!(zero.add(&a).unwrap(), a);
        }

        #[test]
        fn mul_commutative((a, b) in poly_pair()) {
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn mul_distributes_over_add((a, b, c) in poly_triple()) {
            let left = a.mul(&b.add(&c).unwrap()).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_degree_bound((a, b) in poly_pair()) {
            let product = a.mul(&b).unwrap();
            prop_assert!(product.degree() <= a.degree() + b.degree() + 1);
            if a.is_zero() || b.is_zero() {
                prop_assert!(product.is_zero());
            }
        }

        #[test]
        fn combining_carries_shape((a, b) in poly_pair()) {
            let n = usize::try_from(a.degree().max(b.degree()) + 1).unwrap_or(0);
            let sum = a.add(&b).unwrap();
            let carries = sum.carries().unwrap();
            prop_assert_eq!(carries.len(), n + 1);
            prop_assert_eq!(carries[0], 0);
        }

        #[test]
        fn result_digits_are_reduced((a, b) in poly_pair()) {
            #[allow(clippy::cast_possible_wrap)]
            let base = a.base() as i64;
            let product = a.mul(&b).unwrap();
            for &c in product.coefficients() {
                prop_assert!((0..base).contains(&c));
            }
        }

        #[test]
        fn division_identity((a, d) in division_pair()) {
            let (q, r) = a.div_rem(&d).unwrap();
            prop_assert!(r.degree() < d.degree());
            let reconstructed = q.mul(&d).unwrap().add(&r).unwrap();
            prop_assert_eq!(reconstructed, a);
        }
    }
}
