//! Polynomial division and greatest common divisor.

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::Polynomial;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
#[must_use]
pub fn div_rem(a: &Polynomial, b: &Polynomial) -> (Polynomial, Polynomial) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.degree() < b.degree() || a.is_zero() {
        return (Polynomial::zero(), a.clone());
    }

    let b_lead_inv = BigRational::one() / b.leading_coeff();
    let mut quotient = vec![BigRational::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() >= b.coeffs().len() {
        let deg_diff = remainder.len() - b.coeffs().len();
        let coeff = remainder.last().expect("remainder is non-empty") * &b_lead_inv;
        quotient[deg_diff] = coeff.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[deg_diff + i] -= &coeff * bc;
        }

        while remainder.len() > 1 && remainder.last().is_some_and(Zero::is_zero) {
            remainder.pop();
        }
        if remainder.len() == 1 && remainder[0].is_zero() {
            break;
        }
    }

    (Polynomial::new(quotient), Polynomial::new(remainder))
}

/// Computes the monic GCD of two polynomials by the Euclidean algorithm.
///
/// The GCD of the zero polynomial and `p` is `p` made monic; the GCD of two
/// zero polynomials is zero.
#[must_use]
pub fn gcd(a: &Polynomial, b: &Polynomial) -> Polynomial {
    if a.is_zero() {
        return make_monic(b);
    }
    if b.is_zero() {
        return make_monic(a);
    }

    let mut p = a.clone();
    let mut q = b.clone();
    while !q.is_zero() {
        let (_, r) = div_rem(&p, &q);
        p = q;
        q = r;
    }
    make_monic(&p)
}

/// Scales a polynomial so its leading coefficient is 1.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic(p: &Polynomial) -> Polynomial {
    if p.is_zero() {
        return p.clone();
    }
    p.scale(&(BigRational::one() / p.leading_coeff()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_rem_exact_division() {
        // (x^2 - 1) / (x - 1) = x + 1, remainder 0
        let a = Polynomial::from_int_coeffs(&[-1, 0, 1]);
        let b = Polynomial::from_int_coeffs(&[-1, 1]);
        let (q, r) = div_rem(&a, &b);
        assert_eq!(q, Polynomial::from_int_coeffs(&[1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_with_remainder() {
        // x^3 + 2 = (x)(x^2) + 2
        let a = Polynomial::from_int_coeffs(&[2, 0, 0, 1]);
        let b = Polynomial::from_int_coeffs(&[0, 0, 1]);
        let (q, r) = div_rem(&a, &b);
        assert_eq!(q, Polynomial::from_int_coeffs(&[0, 1]));
        assert_eq!(r, Polynomial::from_int_coeffs(&[2]));
    }

    #[test]
    fn test_div_rem_low_degree_dividend() {
        let a = Polynomial::from_int_coeffs(&[1, 1]);
        let b = Polynomial::from_int_coeffs(&[0, 0, 1]);
        let (q, r) = div_rem(&a, &b);
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn test_gcd_shared_factor() {
        // gcd((x-1)(x-2), (x-1)(x-3)) = x - 1
        let a = Polynomial::from_roots(&[1, 2]);
        let b = Polynomial::from_roots(&[1, 3]);
        assert_eq!(gcd(&a, &b), Polynomial::from_roots(&[1]));
    }

    #[test]
    fn test_gcd_coprime_is_one() {
        let a = Polynomial::from_roots(&[1]);
        let b = Polynomial::from_roots(&[2]);
        assert_eq!(gcd(&a, &b), Polynomial::one());
    }

    #[test]
    fn test_gcd_is_monic() {
        // gcd(2(x-1), 4(x-1)) should be monic x - 1
        let two = Polynomial::from_int_coeffs(&[-2, 2]);
        let four = Polynomial::from_int_coeffs(&[-4, 4]);
        assert_eq!(gcd(&two, &four), Polynomial::from_roots(&[1]));
    }

    #[test]
    fn test_gcd_with_zero() {
        let a = Polynomial::from_int_coeffs(&[-2, 2]);
        assert_eq!(gcd(&a, &Polynomial::zero()), Polynomial::from_roots(&[1]));
        assert!(gcd(&Polynomial::zero(), &Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_gcd_repeated_factor() {
        // gcd((x-1)^2 (x+3), (x-1)^2) = (x-1)^2
        let a = Polynomial::from_roots(&[1, 1, -3]);
        let b = Polynomial::from_roots(&[1, 1]);
        assert_eq!(gcd(&a, &b), Polynomial::from_roots(&[1, 1]));
    }
}
