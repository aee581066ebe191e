use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// A dense univariate polynomial with rational coefficients.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// stripped, so the representation of a given polynomial is unique. The
/// zero polynomial is stored as a single zero coefficient.
///
/// All arithmetic is exact; `f64` only enters through [`Self::eval_f64`].
///
/// # Example
///
/// ```
/// use graphquest_math::Polynomial;
///
/// // x^2 - 3x + 2 = (x - 1)(x - 2)
/// let p = Polynomial::from_int_coeffs(&[2, -3, 1]);
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p, Polynomial::from_roots(&[1, 2]));
/// assert_eq!(p.to_string(), "x^2 - 3x + 2");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients in ascending degree order.
    coeffs: Vec<BigRational>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Trailing zero coefficients are stripped.
    #[must_use]
    pub fn new(mut coeffs: Vec<BigRational>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(BigRational::zero());
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![BigRational::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![BigRational::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: BigRational) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![BigRational::zero(), BigRational::one()])
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: BigRational, n: usize) -> Self {
        let mut coeffs = vec![BigRational::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Creates a polynomial from integer coefficients in ascending degree order.
    ///
    /// `from_int_coeffs(&[2, -3, 1])` is `x^2 - 3x + 2`.
    #[must_use]
    pub fn from_int_coeffs(coeffs: &[i64]) -> Self {
        Self::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// Creates the monic polynomial with the given integer roots.
    ///
    /// `from_roots(&[1, 2])` is `(x - 1)(x - 2)`.
    #[must_use]
    pub fn from_roots(roots: &[i64]) -> Self {
        roots.iter().fold(Self::one(), |acc, &r| {
            &acc * &Self::from_int_coeffs(&[-r, 1])
        })
    }

    /// Returns the degree of the polynomial.
    ///
    /// Constants (including the zero polynomial) have degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if this polynomial is a constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() == 1
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &BigRational {
        self.coeffs.last().expect("coefficient vector is never empty")
    }

    /// Returns the coefficient of `x^i` (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> BigRational {
        self.coeffs.get(i).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Returns the coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a rational point using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: &BigRational) -> BigRational {
        self.coeffs
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// Evaluates the polynomial at an `f64` point.
    ///
    /// Coefficients are converted to `f64` before the Horner pass, so the
    /// result carries ordinary floating-point error.
    #[must_use]
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc.mul_add(x, c.to_f64().unwrap_or(f64::NAN)))
    }

    /// Returns the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * BigRational::from_integer(BigInt::from(i)))
            .collect();
        Self::new(coeffs)
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, k: &BigRational) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * k).collect())
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        Polynomial::new(coeffs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - rhs.coeff(i)).collect();
        Polynomial::new(coeffs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs =
            vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(Neg::neg).collect())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({self})")
    }
}

/// Renders the polynomial in conventional descending order, e.g.
/// `2x^2 - 3x + 1` or `x^2 - 1/2`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let abs = c.abs();
            if !abs.is_one() || power == 0 {
                if abs.is_integer() {
                    write!(f, "{}", abs.numer())?;
                } else {
                    write!(f, "{}/{}", abs.numer(), abs.denom())?;
                }
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}
