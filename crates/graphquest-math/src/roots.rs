//! Exact real-root extraction.
//!
//! Roots are found in three stages on the square-free part of the input:
//!
//! 1. Rational roots by the rational-root theorem with synthetic deflation
//! 2. Closed-form roots for a remaining quadratic factor
//! 3. Sturm-sequence isolation plus bisection for anything left
//!
//! Stages 1 and 2 are exact; stage 3 refines an isolating interval with
//! rational endpoints until an `f64` midpoint is a faithful approximation.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{Polynomial, div_rem, gcd};

/// Bisection stops once the isolating interval is narrower than 10^-13.
const REFINE_DENOM_EXP: u32 = 13;

/// Rational-root candidate search is skipped when the integerized leading or
/// constant coefficient exceeds this, leaving those roots to the Sturm stage.
const MAX_FACTOR_BASE: u64 = 1 << 40;

/// A real root of a polynomial.
///
/// Rational roots are kept exact; irrational roots carry an `f64`
/// approximation refined from an isolating interval.
#[derive(Debug, Clone, PartialEq)]
pub enum RealRoot {
    /// An exact rational root.
    Rational(BigRational),
    /// An approximation of an irrational root.
    Irrational(f64),
}

impl RealRoot {
    /// Returns the root as an `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Rational(r) => r.to_f64().unwrap_or(f64::NAN),
            Self::Irrational(x) => *x,
        }
    }

    /// Returns the exact value if the root is rational.
    #[must_use]
    pub fn as_rational(&self) -> Option<&BigRational> {
        match self {
            Self::Rational(r) => Some(r),
            Self::Irrational(_) => None,
        }
    }
}

/// The zero polynomial vanishes everywhere, so asking for its roots is a
/// caller error rather than an empty result.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot extract roots of the zero polynomial")]
pub struct ZeroPolynomialError;

/// Finds all distinct real roots of a polynomial, sorted ascending.
///
/// Multiple roots are reported once; complex roots are ignored.
///
/// # Errors
///
/// Returns [`ZeroPolynomialError`] for the zero polynomial.
pub fn real_roots(p: &Polynomial) -> Result<Vec<RealRoot>, ZeroPolynomialError> {
    if p.is_zero() {
        return Err(ZeroPolynomialError);
    }
    if p.is_constant() {
        return Ok(Vec::new());
    }

    // Working on the square-free part makes every remaining root simple,
    // which both deduplicates the output and guarantees sign changes for
    // the bisection stage.
    let mut rest = square_free_part(p);
    let mut roots = Vec::new();

    rest = extract_rational_roots(&rest, &mut roots);

    match rest.degree() {
        0 => {}
        1 => {
            // Reachable only when the candidate search was skipped.
            roots.push(RealRoot::Rational(-rest.coeff(0) / rest.coeff(1)));
        }
        2 => quadratic_roots(&rest, &mut roots),
        _ => {
            for x in sturm_roots(&rest) {
                roots.push(RealRoot::Irrational(x));
            }
        }
    }

    roots.sort_by(|a, b| a.to_f64().total_cmp(&b.to_f64()));
    Ok(roots)
}

/// Divides out repeated factors, leaving each root with multiplicity 1.
fn square_free_part(p: &Polynomial) -> Polynomial {
    let g = gcd(p, &p.derivative());
    if g.is_constant() {
        return p.clone();
    }
    let (q, _) = div_rem(p, &g);
    q
}

/// Finds rational roots via the rational-root theorem and deflates them out,
/// returning the remaining factor.
fn extract_rational_roots(p: &Polynomial, roots: &mut Vec<RealRoot>) -> Polynomial {
    let mut rest = p.clone();

    // A root at zero shows up as a vanishing constant term.
    if rest.coeff(0).is_zero() && !rest.is_constant() {
        let (q, _) = div_rem(&rest, &Polynomial::x());
        rest = q;
        roots.push(RealRoot::Rational(BigRational::zero()));
    }
    if rest.is_constant() {
        return rest;
    }

    // Scale to integer coefficients: candidates are ±(divisor of constant
    // term) / (divisor of leading coefficient).
    let int_coeffs = integerize(&rest);
    let constant = int_coeffs.first().expect("non-empty").magnitude_u64();
    let leading = int_coeffs.last().expect("non-empty").magnitude_u64();
    let (Some(constant), Some(leading)) = (constant, leading) else {
        tracing::debug!("coefficients too large for rational-root search");
        return rest;
    };

    for num in divisors(constant) {
        for den in &divisors(leading) {
            for sign in [1i64, -1] {
                let candidate = BigRational::new(
                    BigInt::from(sign) * BigInt::from(num),
                    BigInt::from(*den),
                );
                if rest.is_constant() {
                    return rest;
                }
                if rest.eval(&candidate).is_zero() {
                    let factor =
                        Polynomial::new(vec![-candidate.clone(), BigRational::one()]);
                    let (q, _) = div_rem(&rest, &factor);
                    rest = q;
                    roots.push(RealRoot::Rational(candidate));
                }
            }
        }
    }
    rest
}

trait MagnitudeU64 {
    fn magnitude_u64(&self) -> Option<u64>;
}

impl MagnitudeU64 for BigInt {
    fn magnitude_u64(&self) -> Option<u64> {
        self.abs().to_u64().filter(|&n| n <= MAX_FACTOR_BASE)
    }
}

/// Clears denominators, returning integer coefficients in ascending order.
fn integerize(p: &Polynomial) -> Vec<BigInt> {
    let common = p
        .coeffs()
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    p.coeffs()
        .iter()
        .map(|c| c.numer() * (&common / c.denom()))
        .collect()
}

/// Positive divisors of `n` by trial division.
fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    large.reverse();
    small.extend(large);
    small
}

/// Solves a quadratic with no repeated roots.
///
/// A perfect-square discriminant yields exact rational roots; otherwise the
/// two conjugate irrational roots are approximated in `f64`.
fn quadratic_roots(p: &Polynomial, roots: &mut Vec<RealRoot>) {
    let c = p.coeff(0);
    let b = p.coeff(1);
    let a = p.coeff(2);
    let discriminant =
        &b * &b - BigRational::from_integer(BigInt::from(4)) * &a * &c;

    if discriminant.is_negative() {
        return;
    }
    if discriminant.is_zero() {
        let two = BigRational::from_integer(BigInt::from(2));
        roots.push(RealRoot::Rational(-b / (two * a)));
        return;
    }

    if let Some(sqrt) = rational_sqrt(&discriminant) {
        let two_a = BigRational::from_integer(BigInt::from(2)) * &a;
        roots.push(RealRoot::Rational((-&b - &sqrt) / &two_a));
        roots.push(RealRoot::Rational((-b + sqrt) / two_a));
    } else {
        let sqrt = discriminant.to_f64().unwrap_or(f64::NAN).sqrt();
        let b = b.to_f64().unwrap_or(f64::NAN);
        let two_a = 2.0 * a.to_f64().unwrap_or(f64::NAN);
        roots.push(RealRoot::Irrational((-b - sqrt) / two_a));
        roots.push(RealRoot::Irrational((-b + sqrt) / two_a));
    }
}

/// Returns the exact square root of a non-negative rational, if it has one.
fn rational_sqrt(r: &BigRational) -> Option<BigRational> {
    let num_sqrt = r.numer().sqrt();
    let den_sqrt = r.denom().sqrt();
    (&num_sqrt * &num_sqrt == *r.numer() && &den_sqrt * &den_sqrt == *r.denom())
        .then(|| BigRational::new(num_sqrt, den_sqrt))
}

/// Isolates and refines the real roots of a square-free polynomial with no
/// rational roots.
fn sturm_roots(p: &Polynomial) -> Vec<f64> {
    let chain = sturm_chain(p);
    let bound = cauchy_bound(p);
    let mut intervals = Vec::new();
    isolate(&chain, &-bound.clone(), &bound, &mut intervals);
    intervals
        .into_iter()
        .map(|(a, b)| refine(p, a, b))
        .collect()
}

/// Builds the Sturm chain: p, p', then successive negated remainders.
fn sturm_chain(p: &Polynomial) -> Vec<Polynomial> {
    let mut chain = vec![p.clone(), p.derivative()];
    loop {
        let n = chain.len();
        if chain[n - 1].is_zero() {
            chain.pop();
            return chain;
        }
        let (_, r) = div_rem(&chain[n - 2], &chain[n - 1]);
        if r.is_zero() {
            return chain;
        }
        chain.push(-&r);
    }
}

/// Counts sign changes of the chain evaluated at `x`.
fn sign_variations(chain: &[Polynomial], x: &BigRational) -> usize {
    let signs: Vec<i8> = chain
        .iter()
        .map(|p| p.eval(x))
        .filter(|v| !v.is_zero())
        .map(|v| if v.is_negative() { -1 } else { 1 })
        .collect();
    signs.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Number of distinct real roots in the half-open interval `(a, b]`.
fn count_roots(chain: &[Polynomial], a: &BigRational, b: &BigRational) -> usize {
    sign_variations(chain, a).saturating_sub(sign_variations(chain, b))
}

/// Every real root lies in `(-bound, bound)`.
fn cauchy_bound(p: &Polynomial) -> BigRational {
    let lead = p.leading_coeff();
    let max_ratio = p.coeffs()[..p.degree()]
        .iter()
        .map(|c| (c / lead).abs())
        .fold(BigRational::zero(), BigRational::max);
    max_ratio + BigRational::one()
}

/// Recursively bisects until each interval holds exactly one root.
fn isolate(
    chain: &[Polynomial],
    a: &BigRational,
    b: &BigRational,
    out: &mut Vec<(BigRational, BigRational)>,
) {
    match count_roots(chain, a, b) {
        0 => {}
        1 => out.push((a.clone(), b.clone())),
        _ => {
            let mid = (a + b) / BigRational::from_integer(BigInt::from(2));
            isolate(chain, a, &mid, out);
            isolate(chain, &mid, b, out);
        }
    }
}

/// Shrinks an isolating interval by bisection and returns the midpoint.
///
/// The interval brackets a simple root, so the endpoint signs differ and
/// each step keeps the sign change.
fn refine(p: &Polynomial, mut a: BigRational, mut b: BigRational) -> f64 {
    let eps = BigRational::new(BigInt::one(), BigInt::from(10u64.pow(REFINE_DENOM_EXP)));
    let two = BigRational::from_integer(BigInt::from(2));
    let sign_a = p.eval(&a).is_negative();

    while &b - &a > eps {
        let mid = (&a + &b) / &two;
        let v = p.eval(&mid);
        if v.is_zero() {
            return mid.to_f64().unwrap_or(f64::NAN);
        }
        if v.is_negative() == sign_a {
            a = mid;
        } else {
            b = mid;
        }
    }
    ((a + b) / two).to_f64().unwrap_or(f64::NAN)
}
