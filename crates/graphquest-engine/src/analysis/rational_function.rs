use graphquest_math::{Polynomial, div_rem, gcd};
use num_rational::BigRational;
use num_traits::Zero;

use crate::ZeroDenominatorError;

/// A rational function f(x) = numerator / denominator.
///
/// The unreduced pair is kept as constructed so that a learner sees the
/// original form; the reduced pair (all common polynomial factors
/// cancelled) is computed once at construction and defines the function's
/// true graph.
///
/// # Example
///
/// ```
/// use graphquest_engine::RationalFunction;
/// use graphquest_math::Polynomial;
///
/// // (x - 1)/((x - 1)(x - 2)) reduces to 1/(x - 2)
/// let f = RationalFunction::new(
///     Polynomial::from_roots(&[1]),
///     Polynomial::from_roots(&[1, 2]),
/// )
/// .unwrap();
/// assert_eq!(f.reduced_numerator(), &Polynomial::one());
/// assert_eq!(f.display_form(), "f(x) = (x - 1)/(x^2 - 3x + 2)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RationalFunction {
    numerator: Polynomial,
    denominator: Polynomial,
    common_factor: Polynomial,
    reduced_numerator: Polynomial,
    reduced_denominator: Polynomial,
}

impl RationalFunction {
    /// Creates a rational function and computes its reduced form.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominatorError`] if the denominator is identically
    /// zero.
    pub fn new(
        numerator: Polynomial,
        denominator: Polynomial,
    ) -> Result<Self, ZeroDenominatorError> {
        if denominator.is_zero() {
            return Err(ZeroDenominatorError);
        }

        let common_factor = gcd(&numerator, &denominator);
        let (reduced_numerator, _) = div_rem(&numerator, &common_factor);
        let (reduced_denominator, _) = div_rem(&denominator, &common_factor);

        Ok(Self {
            numerator,
            denominator,
            common_factor,
            reduced_numerator,
            reduced_denominator,
        })
    }

    /// Returns the numerator as constructed.
    #[must_use]
    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    /// Returns the denominator as constructed.
    #[must_use]
    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// Returns the monic GCD of numerator and denominator.
    ///
    /// Its roots are the x-coordinates where the graph may have a hole.
    #[must_use]
    pub fn common_factor(&self) -> &Polynomial {
        &self.common_factor
    }

    /// Returns the numerator of the reduced form.
    #[must_use]
    pub fn reduced_numerator(&self) -> &Polynomial {
        &self.reduced_numerator
    }

    /// Returns the denominator of the reduced form.
    #[must_use]
    pub fn reduced_denominator(&self) -> &Polynomial {
        &self.reduced_denominator
    }

    /// Evaluates the unreduced form at `x`.
    ///
    /// Returns `None` where the original denominator vanishes, which
    /// includes holes. Intended for plotting the function as presented.
    #[must_use]
    pub fn eval_f64(&self, x: f64) -> Option<f64> {
        let den = self.denominator.eval_f64(x);
        (den != 0.0).then(|| self.numerator.eval_f64(x) / den)
    }

    /// Evaluates the reduced form at `x`, `None` only at true poles.
    #[must_use]
    pub fn reduced_eval_f64(&self, x: f64) -> Option<f64> {
        let den = self.reduced_denominator.eval_f64(x);
        (den != 0.0).then(|| self.reduced_numerator.eval_f64(x) / den)
    }

    /// Evaluates the reduced form exactly at a rational point.
    ///
    /// Returns `None` when the point is a pole of the reduced form.
    #[must_use]
    pub fn reduced_eval(&self, x: &BigRational) -> Option<BigRational> {
        let den = self.reduced_denominator.eval(x);
        (!den.is_zero()).then(|| self.reduced_numerator.eval(x) / den)
    }

    /// Renders the unreduced function for presentation, e.g.
    /// `f(x) = (x - 1)/(x^2 - 3x + 2)`.
    ///
    /// The unreduced form is deliberate: cancelling first would erase the
    /// holes a learner is asked to find.
    #[must_use]
    pub fn display_form(&self) -> String {
        format!("f(x) = ({})/({})", self.numerator, self.denominator)
    }
}
