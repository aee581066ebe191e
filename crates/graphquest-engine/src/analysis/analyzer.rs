use std::cmp::Ordering;

use graphquest_math::{Polynomial, RealRoot, real_roots};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::{FeatureSet, Hole, RationalFunction};

/// Two roots closer than this are treated as the same point when checking
/// hole candidates against vertical asymptotes.
const ROOT_MATCH_TOLERANCE: f64 = 1e-9;

/// Derives the analytic features of a rational function.
///
/// Deterministic and infallible from the caller's perspective: if root
/// extraction fails for a category, that category degrades to its
/// empty/`None` default (with a warning) while the others are still
/// computed.
///
/// # Example
///
/// ```
/// use graphquest_engine::{RationalFunction, analyze};
/// use graphquest_math::Polynomial;
///
/// let f = RationalFunction::new(
///     Polynomial::from_roots(&[0]),
///     Polynomial::from_roots(&[-1]),
/// )
/// .unwrap();
/// let features = analyze(&f);
/// assert_eq!(features.vertical_asymptotes, vec![-1.0]);
/// assert_eq!(features.horizontal_asymptote, Some(1.0));
/// ```
#[must_use]
pub fn analyze(function: &RationalFunction) -> FeatureSet {
    let pole_roots = roots_or_degraded(function.reduced_denominator(), "vertical_asymptotes");
    let holes = hole_features(function, &pole_roots);
    let x_intercepts = roots_or_degraded(function.reduced_numerator(), "x_intercepts")
        .iter()
        .map(RealRoot::to_f64)
        .collect();

    FeatureSet {
        vertical_asymptotes: pole_roots.iter().map(RealRoot::to_f64).collect(),
        holes,
        horizontal_asymptote: horizontal_asymptote(function),
        x_intercepts,
        y_intercept: function
            .reduced_eval(&BigRational::zero())
            .and_then(|v| v.to_f64()),
    }
}

/// Real roots of `p`, or the empty degraded default when extraction fails.
fn roots_or_degraded(p: &Polynomial, category: &str) -> Vec<RealRoot> {
    match real_roots(p) {
        Ok(roots) => roots,
        Err(err) => {
            tracing::warn!(category, error = %err, "root extraction failed; degrading to empty");
            Vec::new()
        }
    }
}

/// Classifies the shared roots of numerator and denominator.
///
/// A shared root whose multiplicity in the denominator exceeds its
/// multiplicity in the numerator still divides the reduced denominator, so
/// it shows up in `pole_roots` and stays a vertical asymptote. Everything
/// else is a hole, with the y-coordinate taken from the reduced form.
fn hole_features(function: &RationalFunction, pole_roots: &[RealRoot]) -> Vec<Hole> {
    let shared_roots = roots_or_degraded(function.common_factor(), "holes");
    let poles: Vec<f64> = pole_roots.iter().map(RealRoot::to_f64).collect();

    let mut holes = Vec::new();
    for root in shared_roots {
        let x = root.to_f64();
        if poles.iter().any(|p| (p - x).abs() < ROOT_MATCH_TOLERANCE) {
            continue;
        }
        let y = match root.as_rational() {
            Some(r) => function.reduced_eval(r).and_then(|v| v.to_f64()),
            None => function.reduced_eval_f64(x),
        };
        match y {
            Some(y) => holes.push(Hole { x, y }),
            None => {
                tracing::warn!(x, "reduced form undefined at shared root; skipping hole");
            }
        }
    }
    holes
}

/// Compares degrees of the unreduced pair.
///
/// Equal degrees give the ratio of leading coefficients; a larger
/// numerator degree means no horizontal asymptote (the oblique case is not
/// computed).
fn horizontal_asymptote(function: &RationalFunction) -> Option<f64> {
    match function
        .numerator()
        .degree()
        .cmp(&function.denominator().degree())
    {
        Ordering::Less => Some(0.0),
        Ordering::Equal => {
            (function.numerator().leading_coeff() / function.denominator().leading_coeff())
                .to_f64()
        }
        Ordering::Greater => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational(num: Polynomial, den: Polynomial) -> RationalFunction {
        RationalFunction::new(num, den).unwrap()
    }

    #[test]
    fn test_hole_and_asymptote_split() {
        // (x - 1)/((x - 1)(x - 2)) reduces to 1/(x - 2)
        let f = rational(
            Polynomial::from_roots(&[1]),
            Polynomial::from_roots(&[1, 2]),
        );
        let features = analyze(&f);

        assert_eq!(features.vertical_asymptotes, vec![2.0]);
        assert_eq!(features.holes, vec![Hole { x: 1.0, y: -1.0 }]);
        assert_eq!(features.horizontal_asymptote, Some(0.0));
        assert!(features.x_intercepts.is_empty());
        assert_eq!(features.y_intercept, Some(-0.5));
    }

    #[test]
    fn test_equal_degree_scenario() {
        // x/(x + 1)
        let f = rational(
            Polynomial::from_roots(&[0]),
            Polynomial::from_roots(&[-1]),
        );
        let features = analyze(&f);

        assert_eq!(features.vertical_asymptotes, vec![-1.0]);
        assert_eq!(features.horizontal_asymptote, Some(1.0));
        assert_eq!(features.x_intercepts, vec![0.0]);
        assert_eq!(features.y_intercept, Some(0.0));
        assert!(features.holes.is_empty());
    }

    #[test]
    fn test_numerator_degree_excess_has_no_horizontal_asymptote() {
        // x^3/(x - 1)
        let f = rational(
            Polynomial::from_int_coeffs(&[0, 0, 0, 1]),
            Polynomial::from_roots(&[1]),
        );
        assert_eq!(analyze(&f).horizontal_asymptote, None);
    }

    #[test]
    fn test_leading_coefficient_ratio() {
        // (2x + 1)/(4x - 3) has horizontal asymptote 1/2
        let f = rational(
            Polynomial::from_int_coeffs(&[1, 2]),
            Polynomial::from_int_coeffs(&[-3, 4]),
        );
        assert_eq!(analyze(&f).horizontal_asymptote, Some(0.5));
    }

    #[test]
    fn test_higher_denominator_multiplicity_stays_asymptote() {
        // (x - 1)/(x - 1)^2 reduces to 1/(x - 1): still a pole, never a hole
        let f = rational(
            Polynomial::from_roots(&[1]),
            Polynomial::from_roots(&[1, 1]),
        );
        let features = analyze(&f);

        assert_eq!(features.vertical_asymptotes, vec![1.0]);
        assert!(features.holes.is_empty());
    }

    #[test]
    fn test_asymptotes_and_hole_xs_are_disjoint() {
        // (x - 1)^2 (x + 3)/((x - 1)(x + 3)^2 (x - 4))
        let f = rational(
            Polynomial::from_roots(&[1, 1, -3]),
            Polynomial::from_roots(&[1, -3, -3, 4]),
        );
        let features = analyze(&f);

        for hole in &features.holes {
            for va in &features.vertical_asymptotes {
                assert!((hole.x - va).abs() > 1e-6);
            }
        }
        // x = 1 cancels completely (hole); x = -3 and x = 4 remain poles.
        assert_eq!(features.vertical_asymptotes, vec![-3.0, 4.0]);
        assert_eq!(features.hole_xs(), vec![1.0]);
    }

    #[test]
    fn test_irrational_x_intercepts() {
        // (x^2 - 2)/(x - 5)
        let f = rational(
            Polynomial::from_int_coeffs(&[-2, 0, 1]),
            Polynomial::from_roots(&[5]),
        );
        let features = analyze(&f);
        assert_eq!(features.x_intercepts.len(), 2);
        assert!((features.x_intercepts[0] + std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((features.x_intercepts[1] - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_y_intercept() {
        // (x + 1)/x has a pole at 0
        let f = rational(
            Polynomial::from_roots(&[-1]),
            Polynomial::from_roots(&[0]),
        );
        assert_eq!(analyze(&f).y_intercept, None);
    }

    #[test]
    fn test_zero_numerator_degrades_x_intercepts() {
        // 0/(x - 2): the reduced numerator is the zero polynomial, so the
        // x-intercept category degrades to empty instead of erroring.
        let f = rational(Polynomial::zero(), Polynomial::from_roots(&[2]));
        let features = analyze(&f);
        assert!(features.x_intercepts.is_empty());
        assert_eq!(features.horizontal_asymptote, Some(0.0));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let f = rational(
            Polynomial::from_roots(&[1, -2]),
            Polynomial::from_roots(&[1, 3]),
        );
        assert_eq!(analyze(&f), analyze(&f));
    }

    #[test]
    fn test_hole_y_is_reduced_value() {
        // (x - 2)(x + 1)/((x - 2)(x - 3)): hole at x = 2, y = 3/-1 = -3
        let f = rational(
            Polynomial::from_roots(&[2, -1]),
            Polynomial::from_roots(&[2, 3]),
        );
        let features = analyze(&f);
        assert_eq!(features.holes, vec![Hole { x: 2.0, y: -3.0 }]);
    }
}
