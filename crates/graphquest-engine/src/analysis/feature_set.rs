use serde::{Deserialize, Serialize};

/// A removable discontinuity: the reduced function has the finite value
/// `y` at `x`, but the original function is undefined there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// The x-coordinate removed from the domain.
    pub x: f64,
    /// The value of the reduced function at `x`.
    pub y: f64,
}

/// The analytic features of a rational function's graph.
///
/// All values are `f64` approximations of exactly computed roots and
/// evaluations. Collections are sorted ascending (holes by `x`) and hold
/// distinct values; a double root appears once.
///
/// Invariants maintained by the analyzer:
///
/// - `vertical_asymptotes` and the hole x-coordinates are disjoint
/// - `horizontal_asymptote` is `None` exactly when the numerator degree
///   exceeds the denominator degree (the oblique case, not computed here)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// x-values where the reduced denominator vanishes and the curve
    /// diverges.
    pub vertical_asymptotes: Vec<f64>,
    /// Removable discontinuities, sorted by x.
    pub holes: Vec<Hole>,
    /// The constant the function approaches as x tends to ±∞, when the
    /// degree comparison yields one.
    pub horizontal_asymptote: Option<f64>,
    /// Real roots of the reduced numerator.
    pub x_intercepts: Vec<f64>,
    /// Value of the reduced function at x = 0, unless 0 is a pole.
    pub y_intercept: Option<f64>,
}

impl FeatureSet {
    /// Returns the hole x-coordinates, in ascending order.
    #[must_use]
    pub fn hole_xs(&self) -> Vec<f64> {
        self.holes.iter().map(|h| h.x).collect()
    }
}
