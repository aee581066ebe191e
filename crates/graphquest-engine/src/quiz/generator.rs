use std::{fmt::Write as _, ops::RangeInclusive};

use graphquest_math::Polynomial;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IndexedRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::analysis::{RationalFunction, analyze};

use super::Round;

/// Rejection sampling tries before a pattern is declared buggy.
///
/// The coefficient ranges always leave several admissible values, so
/// hitting this limit means a pattern's constraints are unsatisfiable.
const RESAMPLE_LIMIT: usize = 64;

/// Difficulty tier of a quiz round.
///
/// Tiers map from the round number (rounds three and up stay at
/// [`Advanced`](Self::Advanced)) and select which structural patterns the
/// generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Single poles, matched degrees, one cancelled factor.
    Beginner,
    /// Two poles, clean intercepts, an oblique case.
    Intermediate,
    /// Three-factor combinations and free-form small-degree pairs.
    Advanced,
}

impl Difficulty {
    /// Returns the tier for a 1-based round number, clamped at
    /// [`Advanced`](Self::Advanced).
    #[must_use]
    pub fn for_round(round: usize) -> Self {
        match round {
            0 | 1 => Self::Beginner,
            2 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }
}

/// Seed for deterministic round generation.
///
/// A 128-bit seed initializing the generator's random source. The same
/// seed replays the same sequence of functions, enabling reproducible
/// sessions and deterministic tests. Serializes as a 32-character hex
/// string.
#[derive(Debug, Clone, Copy)]
pub struct RoundSeed([u8; 16]);

impl Serialize for RoundSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for RoundSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        let num = u128::from_str_radix(&hex_str, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex: {hex_str} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `RoundSeed` values with `rng.random()`.
impl Distribution<RoundSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RoundSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RoundSeed(seed)
    }
}

/// Generates quiz rounds from a difficulty-tiered catalog of structural
/// patterns.
///
/// The random source is explicit and seedable; there is no hidden global
/// state. Each tier holds three patterns chosen uniformly; patterns
/// enforce their distinctness constraints (distinct poles, uncancelled
/// intercepts) by rejection resampling.
#[derive(Debug, Clone)]
pub struct RoundGenerator {
    rng: Pcg32,
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundGenerator {
    /// Creates a generator with a random seed.
    ///
    /// For deterministic generation, use [`Self::with_seed`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: RoundSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Generates the next round for a difficulty tier.
    ///
    /// The returned round's feature set is internally consistent: the
    /// denominator is never the zero polynomial, and vertical asymptotes
    /// and hole x-coordinates are disjoint.
    pub fn next_round(&mut self, difficulty: Difficulty) -> Round {
        let (numerator, denominator) = match difficulty {
            Difficulty::Beginner => match self.rng.random_range(0..3) {
                0 => self.single_pole(),
                1 => self.matched_degree(),
                _ => self.shared_factor_hole(),
            },
            Difficulty::Intermediate => match self.rng.random_range(0..3) {
                0 => self.two_poles(),
                1 => self.clean_intercepts(),
                _ => self.oblique(),
            },
            Difficulty::Advanced => match self.rng.random_range(0..3) {
                0 => self.repeated_shared_root(),
                1 => self.random_small_degree(),
                _ => self.curated_pair(),
            },
        };

        let function = RationalFunction::new(numerator, denominator)
            .expect("generator patterns never produce a zero denominator");
        let features = analyze(&function);
        Round::new(function, features, difficulty)
    }

    /// k/(x - a): one pole, horizontal asymptote at zero.
    fn single_pole(&mut self) -> (Polynomial, Polynomial) {
        let pole = self.sample_distinct(-5..=5, &[0]);
        let scale = *[1, 2, 3, -1, -2]
            .choose(&mut self.rng)
            .expect("choices are non-empty");
        (
            Polynomial::from_int_coeffs(&[scale]),
            Polynomial::from_roots(&[pole]),
        )
    }

    /// (ax + b)/(cx + d): equal degrees, asymptote at a/c.
    fn matched_degree(&mut self) -> (Polynomial, Polynomial) {
        let a = self.rng.random_range(1..=3);
        let b = self.rng.random_range(-5..=5);
        let c = self.rng.random_range(1..=3);
        let mut d = self.rng.random_range(-5..=5);
        // bc == ad would make the fraction collapse to a constant
        if b * c == a * d {
            d += 1;
        }
        (
            Polynomial::from_int_coeffs(&[b, a]),
            Polynomial::from_int_coeffs(&[d, c]),
        )
    }

    /// (x - s)(x - z)/((x - s)(x - p)): hole at s, pole at p.
    fn shared_factor_hole(&mut self) -> (Polynomial, Polynomial) {
        let shared = self.rng.random_range(-3..=3);
        let zero = self.sample_distinct(-4..=4, &[shared]);
        let pole = self.sample_distinct(-4..=4, &[shared, zero]);
        (
            Polynomial::from_roots(&[shared, zero]),
            Polynomial::from_roots(&[shared, pole]),
        )
    }

    /// (ax + b)/((x - p)(x - q)): two distinct poles.
    fn two_poles(&mut self) -> (Polynomial, Polynomial) {
        let a = self.rng.random_range(1..=3);
        let b = self.rng.random_range(-3..=3);
        let first = self.rng.random_range(-3..=3);
        let second = self.sample_distinct(-3..=3, &[first]);
        (
            Polynomial::from_int_coeffs(&[b, a]),
            Polynomial::from_roots(&[first, second]),
        )
    }

    /// (x - a)(x - b)/((x - c)(x - d)): intercepts that don't cancel.
    fn clean_intercepts(&mut self) -> (Polynomial, Polynomial) {
        let zero_a = self.rng.random_range(-2..=2);
        let zero_b = self.rng.random_range(-2..=2);
        let pole_a = self.sample_distinct(-3..=3, &[zero_a, zero_b]);
        let pole_b = self.sample_distinct(-3..=3, &[zero_a, zero_b, pole_a]);
        (
            Polynomial::from_roots(&[zero_a, zero_b]),
            Polynomial::from_roots(&[pole_a, pole_b]),
        )
    }

    /// (ax^2 + bx + c)/(dx + e): numerator degree one above, no horizontal
    /// asymptote.
    fn oblique(&mut self) -> (Polynomial, Polynomial) {
        let a = self.rng.random_range(1..=2);
        let b = self.rng.random_range(-3..=3);
        let c = self.rng.random_range(-3..=3);
        let d = self.rng.random_range(1..=2);
        let e = self.rng.random_range(-3..=3);
        (
            Polynomial::from_int_coeffs(&[c, b, a]),
            Polynomial::from_int_coeffs(&[e, d]),
        )
    }

    /// Three factors on each side sharing one root.
    fn repeated_shared_root(&mut self) -> (Polynomial, Polynomial) {
        let shared = self.rng.random_range(-2..=2);
        let zero_a = self.rng.random_range(-3..=3);
        let zero_b = self.rng.random_range(-3..=3);
        let pole_a = self.sample_distinct(-3..=3, &[zero_a, zero_b]);
        let pole_b = self.sample_distinct(-3..=3, &[zero_a, zero_b, pole_a]);
        (
            Polynomial::from_roots(&[shared, zero_a, zero_b]),
            Polynomial::from_roots(&[pole_a, pole_b, shared]),
        )
    }

    /// Free-form small-degree polynomials with positive leading
    /// coefficients.
    fn random_small_degree(&mut self) -> (Polynomial, Polynomial) {
        let numerator = {
            let c0 = self.rng.random_range(-2..=2);
            let c1 = self.rng.random_range(-2..=2);
            let lead = self.rng.random_range(1..=2);
            Polynomial::from_int_coeffs(&[c0, c1, lead])
        };
        let denominator = {
            let degree = self.rng.random_range(1..=2);
            let mut coeffs: Vec<i64> =
                (0..degree).map(|_| self.rng.random_range(-2..=2)).collect();
            coeffs.push(self.rng.random_range(1..=2));
            Polynomial::from_int_coeffs(&coeffs)
        };
        (numerator, denominator)
    }

    /// Hand-picked pairs with a spread of interesting features.
    fn curated_pair(&mut self) -> (Polynomial, Polynomial) {
        const CURATED: [(&[i64], &[i64]); 3] = [
            // (x^2 - 1)/(x^2 - 4)
            (&[-1, 0, 1], &[-4, 0, 1]),
            // (x^2 + x - 2)/(x^3 - x)
            (&[-2, 1, 1], &[0, -1, 0, 1]),
            // (2x^2 - 3x + 1)/(x^2 - 5x + 6)
            (&[1, -3, 2], &[6, -5, 1]),
        ];
        let (numerator, denominator) = CURATED[self.rng.random_range(0..CURATED.len())];
        (
            Polynomial::from_int_coeffs(numerator),
            Polynomial::from_int_coeffs(denominator),
        )
    }

    /// Samples from `range` until the value avoids everything in
    /// `exclude`.
    ///
    /// # Panics
    ///
    /// Panics after [`RESAMPLE_LIMIT`] rejected draws; with the ranges the
    /// patterns use this indicates a pattern bug, not bad luck.
    fn sample_distinct(&mut self, range: RangeInclusive<i64>, exclude: &[i64]) -> i64 {
        for _ in 0..RESAMPLE_LIMIT {
            let value = self.rng.random_range(range.clone());
            if !exclude.contains(&value) {
                return value;
            }
        }
        panic!("rejection sampling exhausted: {range:?} cannot avoid {exclude:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_from_bytes(bytes: [u8; 16]) -> RoundSeed {
        RoundSeed(bytes)
    }

    fn test_seed() -> RoundSeed {
        seed_from_bytes([
            0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
            0x77, 0x88,
        ])
    }

    mod round_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: RoundSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: RoundSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed.0, deserialized.0);
        }

        #[test]
        fn test_known_value_all_zeros() {
            let seed = seed_from_bytes([0u8; 16]);
            let serialized = serde_json::to_string(&seed).unwrap();
            assert_eq!(serialized, "\"00000000000000000000000000000000\"");

            let deserialized: RoundSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized.0, [0u8; 16]);
        }

        #[test]
        fn test_error_wrong_length() {
            let json = "\"0123456789abcdef\"";
            let result: Result<RoundSeed, _> = serde_json::from_str(json);
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("invalid hex"));
        }

        #[test]
        fn test_error_invalid_hex_characters() {
            let json = "\"ghijklmnopqrstuvwxyzghijklmnopqr\"";
            let result: Result<RoundSeed, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_difficulty_for_round_clamps() {
        assert_eq!(Difficulty::for_round(1), Difficulty::Beginner);
        assert_eq!(Difficulty::for_round(2), Difficulty::Intermediate);
        assert_eq!(Difficulty::for_round(3), Difficulty::Advanced);
        assert_eq!(Difficulty::for_round(5), Difficulty::Advanced);
    }

    #[test]
    fn test_deterministic_round_generation() {
        let mut first = RoundGenerator::with_seed(test_seed());
        let mut second = RoundGenerator::with_seed(test_seed());

        for round in 1..=10 {
            let difficulty = Difficulty::for_round(round);
            let a = first.next_round(difficulty);
            let b = second.next_round(difficulty);
            assert_eq!(a.display_form(), b.display_form());
            assert_eq!(a.features(), b.features());
        }
    }

    #[test]
    fn test_generated_rounds_satisfy_invariants() {
        let mut generator = RoundGenerator::with_seed(test_seed());
        let tiers = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];

        for i in 0..120 {
            let round = generator.next_round(tiers[i % tiers.len()]);
            let function = round.function();
            let features = round.features();

            assert!(!function.denominator().is_zero());

            // Vertical asymptotes and hole xs are disjoint.
            for hole in &features.holes {
                for va in &features.vertical_asymptotes {
                    assert!(
                        (hole.x - va).abs() > 1e-9,
                        "hole and asymptote collide in {}",
                        round.display_form()
                    );
                }
            }

            // Horizontal asymptote is absent exactly in the oblique case.
            let p = function.numerator().degree();
            let q = function.denominator().degree();
            assert_eq!(
                features.horizontal_asymptote.is_none(),
                p > q,
                "asymptote rule violated in {}",
                round.display_form()
            );
        }
    }

    #[test]
    fn test_beginner_rounds_stay_low_degree() {
        let mut generator = RoundGenerator::with_seed(test_seed());
        for _ in 0..40 {
            let round = generator.next_round(Difficulty::Beginner);
            assert!(round.function().numerator().degree() <= 2);
            assert!(round.function().denominator().degree() <= 2);
        }
    }

    #[test]
    fn test_reduction_round_trip_on_generated_functions() {
        // Off the original denominator's zeros, reducing must not change
        // the value.
        let mut generator = RoundGenerator::with_seed(test_seed());
        for round in 1..=30 {
            let quiz_round = generator.next_round(Difficulty::for_round(round % 4));
            let function = quiz_round.function();
            for i in 0..20 {
                let x = -5.0 + 0.5 * f64::from(i);
                let Some(original) = function.eval_f64(x) else {
                    continue;
                };
                let reduced = function
                    .reduced_eval_f64(x)
                    .expect("reduced form defined wherever the original is");
                let scale = original.abs().max(1.0);
                assert!((original - reduced).abs() / scale < 1e-6);
            }
        }
    }
}
