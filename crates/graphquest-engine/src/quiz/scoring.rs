use crate::analysis::FeatureSet;

use super::parse_answer;

/// Points awarded per correct category.
pub const POINTS_PER_CATEGORY: usize = 100;

/// Maximum raw score for one round (five categories).
pub const MAX_ROUND_SCORE: usize = 5 * POINTS_PER_CATEGORY;

/// Points deducted per hint used in a round.
pub const HINT_PENALTY: usize = 10;

/// Absolute tolerance for the scalar categories (horizontal asymptote and
/// y-intercept).
const SCALAR_TOLERANCE: f64 = 1e-3;

/// Hints offered during a round, in order.
pub const HINTS: [&str; 3] = [
    "To find vertical asymptotes, look for values of x that make the denominator zero (but not the numerator).",
    "For horizontal asymptotes, compare the degrees of the numerator and denominator polynomials.",
    "Holes occur when both numerator and denominator share a factor that cancels out.",
];

const FALLBACK_HINT: &str = "Remember to factor both numerator and denominator completely!";

/// Returns the hint for the nth request (0-based), falling back to a
/// generic reminder once the specific hints run out.
#[must_use]
pub fn hint(index: usize) -> &'static str {
    HINTS.get(index).copied().unwrap_or(FALLBACK_HINT)
}

/// The learner's raw answers, one free-text field per category.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    /// x-values of the vertical asymptotes.
    pub vertical_asymptotes: String,
    /// y-value of the horizontal asymptote, or "none".
    pub horizontal_asymptote: String,
    /// x-values of the holes.
    pub holes: String,
    /// x-values of the x-intercepts.
    pub x_intercepts: String,
    /// y-value of the y-intercept, or "none".
    pub y_intercept: String,
}

/// Verdict and explanation for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFeedback {
    /// Whether the answer matched the ground truth.
    pub is_correct: bool,
    /// Human-readable explanation naming the correct values.
    pub message: String,
}

/// Scoring result for one submitted round.
#[derive(Debug, Clone)]
pub struct RoundFeedback {
    /// Feedback for the vertical-asymptote category.
    pub vertical_asymptotes: CategoryFeedback,
    /// Feedback for the horizontal-asymptote category.
    pub horizontal_asymptote: CategoryFeedback,
    /// Feedback for the holes category.
    pub holes: CategoryFeedback,
    /// Feedback for the x-intercept category.
    pub x_intercepts: CategoryFeedback,
    /// Feedback for the y-intercept category.
    pub y_intercept: CategoryFeedback,
    /// Total before any hint penalty: 100 points per correct category.
    pub raw_score: usize,
}

impl RoundFeedback {
    /// Returns labelled feedback in presentation order.
    #[must_use]
    pub fn categories(&self) -> [(&'static str, &CategoryFeedback); 5] {
        [
            ("Vertical Asymptotes", &self.vertical_asymptotes),
            ("Horizontal Asymptote", &self.horizontal_asymptote),
            ("Holes", &self.holes),
            ("X-Intercepts", &self.x_intercepts),
            ("Y-Intercept", &self.y_intercept),
        ]
    }
}

/// Scores one round: each category is compared independently and
/// contributes 0 or [`POINTS_PER_CATEGORY`] to the raw score.
///
/// Hole answers are compared against the hole x-coordinates only; the
/// y-coordinates are shown to the learner but not quizzed.
#[must_use]
pub fn score_round(features: &FeatureSet, answers: &AnswerSheet) -> RoundFeedback {
    let vertical_asymptotes = check_value_set(
        &features.vertical_asymptotes,
        &answers.vertical_asymptotes,
        SetPhrasing {
            found: "Vertical asymptotes at x = ",
            expected: "The vertical asymptotes are at x = ",
            none_found: "No vertical asymptotes.",
            none_expected: "There are no vertical asymptotes.",
        },
    );
    let horizontal_asymptote = check_scalar(
        features.horizontal_asymptote,
        &answers.horizontal_asymptote,
        ScalarPhrasing {
            found: "Horizontal asymptote at y = ",
            expected: "The horizontal asymptote is y = ",
            none_found: "No horizontal asymptote exists.",
            none_expected: "There is no horizontal asymptote.",
        },
    );
    let holes = check_value_set(
        &features.hole_xs(),
        &answers.holes,
        SetPhrasing {
            found: "Holes at x = ",
            expected: "The holes are at x = ",
            none_found: "No holes in this function.",
            none_expected: "There are no holes in this function.",
        },
    );
    let x_intercepts = check_value_set(
        &features.x_intercepts,
        &answers.x_intercepts,
        SetPhrasing {
            found: "x-intercepts at x = ",
            expected: "The x-intercepts are at x = ",
            none_found: "No x-intercepts for this function.",
            none_expected: "There are no x-intercepts.",
        },
    );
    let y_intercept = check_scalar(
        features.y_intercept,
        &answers.y_intercept,
        ScalarPhrasing {
            found: "y-intercept at y = ",
            expected: "The y-intercept is y = ",
            none_found: "No y-intercept (undefined at x = 0).",
            none_expected: "The y-intercept is undefined.",
        },
    );

    let raw_score = [
        &vertical_asymptotes,
        &horizontal_asymptote,
        &holes,
        &x_intercepts,
        &y_intercept,
    ]
    .iter()
    .filter(|c| c.is_correct)
    .count()
        * POINTS_PER_CATEGORY;

    RoundFeedback {
        vertical_asymptotes,
        horizontal_asymptote,
        holes,
        x_intercepts,
        y_intercept,
        raw_score,
    }
}

struct SetPhrasing {
    found: &'static str,
    expected: &'static str,
    none_found: &'static str,
    none_expected: &'static str,
}

/// Compares a parsed answer list against a ground-truth value set.
fn check_value_set(correct: &[f64], input: &str, phrasing: SetPhrasing) -> CategoryFeedback {
    let user = parse_answer(input);
    let mut truth = correct.to_vec();
    truth.sort_by(f64::total_cmp);
    truth.dedup();

    let is_correct = user == truth;
    let message = match (is_correct, truth.is_empty()) {
        (true, true) => format!("Correct! {}", phrasing.none_found),
        (true, false) => format!("Correct! {}{}", phrasing.found, format_list(&truth)),
        (false, true) => format!("Incorrect. {}", phrasing.none_expected),
        (false, false) => {
            format!("Incorrect. {}{}", phrasing.expected, format_list(&truth))
        }
    };
    CategoryFeedback {
        is_correct,
        message,
    }
}

struct ScalarPhrasing {
    found: &'static str,
    expected: &'static str,
    none_found: &'static str,
    none_expected: &'static str,
}

/// Compares a single-value answer against an optional ground truth.
fn check_scalar(correct: Option<f64>, input: &str, phrasing: ScalarPhrasing) -> CategoryFeedback {
    match correct {
        None => {
            let trimmed = input.trim().to_lowercase();
            let is_correct = matches!(trimmed.as_str(), "" | "none" | "undefined");
            let message = if is_correct {
                format!("Correct! {}", phrasing.none_found)
            } else {
                format!("Incorrect. {}", phrasing.none_expected)
            };
            CategoryFeedback {
                is_correct,
                message,
            }
        }
        Some(value) => {
            let parsed = parse_answer(input);
            let is_correct =
                parsed.len() == 1 && (parsed[0] - value).abs() < SCALAR_TOLERANCE;
            let rendered = format_value(value);
            let message = if is_correct {
                format!("Correct! {}{rendered}", phrasing.found)
            } else {
                format!("Incorrect. {}{rendered}", phrasing.expected)
            };
            CategoryFeedback {
                is_correct,
                message,
            }
        }
    }
}

fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders a value for feedback text: integers without a decimal point,
/// everything else rounded to four places.
fn format_value(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value == value.trunc() {
        format!("{value:.0}")
    } else {
        format!("{}", (value * 10_000.0).round() / 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Hole;

    /// Features of (x - 1)/((x - 1)(x - 2)), reduced 1/(x - 2).
    fn worked_example() -> FeatureSet {
        FeatureSet {
            vertical_asymptotes: vec![2.0],
            holes: vec![Hole { x: 1.0, y: -1.0 }],
            horizontal_asymptote: Some(0.0),
            x_intercepts: Vec::new(),
            y_intercept: Some(-0.5),
        }
    }

    #[test]
    fn test_all_categories_correct_scores_five_hundred() {
        let answers = AnswerSheet {
            vertical_asymptotes: "2".into(),
            horizontal_asymptote: "0".into(),
            holes: "1".into(),
            x_intercepts: "none".into(),
            y_intercept: "-0.5".into(),
        };
        let feedback = score_round(&worked_example(), &answers);
        assert_eq!(feedback.raw_score, MAX_ROUND_SCORE);
        assert!(feedback.categories().iter().all(|(_, c)| c.is_correct));
    }

    #[test]
    fn test_all_categories_wrong_scores_zero() {
        let answers = AnswerSheet {
            vertical_asymptotes: "7".into(),
            horizontal_asymptote: "3".into(),
            holes: "none".into(),
            x_intercepts: "4".into(),
            y_intercept: "none".into(),
        };
        let feedback = score_round(&worked_example(), &answers);
        assert_eq!(feedback.raw_score, 0);
    }

    #[test]
    fn test_categories_score_independently() {
        let answers = AnswerSheet {
            vertical_asymptotes: "2".into(),
            horizontal_asymptote: "wrong".into(),
            holes: "1".into(),
            x_intercepts: "3".into(),
            y_intercept: "-1/2".into(),
        };
        let feedback = score_round(&worked_example(), &answers);
        assert!(feedback.vertical_asymptotes.is_correct);
        assert!(!feedback.horizontal_asymptote.is_correct);
        assert!(feedback.holes.is_correct);
        assert!(!feedback.x_intercepts.is_correct);
        assert!(feedback.y_intercept.is_correct);
        assert_eq!(feedback.raw_score, 300);
    }

    #[test]
    fn test_scalar_tolerance() {
        let features = FeatureSet {
            horizontal_asymptote: Some(1.0 / 3.0),
            ..FeatureSet::default()
        };
        let close = AnswerSheet {
            horizontal_asymptote: "0.333".into(),
            ..AnswerSheet::default()
        };
        let off = AnswerSheet {
            horizontal_asymptote: "0.3".into(),
            ..AnswerSheet::default()
        };
        assert!(score_round(&features, &close).horizontal_asymptote.is_correct);
        assert!(!score_round(&features, &off).horizontal_asymptote.is_correct);
    }

    #[test]
    fn test_missing_horizontal_asymptote_accepts_none() {
        let features = FeatureSet::default();
        for input in ["none", "UNDEFINED", "", "  "] {
            let answers = AnswerSheet {
                horizontal_asymptote: input.into(),
                ..AnswerSheet::default()
            };
            let feedback = score_round(&features, &answers);
            assert!(feedback.horizontal_asymptote.is_correct, "input {input:?}");
        }
        let wrong = AnswerSheet {
            horizontal_asymptote: "0".into(),
            ..AnswerSheet::default()
        };
        assert!(!score_round(&features, &wrong).horizontal_asymptote.is_correct);
    }

    #[test]
    fn test_value_set_requires_exact_match() {
        let features = FeatureSet {
            vertical_asymptotes: vec![-3.0, 2.0],
            ..FeatureSet::default()
        };
        let exact = AnswerSheet {
            vertical_asymptotes: "2, -3".into(),
            ..AnswerSheet::default()
        };
        let partial = AnswerSheet {
            vertical_asymptotes: "2".into(),
            ..AnswerSheet::default()
        };
        assert!(score_round(&features, &exact).vertical_asymptotes.is_correct);
        assert!(!score_round(&features, &partial).vertical_asymptotes.is_correct);
    }

    #[test]
    fn test_messages_name_correct_values() {
        let answers = AnswerSheet::default();
        let feedback = score_round(&worked_example(), &answers);
        assert!(
            feedback
                .vertical_asymptotes
                .message
                .contains("The vertical asymptotes are at x = 2")
        );
        assert!(feedback.holes.message.contains("The holes are at x = 1"));
        assert!(
            feedback
                .y_intercept
                .message
                .contains("The y-intercept is y = -0.5")
        );
    }

    #[test]
    fn test_hint_sequence_and_fallback() {
        assert_eq!(hint(0), HINTS[0]);
        assert_eq!(hint(2), HINTS[2]);
        assert_eq!(hint(3), FALLBACK_HINT);
        assert_eq!(hint(10), FALLBACK_HINT);
    }
}
