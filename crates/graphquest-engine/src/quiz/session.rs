use rand::Rng as _;

use super::{
    AnswerSheet, Difficulty, HINT_PENALTY, Round, RoundFeedback, RoundGenerator, RoundSeed,
    hint, score_round,
};

/// Rounds in a full game.
pub const TOTAL_ROUNDS: usize = 5;

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// The current round is presented and waiting for a submission.
    AwaitingAnswers,
    /// The current round is scored; feedback is available.
    RoundComplete,
    /// The final round is scored; the session is over.
    Finished,
}

/// A five-round quiz session.
///
/// Drives the generate → present → score → feedback loop: each round is
/// generated at difficulty `min(round, 3)`, scored on submission, and the
/// hint penalty is applied before points are banked.
///
/// # Example
///
/// ```
/// use graphquest_engine::{AnswerSheet, QuizSession};
///
/// let mut session = QuizSession::new("Alex");
/// while !session.session_state().is_finished() {
///     // A real caller would collect answers for session.current_round()
///     session.submit(&AnswerSheet::default());
///     session.advance();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QuizSession {
    generator: RoundGenerator,
    player_name: String,
    round_number: usize,
    current_round: Round,
    hints_used: usize,
    score: usize,
    last_feedback: Option<RoundFeedback>,
    last_points: usize,
    session_state: SessionState,
}

impl QuizSession {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::with_seed(player_name, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed: the same seed replays
    /// the same functions round for round.
    #[must_use]
    pub fn with_seed(player_name: impl Into<String>, seed: RoundSeed) -> Self {
        let mut generator = RoundGenerator::with_seed(seed);
        let current_round = generator.next_round(Difficulty::for_round(1));
        Self {
            generator,
            player_name: player_name.into(),
            round_number: 1,
            current_round,
            hints_used: 0,
            score: 0,
            last_feedback: None,
            last_points: 0,
            session_state: SessionState::AwaitingAnswers,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the 1-based number of the current round.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    /// Returns the round currently presented.
    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.current_round
    }

    /// Returns the hints requested in the current round.
    #[must_use]
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Returns the cumulative score across completed rounds.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the state of the session.
    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// Returns the feedback for the last submitted round, if any.
    #[must_use]
    pub fn last_feedback(&self) -> Option<&RoundFeedback> {
        self.last_feedback.as_ref()
    }

    /// Returns the points banked for the last submitted round (after the
    /// hint penalty).
    #[must_use]
    pub fn last_points(&self) -> usize {
        self.last_points
    }

    /// Hands out the next hint and counts it against the round score.
    ///
    /// Hints after a submission are free: the round is already scored.
    pub fn request_hint(&mut self) -> &'static str {
        let text = hint(self.hints_used);
        if self.session_state.is_awaiting_answers() {
            self.hints_used += 1;
        }
        text
    }

    /// Scores the current round and banks the points.
    ///
    /// Points banked are the raw score minus [`HINT_PENALTY`] per hint
    /// used, floored at zero. A submission outside the
    /// [`AwaitingAnswers`](SessionState::AwaitingAnswers) state is
    /// ignored.
    pub fn submit(&mut self, answers: &AnswerSheet) -> Option<&RoundFeedback> {
        if !self.session_state.is_awaiting_answers() {
            return self.last_feedback.as_ref();
        }

        let feedback = score_round(self.current_round.features(), answers);
        let earned = feedback
            .raw_score
            .saturating_sub(HINT_PENALTY * self.hints_used);
        self.score += earned;
        self.last_points = earned;
        self.last_feedback = Some(feedback);
        self.session_state = if self.round_number >= TOTAL_ROUNDS {
            SessionState::Finished
        } else {
            SessionState::RoundComplete
        };
        self.last_feedback.as_ref()
    }

    /// Moves on to the next round after a completed one.
    ///
    /// Ignored unless the session is in the
    /// [`RoundComplete`](SessionState::RoundComplete) state.
    pub fn advance(&mut self) {
        if !self.session_state.is_round_complete() {
            return;
        }
        self.round_number += 1;
        self.hints_used = 0;
        self.last_feedback = None;
        self.current_round = self
            .generator
            .next_round(Difficulty::for_round(self.round_number));
        self.session_state = SessionState::AwaitingAnswers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::HINTS;

    fn fixed_seed() -> RoundSeed {
        serde_json::from_str("\"000102030405060708090a0b0c0d0e0f\"").unwrap()
    }

    fn correct_answers(session: &QuizSession) -> AnswerSheet {
        let features = session.current_round().features();
        let join = |values: &[f64]| {
            if values.is_empty() {
                "none".to_owned()
            } else {
                values
                    .iter()
                    .map(|v| format!("{v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        };
        let scalar = |value: Option<f64>| {
            value.map_or_else(|| "none".to_owned(), |v| format!("{v}"))
        };
        AnswerSheet {
            vertical_asymptotes: join(&features.vertical_asymptotes),
            horizontal_asymptote: scalar(features.horizontal_asymptote),
            holes: join(&features.hole_xs()),
            x_intercepts: join(&features.x_intercepts),
            y_intercept: scalar(features.y_intercept),
        }
    }

    #[test]
    fn test_full_session_flow() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());
        assert_eq!(session.round_number(), 1);
        assert!(session.session_state().is_awaiting_answers());

        for round in 1..=TOTAL_ROUNDS {
            assert_eq!(session.round_number(), round);
            let answers = correct_answers(&session);
            let feedback = session.submit(&answers).unwrap();
            assert_eq!(feedback.raw_score, 500, "round {round} should be perfect");
            if round < TOTAL_ROUNDS {
                assert!(session.session_state().is_round_complete());
                session.advance();
                assert!(session.session_state().is_awaiting_answers());
            }
        }

        assert!(session.session_state().is_finished());
        assert_eq!(session.score(), 2500);
    }

    #[test]
    fn test_difficulty_follows_round_number() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());
        let mut seen = Vec::new();
        for _ in 1..=TOTAL_ROUNDS {
            seen.push(session.current_round().difficulty());
            session.submit(&AnswerSheet::default());
            session.advance();
        }
        assert_eq!(
            seen,
            vec![
                Difficulty::Beginner,
                Difficulty::Intermediate,
                Difficulty::Advanced,
                Difficulty::Advanced,
                Difficulty::Advanced,
            ]
        );
    }

    #[test]
    fn test_hint_penalty_is_applied_and_floored() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());

        // Drain well past the specific hints: 12 hints = 120 penalty.
        for i in 0..12 {
            let text = session.request_hint();
            if i < HINTS.len() {
                assert_eq!(text, HINTS[i]);
            }
        }
        assert_eq!(session.hints_used(), 12);

        let answers = correct_answers(&session);
        session.submit(&answers);
        assert_eq!(session.last_points(), 500 - 120);

        // A wrong submission with many hints floors at zero rather than
        // going negative.
        session.advance();
        for _ in 0..12 {
            session.request_hint();
        }
        session.submit(&AnswerSheet::default());
        assert_eq!(session.last_points(), 0);
    }

    #[test]
    fn test_hints_reset_between_rounds() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());
        session.request_hint();
        session.request_hint();
        assert_eq!(session.hints_used(), 2);

        session.submit(&AnswerSheet::default());
        session.advance();
        assert_eq!(session.hints_used(), 0);
    }

    #[test]
    fn test_submit_outside_awaiting_state_is_ignored() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());
        session.submit(&AnswerSheet::default());
        let score_after_first = session.score();

        // A second submission of the same round must not double-score.
        session.submit(&correct_answers(&session));
        assert_eq!(session.score(), score_after_first);
    }

    #[test]
    fn test_advance_requires_completed_round() {
        let mut session = QuizSession::with_seed("Alex", fixed_seed());
        session.advance();
        assert_eq!(session.round_number(), 1);
        assert!(session.session_state().is_awaiting_answers());
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let a = QuizSession::with_seed("A", fixed_seed());
        let b = QuizSession::with_seed("B", fixed_seed());
        assert_eq!(
            a.current_round().display_form(),
            b.current_round().display_form()
        );
    }
}
