//! The quiz game built on top of the analysis layer.
//!
//! - [`RoundGenerator`] / [`RoundSeed`] - Seeded random generation of quiz
//!   rounds from a difficulty-tiered pattern catalog
//! - [`Round`] - One generated function with its features and display form
//! - [`parse_answer`] - Free-text answers to sorted numbers
//! - [`score_round`] - Per-category verdicts and the round score
//! - [`QuizSession`] - The five-round game state machine
//!
//! # Game Flow
//!
//! 1. Create a [`QuizSession`] (optionally with a fixed [`RoundSeed`])
//! 2. Present `current_round()` and collect one answer per category
//! 3. `submit()` the [`AnswerSheet`]; read the [`RoundFeedback`]
//! 4. `advance()` to the next round until the session is finished

pub use self::{answer::*, generator::*, round::*, scoring::*, session::*};

mod answer;
mod generator;
mod round;
mod scoring;
mod session;
