//! Quiz engine for the rational-function graphing game.
//!
//! The engine is split into two layers:
//!
//! - [`analysis`] - symbolic feature analysis of rational functions
//!   (vertical asymptotes, holes, horizontal asymptote, intercepts)
//! - [`quiz`] - the game itself: round generation, answer parsing,
//!   scoring, and the multi-round session state machine
//!
//! Everything is synchronous and deterministic given a [`RoundSeed`]:
//! a seeded session replays the same functions round for round.

pub use self::{analysis::*, quiz::*};

pub mod analysis;
pub mod quiz;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("denominator is the zero polynomial")]
pub struct ZeroDenominatorError;
