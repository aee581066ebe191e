use crate::analysis::{FeatureSet, RationalFunction};

use super::Difficulty;

/// One quiz round: a generated rational function, its analyzed features,
/// and the display form shown to the learner.
///
/// Immutable once created; the orchestrator discards it after scoring.
#[derive(Debug, Clone)]
pub struct Round {
    function: RationalFunction,
    features: FeatureSet,
    display_form: String,
    difficulty: Difficulty,
}

impl Round {
    pub(crate) fn new(
        function: RationalFunction,
        features: FeatureSet,
        difficulty: Difficulty,
    ) -> Self {
        let display_form = function.display_form();
        Self {
            function,
            features,
            display_form,
            difficulty,
        }
    }

    /// Returns the generated function (unreduced and reduced forms).
    #[must_use]
    pub fn function(&self) -> &RationalFunction {
        &self.function
    }

    /// Returns the analyzed ground-truth features.
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Returns the presentation string built from the unreduced pair.
    #[must_use]
    pub fn display_form(&self) -> &str {
        &self.display_form
    }

    /// Returns the difficulty tier this round was generated for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
