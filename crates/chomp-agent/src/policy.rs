//! The decision policy contract.

use crate::features::FeatureVector;
use chomp_core::{Direction, RelativeDirection};

/// What a policy returns for one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum PolicyOutput {
    /// An absolute direction, used as is.
    Direction(Direction),
    /// One score per output. Index `i` stands for
    /// `RelativeDirection::ALL[i]`; the highest score wins.
    Scores(Vec<f32>),
}

/// Errors from a policy or from interpreting its output.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// The score array was empty.
    #[error("policy returned no scores")]
    EmptyScores,
    /// A score was NaN.
    #[error("policy score {index} is NaN")]
    NanScore {
        /// Position of the NaN.
        index: usize,
    },
    /// The highest score is not one of the four relative directions.
    #[error("policy picked output {index}, which is not a relative direction")]
    OutputOutOfRange {
        /// Position of the highest score.
        index: usize,
    },
    /// The policy itself failed.
    #[error("policy failed: {reason}")]
    Failed {
        /// Description of the failure.
        reason: String,
    },
}

/// Maps features to a move.
///
/// Calls are synchronous and happen once per active tick.
pub trait DecisionPolicy {
    /// Choose a move from this tick's features.
    fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError>;

    /// Receive the agent's current score after each active tick. Default: ignore.
    fn report_score(&mut self, _score: i64) {}
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        (**self).decide(features)
    }

    fn report_score(&mut self, score: i64) {
        (**self).report_score(score)
    }
}

/// Pick the relative direction with the highest score.
///
/// The first index wins ties. Arrays longer than four are accepted as long
/// as the winner is one of the first four.
pub fn argmax(scores: &[f32]) -> Result<RelativeDirection, PolicyError> {
    if scores.is_empty() {
        return Err(PolicyError::EmptyScores);
    }
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(PolicyError::NanScore { index });
    }
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    RelativeDirection::from_index(best).ok_or(PolicyError::OutputOutOfRange { index: best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_index_wins_ties() {
        assert_eq!(argmax(&[0.5, 0.9, 0.9, 0.1]), Ok(RelativeDirection::Left));
        assert_eq!(argmax(&[1.0, 1.0, 1.0, 1.0]), Ok(RelativeDirection::Forward));
    }

    #[test]
    fn short_arrays_map_to_leading_directions() {
        assert_eq!(argmax(&[0.1, 0.2]), Ok(RelativeDirection::Left));
        assert_eq!(argmax(&[-3.0]), Ok(RelativeDirection::Forward));
    }

    #[test]
    fn long_arrays_accepted_when_winner_in_range() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0, 5.0, 1.0]), Ok(RelativeDirection::Behind));
        assert_eq!(
            argmax(&[0.0, 0.0, 0.0, 0.0, 1.0]),
            Err(PolicyError::OutputOutOfRange { index: 4 })
        );
    }

    #[test]
    fn malformed_scores_rejected() {
        assert_eq!(argmax(&[]), Err(PolicyError::EmptyScores));
        assert_eq!(argmax(&[0.0, f32::NAN]), Err(PolicyError::NanScore { index: 1 }));
    }

    proptest! {
        #[test]
        fn winner_is_a_maximum(scores in prop::collection::vec(-100.0f32..100.0, 1..4)) {
            let rel = argmax(&scores).unwrap();
            let winner = scores[rel.index()];
            prop_assert!(scores.iter().all(|&s| s <= winner));
            prop_assert!(scores[..rel.index()].iter().all(|&s| s < winner));
        }
    }
}
