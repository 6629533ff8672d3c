//! Static evaluation functions applied at terminal and cutoff states.
//!
//! The search engines depend only on the numeric contract (higher is
//! better for the maximizer); the composition of the value lives entirely
//! in this module and is swappable per agent.

use crate::game_tree::{Evaluator, GameState};
use crate::grid::Position;

/// The state's intrinsic score, untouched. The score is whatever the world
/// model displays to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluation;

impl<S: GameState> Evaluator<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

/// Intrinsic score combined with proximity features: the distance to the
/// nearest adversary is added (farther is safer) and the distance to the
/// nearest collectible item is subtracted (closer is better). A feature
/// with no positions left contributes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProximityEvaluation;

impl<S: GameState> Evaluator<S> for ProximityEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        let position = state.agent_position();
        let mut total = state.score();

        if let Some(distance) = nearest_distance(position, &state.adversary_positions()) {
            total += distance;
        }
        if let Some(distance) = nearest_distance(position, &state.item_positions()) {
            total -= distance;
        }

        total
    }
}

fn nearest_distance(from: Position, targets: &[Position]) -> Option<f64> {
    targets
        .iter()
        .map(|target| from.manhattan_distance(*target))
        .min_by(|a, b| a.total_cmp(b))
}

/// Construction-time selection of an evaluation function by identifier.
/// Agents resolve their evaluator from this enumeration when they are
/// built; no lookup happens during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// The state's intrinsic score alone.
    #[default]
    Score,
    /// Score plus adversary/item proximity features.
    Proximity,
}

impl<S: GameState> Evaluator<S> for Evaluation {
    fn evaluate(&self, state: &S) -> f64 {
        match self {
            Evaluation::Score => ScoreEvaluation.evaluate(state),
            Evaluation::Proximity => ProximityEvaluation.evaluate(state),
        }
    }
}
