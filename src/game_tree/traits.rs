//! Core traits for the adversarial game-tree engine.

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::grid::Position;

/// Legal-action lists are small in grid worlds; avoid a heap allocation per
/// node.
pub type ActionList<A> = SmallVec<[A; 8]>;

/// Index of the maximizing agent. Adversaries occupy `1..num_agents` and
/// respond in increasing index order within a turn.
pub const MAXIMIZER: usize = 0;

/// A multi-agent, turn-ordered game state.
///
/// The engine never names a concrete world type: it consumes legal actions
/// and successor states through this trait and is otherwise agnostic to
/// what a state represents. Successor generation must be side-effect-free
/// on `self`.
pub trait GameState {
    type Action: Clone + PartialEq + Debug;

    /// Legal actions for the given agent. Empty when the agent has no
    /// moves.
    fn legal_actions(&self, agent: usize) -> ActionList<Self::Action>;

    /// The state resulting from the given agent taking the given action.
    fn generate_successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Total number of agents, including the maximizer. Always ≥ 1.
    fn num_agents(&self) -> usize;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Intrinsic score of the state as the world model reports it.
    fn score(&self) -> f64;

    // Feature accessors below are consumed only by the static evaluation
    // layer, never by the search recursion itself.

    fn agent_position(&self) -> Position;

    fn adversary_positions(&self) -> Vec<Position>;

    fn item_positions(&self) -> Vec<Position>;
}

/// Scores a terminal or cutoff state. Higher is better for the maximizer.
///
/// The engine depends only on this numeric contract, not on how the value
/// is composed.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S) -> f64;
}
