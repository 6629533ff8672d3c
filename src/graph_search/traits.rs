//! Core traits for the single-agent pathfinding engine.

use std::hash::Hash;

use smallvec::SmallVec;

/// A state reachable in one step: the resulting state, the action that
/// produces it, and the non-negative incremental cost of taking that step.
#[derive(Clone, Debug)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// Successor lists are small in grid worlds; avoid a heap allocation per
/// expansion.
pub type SuccessorList<S, A> = SmallVec<[Successor<S, A>; 8]>;

/// An abstract single-agent search problem.
///
/// The engine is agnostic to what a state represents; it only requires state
/// identity (`Eq + Hash`) for the visited set, and the operations below. A
/// concrete world model implements this trait; the engine never names a
/// concrete type.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// True if and only if `state` is a valid goal state.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All states reachable from `state` in one step. Step costs must be
    /// non-negative.
    fn successors(&self, state: &Self::State) -> SuccessorList<Self::State, Self::Action>;

    /// Total cost of a legal action sequence from the start state. Used by
    /// callers to validate solutions; the engine itself never calls it.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> f64;
}

/// Estimates the remaining cost-to-goal from a state.
///
/// The engine enforces no admissibility or consistency; an inadmissible
/// estimate silently forfeits the optimality guarantee of informed search
/// but never its termination.
pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

/// The trivial heuristic: always zero. Informed search with this heuristic
/// behaves exactly like uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHeuristic;

impl<P: SearchProblem> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}
