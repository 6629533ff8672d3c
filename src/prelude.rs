//! Common types re-exported for convenience.

pub use crate::agent::{Agent, RandomAgent, ReflexAgent, SearchAgent, Strategy};
pub use crate::evaluate::{Evaluation, ProximityEvaluation, ScoreEvaluation};
pub use crate::frontier::{Frontier, PriorityQueue, Queue, Stack};
pub use crate::game_tree::{
    alpha_beta_search, expectimax_search, minimax_search, ActionList, Evaluator, GameState,
    SearchContext, SearchError, MAXIMIZER,
};
pub use crate::graph_search::{
    astar_search, breadth_first_search, depth_first_search, random_walk_search,
    uniform_cost_search, Heuristic, NullHeuristic, SearchProblem, Successor, SuccessorList,
};
pub use crate::grid::Position;
