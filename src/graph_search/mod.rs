//! Single-agent pathfinding over an abstract problem interface.

pub mod node;
pub mod search;
pub mod traits;


pub use node::SearchNode;
pub use search::{
    astar_search, breadth_first_search, depth_first_search, random_walk_search,
    uniform_cost_search,
};
pub use traits::{Heuristic, NullHeuristic, SearchProblem, Successor, SuccessorList};
