pub mod agent;
pub mod evaluate;
pub mod frontier;
pub mod game_tree;
pub mod graph_search;
pub mod grid;
pub mod prelude;
