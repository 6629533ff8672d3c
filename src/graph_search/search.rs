//! Generic graph search over an abstract search problem.
//!
//! One traversal loop drives all four engines. The frontier container
//! decides the expansion order (LIFO for depth-first, FIFO for
//! breadth-first, cost-ordered for uniform-cost and informed search) and
//! the priority function supplies the ordering key for the cost-ordered
//! variants. Expanded states are closed on first pop and never re-expanded;
//! duplicate frontier entries are discarded lazily when popped.

use std::rc::Rc;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::frontier::{Frontier, PriorityQueue, Queue, Stack};

use super::node::SearchNode;
use super::traits::{Heuristic, SearchProblem};

/// The generalized search loop shared by every engine below.
///
/// Returns the root-first action sequence reaching a goal, or an empty
/// sequence when the frontier is exhausted without reaching one; an
/// unreachable goal is a valid result, not an error. A start state that is
/// already a goal returns the empty sequence on the first pop, before any
/// successor generation.
fn graph_search<P, F, K>(problem: &P, mut frontier: F, priority: K) -> Vec<P::Action>
where
    P: SearchProblem,
    F: Frontier<Rc<SearchNode<P::State, P::Action>>>,
    K: Fn(&SearchNode<P::State, P::Action>, &P) -> f64,
{
    let mut expanded: FxHashSet<P::State> = FxHashSet::default();

    let root = SearchNode::root(problem.start_state());
    let root_key = priority(&root, problem);
    frontier.push(Rc::new(root), root_key);

    while let Some(node) = frontier.pop() {
        if expanded.contains(&node.state) {
            // Lazy deletion: this state was already reached and expanded
            // through an entry popped earlier.
            continue;
        }

        if problem.is_goal_state(&node.state) {
            debug!(
                "goal reached: {} expansions, path cost {}",
                expanded.len(),
                node.path_cost
            );
            return node.action_path();
        }

        expanded.insert(node.state.clone());

        for successor in problem.successors(&node.state) {
            let child = SearchNode::child(
                Rc::clone(&node),
                successor.state,
                successor.action,
                successor.cost,
            );
            let key = priority(&child, problem);
            frontier.push(Rc::new(child), key);
        }
    }

    debug!("frontier exhausted: {} expansions, no path", expanded.len());
    Vec::new()
}

/// Searches the deepest nodes in the search tree first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, Stack::new(), |_, _| 0.0)
}

/// Searches the shallowest nodes in the search tree first. With uniform
/// step costs the returned path has the minimum number of actions.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, Queue::new(), |_, _| 0.0)
}

/// Searches the node of least accumulated path cost first. With
/// non-negative step costs the returned path is cheapest.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    graph_search(problem, PriorityQueue::new(), |node, _| node.path_cost)
}

/// Searches the node with the lowest combined path cost and heuristic
/// estimate first.
///
/// With an admissible heuristic the returned path is cheapest; states are
/// closed on first expansion and never re-opened, so an inconsistent
/// heuristic can forfeit that guarantee for states reachable along
/// cost-differing paths.
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    graph_search(problem, PriorityQueue::new(), |node, problem| {
        node.path_cost + heuristic.estimate(&node.state, problem)
    })
}

/// Walks uniformly random successors from the start state until a goal
/// state is reached, returning the action trail.
///
/// Keeps no visited set: termination depends entirely on the structure of
/// the state graph. A dead end (a non-goal state with no successors)
/// returns the empty sequence, the same "no path" result the systematic
/// engines use.
pub fn random_walk_search<P, R>(problem: &P, rng: &mut R) -> Vec<P::Action>
where
    P: SearchProblem,
    R: Rng,
{
    let mut actions = Vec::new();
    let mut state = problem.start_state();

    while !problem.is_goal_state(&state) {
        let successors = problem.successors(&state);
        let successor = match successors.as_slice().choose(rng) {
            Some(successor) => successor.clone(),
            None => return Vec::new(),
        };
        actions.push(successor.action);
        state = successor.state;
    }

    actions
}
