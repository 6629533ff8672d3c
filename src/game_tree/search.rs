//! Depth-bounded adversarial search: minimax, alpha-beta, expectimax.
//!
//! All three strategies share one recursion over `(state, depth, agent)`:
//! agent 0 maximizes, agents `1..num_agents` respond in increasing index
//! order, and the depth counter tracks full turn cycles: it increments
//! when control wraps back to agent 0. Recursion stops at a win, a loss,
//! or when the maximizer re-enters at the configured depth, and the static
//! evaluator supplies the value there. The strategies differ only in how an
//! adversary node combines its children's values: minimum, pruned minimum,
//! or arithmetic mean.

use log::debug;
use thiserror::Error;

use super::traits::{Evaluator, GameState, MAXIMIZER};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal actions for the maximizing agent at the root")]
    NoAvailableMoves,
    #[error("search depth must be at least 1")]
    DepthTooLow,
}

/// Statistics collected during a single search call. Diagnostic only; the
/// counters never influence the chosen action.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    successor_calls: usize,
    evaluations: usize,
    cutoffs: usize,
    deepest_ply: usize,
    last_value: Option<f64>,
}

impl SearchStats {
    /// Number of successor states generated.
    pub fn successor_calls(&self) -> usize {
        self.successor_calls
    }

    /// Number of static evaluations performed at terminal/cutoff states.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of subtrees abandoned by alpha-beta pruning.
    pub fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    /// Deepest ply the recursion reached, bounded by depth * num_agents.
    pub fn deepest_ply(&self) -> usize {
        self.deepest_ply
    }

    /// Root value of the most recent search.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }
}

/// Carries the depth bound and per-call statistics through a search.
///
/// Nothing persists between calls except the configuration: statistics are
/// reset at the start of every search, and the engine holds no caches.
pub struct SearchContext {
    max_depth: u8,
    stats: SearchStats,
}

impl SearchContext {
    /// `depth` is measured in full turn cycles, not per-agent plies.
    pub fn new(depth: u8) -> Self {
        Self {
            max_depth: depth,
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn begin_search(&mut self) -> Result<(), SearchError> {
        if self.max_depth < 1 {
            return Err(SearchError::DepthTooLow);
        }
        self.stats = SearchStats::default();
        Ok(())
    }

    fn successor<S: GameState>(&mut self, state: &S, agent: usize, action: &S::Action) -> S {
        self.stats.successor_calls += 1;
        state.generate_successor(agent, action)
    }

    fn note_ply(&mut self, depth: u8, agent: usize, num_agents: usize) {
        let ply = depth as usize * num_agents + agent;
        if ply > self.stats.deepest_ply {
            self.stats.deepest_ply = ply;
        }
    }

    fn evaluate<S: GameState, E: Evaluator<S>>(&mut self, state: &S, evaluator: &E) -> f64 {
        self.stats.evaluations += 1;
        evaluator.evaluate(state)
    }
}

/// Advances to the next agent in turn order, incrementing the depth when
/// control wraps back to the maximizer.
fn next_ply(agent: usize, depth: u8, num_agents: usize) -> (usize, u8) {
    let next_agent = (agent + 1) % num_agents;
    if next_agent == MAXIMIZER {
        (next_agent, depth + 1)
    } else {
        (next_agent, depth)
    }
}

/// The terminal/cutoff rule shared by all strategies, checked before any
/// expansion: wins, losses, and maximizer re-entry at the depth bound are
/// valued by the static evaluator.
fn cutoff_value<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    depth: u8,
    agent: usize,
) -> Option<f64>
where
    S: GameState,
    E: Evaluator<S>,
{
    if state.is_win() || state.is_lose() || (agent == MAXIMIZER && depth == context.max_depth) {
        return Some(context.evaluate(state, evaluator));
    }
    None
}

/// Chooses the action whose subtree value is extremal for the maximizer.
///
/// Ties resolve to the earliest action in `legal_actions` order, which
/// makes repeated searches over equal inputs deterministic.
fn search_root<S, E, V>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    strategy: &'static str,
    mut child_value: V,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
    V: FnMut(&mut SearchContext, &S, &E, u8, usize, f64) -> f64,
{
    context.begin_search()?;

    let actions = state.legal_actions(MAXIMIZER);
    if actions.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let (next_agent, next_depth) = next_ply(MAXIMIZER, 0, state.num_agents());
    let mut best_value = f64::NEG_INFINITY;
    let mut best_action = None;

    for action in &actions {
        let successor = context.successor(state, MAXIMIZER, action);
        let value = child_value(
            context,
            &successor,
            evaluator,
            next_depth,
            next_agent,
            best_value,
        );

        if best_action.is_none() || value > best_value {
            best_value = value;
            best_action = Some(action.clone());
        }
    }

    context.stats.last_value = Some(best_value);
    debug!(
        "{} depth {}: root value {}, {} successors generated",
        strategy, context.max_depth, best_value, context.stats.successor_calls
    );

    best_action.ok_or(SearchError::NoAvailableMoves)
}

/// Full minimax: adversaries are assumed to play the worst case for the
/// maximizer. Returns the action achieving the extremal root value.
pub fn minimax_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    search_root(
        context,
        state,
        evaluator,
        "minimax",
        |context, successor, evaluator, depth, agent, _| {
            minimax_value(context, successor, evaluator, depth, agent)
        },
    )
}

/// Minimax with alpha-beta pruning. Value-preserving: the chosen action
/// and root value are identical to unpruned minimax; only subtrees that
/// cannot affect the result are skipped.
pub fn alpha_beta_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    // The root is a maximizing node: the best value so far is the running
    // alpha, and beta stays +∞ because no ancestor bounds the root.
    search_root(
        context,
        state,
        evaluator,
        "alpha-beta",
        |context, successor, evaluator, depth, agent, best_value| {
            alpha_beta_value(
                context,
                successor,
                evaluator,
                depth,
                agent,
                best_value,
                f64::INFINITY,
            )
        },
    )
}

/// Expectimax: adversaries are modeled as choosing uniformly at random, so
/// adversary nodes take the arithmetic mean of their children instead of
/// the minimum.
pub fn expectimax_search<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    search_root(
        context,
        state,
        evaluator,
        "expectimax",
        |context, successor, evaluator, depth, agent, _| {
            expectimax_value(context, successor, evaluator, depth, agent)
        },
    )
}

fn minimax_value<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    depth: u8,
    agent: usize,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    let num_agents = state.num_agents();
    context.note_ply(depth, agent, num_agents);

    if let Some(value) = cutoff_value(context, state, evaluator, depth, agent) {
        return value;
    }

    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        // A dead end is never chosen by the agent above it.
        return dead_end_value(agent);
    }

    let (next_agent, next_depth) = next_ply(agent, depth, num_agents);
    let mut best = dead_end_value(agent);

    for action in &actions {
        let successor = context.successor(state, agent, action);
        let value = minimax_value(context, &successor, evaluator, next_depth, next_agent);
        best = if agent == MAXIMIZER {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_value<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    depth: u8,
    agent: usize,
    mut alpha: f64,
    mut beta: f64,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    let num_agents = state.num_agents();
    context.note_ply(depth, agent, num_agents);

    if let Some(value) = cutoff_value(context, state, evaluator, depth, agent) {
        return value;
    }

    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return dead_end_value(agent);
    }

    let (next_agent, next_depth) = next_ply(agent, depth, num_agents);
    let mut best = dead_end_value(agent);

    for action in &actions {
        let successor = context.successor(state, agent, action);
        let value = alpha_beta_value(
            context,
            &successor,
            evaluator,
            next_depth,
            next_agent,
            alpha,
            beta,
        );

        if agent == MAXIMIZER {
            best = best.max(value);
            // Strictly above beta: no minimizing ancestor will allow this
            // line, so the remaining siblings cannot matter.
            if best > beta {
                context.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            if best < alpha {
                context.stats.cutoffs += 1;
                return best;
            }
            beta = beta.min(best);
        }
    }

    best
}

fn expectimax_value<S, E>(
    context: &mut SearchContext,
    state: &S,
    evaluator: &E,
    depth: u8,
    agent: usize,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    let num_agents = state.num_agents();
    context.note_ply(depth, agent, num_agents);

    if let Some(value) = cutoff_value(context, state, evaluator, depth, agent) {
        return value;
    }

    let actions = state.legal_actions(agent);
    let (next_agent, next_depth) = next_ply(agent, depth, num_agents);

    if agent == MAXIMIZER {
        if actions.is_empty() {
            return dead_end_value(agent);
        }

        let mut best = f64::NEG_INFINITY;
        for action in &actions {
            let successor = context.successor(state, agent, action);
            let value = expectimax_value(context, &successor, evaluator, next_depth, next_agent);
            best = best.max(value);
        }
        best
    } else {
        if actions.is_empty() {
            // An adversary with no moves has an undefined mean. Every
            // non-terminal state is assumed to give adversaries at least
            // one action; if the world model breaks that assumption, fall
            // back to the static evaluation rather than fabricate a mean.
            return context.evaluate(state, evaluator);
        }

        let mut total = 0.0;
        for action in &actions {
            let successor = context.successor(state, agent, action);
            total += expectimax_value(context, &successor, evaluator, next_depth, next_agent);
        }
        total / actions.len() as f64
    }
}

fn dead_end_value(agent: usize) -> f64 {
    if agent == MAXIMIZER {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}
