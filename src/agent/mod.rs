//! Action-selection agents wrapping the search engines.
//!
//! An agent owns its configuration (strategy, lookahead depth, evaluation
//! function), resolved at construction time. Each `select_action` call is
//! self-contained: nothing carries over between invocations except the
//! configuration and, for the randomized agents, the RNG stream.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::evaluate::{Evaluation, ProximityEvaluation};
use crate::game_tree::{
    alpha_beta_search, expectimax_search, minimax_search, Evaluator, GameState, SearchContext,
    SearchError, MAXIMIZER,
};

/// Chooses one action per invocation.
pub trait Agent<S: GameState> {
    fn select_action(&mut self, state: &S) -> Result<S::Action, SearchError>;
}

/// Picks uniformly at random among the maximizer's legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed construction for reproducible behavior.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn select_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let actions = state.legal_actions(MAXIMIZER);
        actions
            .as_slice()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SearchError::NoAvailableMoves)
    }
}

/// One-ply lookahead: evaluates the successor of every legal action and
/// picks the best, breaking ties uniformly at random.
pub struct ReflexAgent<E = ProximityEvaluation> {
    evaluator: E,
    rng: StdRng,
}

impl ReflexAgent {
    pub fn new() -> Self {
        Self {
            evaluator: ProximityEvaluation,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ReflexAgent<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<S, E> Agent<S> for ReflexAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn select_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let actions = state.legal_actions(MAXIMIZER);
        if actions.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let scores: Vec<f64> = actions
            .iter()
            .map(|action| {
                self.evaluator
                    .evaluate(&state.generate_successor(MAXIMIZER, action))
            })
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best_indices: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(index, _)| index)
            .collect();

        let chosen = best_indices
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoAvailableMoves)?;
        Ok(actions[chosen].clone())
    }
}

/// The adversarial search strategy a [`SearchAgent`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

/// Depth-bounded adversarial agent. Strategy, depth, and evaluation
/// function are fixed at construction; `select_action` runs one
/// self-contained search and returns the chosen root action.
pub struct SearchAgent {
    strategy: Strategy,
    context: SearchContext,
    evaluation: Evaluation,
}

impl SearchAgent {
    pub fn new(strategy: Strategy, depth: u8) -> Self {
        Self::with_evaluation(strategy, depth, Evaluation::default())
    }

    pub fn with_evaluation(strategy: Strategy, depth: u8, evaluation: Evaluation) -> Self {
        Self {
            strategy,
            context: SearchContext::new(depth),
            evaluation,
        }
    }

    /// Statistics of the most recent search, for diagnostics.
    pub fn context(&self) -> &SearchContext {
        &self.context
    }
}

impl<S: GameState> Agent<S> for SearchAgent {
    fn select_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        match self.strategy {
            Strategy::Minimax => minimax_search(&mut self.context, state, &self.evaluation),
            Strategy::AlphaBeta => alpha_beta_search(&mut self.context, state, &self.evaluation),
            Strategy::Expectimax => expectimax_search(&mut self.context, state, &self.evaluation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::ScoreEvaluation;
    use crate::game_tree::ActionList;
    use crate::grid::Position;

    /// A one-shot game: the maximizer picks an index, the game ends with
    /// that index's score.
    #[derive(Clone, Debug)]
    struct PickGame {
        scores: Vec<f64>,
        chosen: Option<usize>,
    }

    impl PickGame {
        fn new(scores: &[f64]) -> Self {
            Self {
                scores: scores.to_vec(),
                chosen: None,
            }
        }
    }

    impl GameState for PickGame {
        type Action = usize;

        fn legal_actions(&self, _agent: usize) -> ActionList<usize> {
            match self.chosen {
                Some(_) => ActionList::new(),
                None => (0..self.scores.len()).collect(),
            }
        }

        fn generate_successor(&self, _agent: usize, action: &usize) -> Self {
            Self {
                scores: self.scores.clone(),
                chosen: Some(*action),
            }
        }

        fn num_agents(&self) -> usize {
            1
        }

        fn is_win(&self) -> bool {
            self.chosen.is_some()
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> f64 {
            self.chosen.map(|index| self.scores[index]).unwrap_or(0.0)
        }

        fn agent_position(&self) -> Position {
            Position::new(0, 0)
        }

        fn adversary_positions(&self) -> Vec<Position> {
            Vec::new()
        }

        fn item_positions(&self) -> Vec<Position> {
            Vec::new()
        }
    }

    #[test]
    fn test_random_agent_only_picks_legal_actions() {
        let state = PickGame::new(&[1.0, 2.0, 3.0]);
        let mut agent = RandomAgent::with_seed(11);

        for _ in 0..50 {
            let action = agent.select_action(&state).unwrap();
            assert!(action < 3);
        }
    }

    #[test]
    fn test_random_agent_is_reproducible_for_a_fixed_seed() {
        let state = PickGame::new(&[1.0, 2.0, 3.0, 4.0]);

        let mut first = RandomAgent::with_seed(99);
        let mut second = RandomAgent::with_seed(99);
        for _ in 0..20 {
            assert_eq!(
                Agent::<PickGame>::select_action(&mut first, &state).unwrap(),
                Agent::<PickGame>::select_action(&mut second, &state).unwrap()
            );
        }
    }

    #[test]
    fn test_random_agent_errors_without_legal_actions() {
        let state = PickGame::new(&[]);
        let mut agent = RandomAgent::with_seed(0);

        assert_eq!(
            agent.select_action(&state),
            Err(SearchError::NoAvailableMoves)
        );
    }

    #[test]
    fn test_reflex_agent_picks_the_best_one_ply_action() {
        let state = PickGame::new(&[1.0, 5.0, 3.0]);
        let mut agent = ReflexAgent::with_evaluator(ScoreEvaluation).seeded(3);

        assert_eq!(agent.select_action(&state).unwrap(), 1);
    }

    #[test]
    fn test_reflex_agent_tie_break_stays_among_the_best() {
        let state = PickGame::new(&[5.0, 1.0, 5.0]);
        let mut agent = ReflexAgent::with_evaluator(ScoreEvaluation).seeded(17);

        for _ in 0..20 {
            let action = agent.select_action(&state).unwrap();
            assert!(action == 0 || action == 2);
        }
    }

    #[test]
    fn test_search_agent_dispatches_every_strategy() {
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax] {
            let state = PickGame::new(&[1.0, 5.0, 3.0]);
            let mut agent = SearchAgent::new(strategy, 1);

            assert_eq!(agent.select_action(&state).unwrap(), 1);
            assert_eq!(agent.context().stats().last_value(), Some(5.0));
        }
    }

    #[test]
    fn test_search_agent_with_proximity_evaluation() {
        let state = PickGame::new(&[2.0, 9.0]);
        let mut agent =
            SearchAgent::with_evaluation(Strategy::AlphaBeta, 1, Evaluation::Proximity);

        // No adversaries or items in this fixture, so proximity reduces to
        // the intrinsic score.
        assert_eq!(agent.select_action(&state).unwrap(), 1);
    }
}
