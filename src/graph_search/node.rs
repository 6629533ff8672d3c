use std::rc::Rc;

/// A node in the search tree: a state, the node it was expanded from, the
/// action that produced it, and the accumulated path cost from the root.
///
/// Immutable after construction. Parents are shared through `Rc` because
/// sibling frontier entries reference the same ancestor chain, and the
/// winning node must walk that chain back to the root.
#[derive(Debug)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub parent: Option<Rc<SearchNode<S, A>>>,
    pub action: Option<A>,
    pub path_cost: f64,
}

impl<S, A: Clone> SearchNode<S, A> {
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
        }
    }

    pub fn child(parent: Rc<Self>, state: S, action: A, step_cost: f64) -> Self {
        let path_cost = parent.path_cost + step_cost;
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
        }
    }

    /// Reconstructs the root-first action sequence that reaches this node.
    ///
    /// Walks parent links iteratively and reverses at the end, so path
    /// length never translates into call-stack depth.
    pub fn action_path(&self) -> Vec<A> {
        let mut actions = Vec::new();
        if let Some(action) = &self.action {
            actions.push(action.clone());
        }

        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent.as_deref();
        }

        actions.reverse();
        actions
    }
}
