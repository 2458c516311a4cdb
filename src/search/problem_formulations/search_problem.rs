use crate::search::{Cost, SearchNode, State};
use std::fmt::Debug;

/// The capabilities a search engine needs from a problem. Implementations
/// must be deterministic: the order of [`SearchProblem::successors`] decides
/// the order in which children enter the frontier.
pub trait SearchProblem<S>: Debug
where
    S: State,
{
    fn initial_state(&self) -> S;

    fn is_goal(&self, state: &S) -> bool;

    /// Neighbouring states of `state` and the cost of stepping to each.
    fn successors(&self, state: &S) -> Vec<(S, Cost)>;

    /// Estimate of the remaining cost from `node` to a goal. Only consulted
    /// by heuristic-ordered frontiers; admissibility is up to the problem.
    fn heuristic(&self, node: &SearchNode<S>) -> Cost;
}
