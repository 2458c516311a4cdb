//! Frontiers hold the nodes that have been generated but not yet visited.
//! The removal policy of the frontier is what distinguishes one uninformed
//! or informed search strategy from another; the driving loop is shared.

use crate::search::{error::SearchError, Cost, SearchNode, SearchProblem, State};
use std::{
    collections::VecDeque,
    fmt::{self, Debug},
    rc::Rc,
};
use tracing::trace;

pub trait Frontier<S: State>: Debug {
    fn push(&mut self, node: Rc<SearchNode<S>>);

    fn extend(&mut self, nodes: Vec<Rc<SearchNode<S>>>) {
        for node in nodes {
            self.push(node);
        }
    }

    /// Remove the next node according to the frontier's policy. Returns
    /// `Ok(None)` once the frontier is empty.
    fn pop(
        &mut self,
        problem: &dyn SearchProblem<S>,
    ) -> Result<Option<Rc<SearchNode<S>>>, SearchError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the current contents, in container order. Duplicated states
    /// are kept.
    fn nodes(&self) -> Vec<Rc<SearchNode<S>>>;
}

/// Last in, first out. Gives depth-first search.
#[derive(Debug)]
pub struct Stack<S: State> {
    nodes: Vec<Rc<SearchNode<S>>>,
}

impl<S: State> Stack<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: State> Default for Stack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Frontier<S> for Stack<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push(node);
    }

    fn pop(
        &mut self,
        _problem: &dyn SearchProblem<S>,
    ) -> Result<Option<Rc<SearchNode<S>>>, SearchError> {
        Ok(self.nodes.pop())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<Rc<SearchNode<S>>> {
        self.nodes.clone()
    }
}

/// First in, first out. Gives breadth-first search.
#[derive(Debug)]
pub struct FifoQueue<S: State> {
    nodes: VecDeque<Rc<SearchNode<S>>>,
}

impl<S: State> FifoQueue<S> {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }
}

impl<S: State> Default for FifoQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Frontier<S> for FifoQueue<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push_back(node);
    }

    fn pop(
        &mut self,
        _problem: &dyn SearchProblem<S>,
    ) -> Result<Option<Rc<SearchNode<S>>>, SearchError> {
        Ok(self.nodes.pop_front())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<Rc<SearchNode<S>>> {
        self.nodes.iter().cloned().collect()
    }
}

/// Key a [`SortedFrontier`] orders its nodes by, smallest first.
pub type SortKey<S> =
    Box<dyn Fn(&SearchNode<S>, &dyn SearchProblem<S>) -> Result<Cost, SearchError>>;

/// A frontier that, before every removal, stably re-sorts its whole content
/// by a key and removes the first node. The content stays in sorted order
/// afterwards, so nodes with equal keys keep the order they had in the
/// previous sort, followed by insertion order for nodes pushed since.
pub struct SortedFrontier<S: State> {
    name: &'static str,
    key: SortKey<S>,
    nodes: VecDeque<Rc<SearchNode<S>>>,
}

impl<S: State> SortedFrontier<S> {
    pub fn new(name: &'static str, key: SortKey<S>) -> Self {
        Self {
            name,
            key,
            nodes: VecDeque::new(),
        }
    }

    /// Branch and bound: cheapest path so far first.
    pub fn by_path_cost() -> Self {
        Self::new(
            "path-cost",
            Box::new(|node: &SearchNode<S>, _: &dyn SearchProblem<S>| Ok(node.path_cost())),
        )
    }

    /// Branch and bound with underestimation: path cost plus the problem's
    /// heuristic estimate.
    pub fn by_path_cost_plus_heuristic() -> Self {
        Self::new(
            "path-cost-plus-heuristic",
            Box::new(|node: &SearchNode<S>, problem: &dyn SearchProblem<S>| {
                Ok(node.path_cost() + problem.heuristic(node))
            }),
        )
    }

    fn evaluate(
        &self,
        node: &SearchNode<S>,
        problem: &dyn SearchProblem<S>,
    ) -> Result<Cost, SearchError> {
        let key = (self.key)(node, problem)?;
        if key.is_nan() {
            return Err(SearchError::MalformedFrontierPolicy {
                reason: format!(
                    "sort key {} is not a number for state {:?}",
                    self.name,
                    node.state()
                ),
            });
        }
        Ok(key)
    }
}

impl<S: State> Debug for SortedFrontier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedFrontier")
            .field("name", &self.name)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<S: State> Frontier<S> for SortedFrontier<S> {
    fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.nodes.push_back(node);
    }

    fn pop(
        &mut self,
        problem: &dyn SearchProblem<S>,
    ) -> Result<Option<Rc<SearchNode<S>>>, SearchError> {
        if self.nodes.is_empty() {
            return Ok(None);
        }
        let keys = self
            .nodes
            .iter()
            .map(|node| self.evaluate(node, problem))
            .collect::<Result<Vec<Cost>, SearchError>>()?;

        let mut keyed: Vec<(Cost, Rc<SearchNode<S>>)> =
            keys.into_iter().zip(self.nodes.drain(..)).collect();
        // `sort_by_key` is stable, which decides ties
        keyed.sort_by_key(|(key, _)| *key);
        trace!(key = self.name, smallest = keyed[0].0.into_inner());

        self.nodes = keyed.into_iter().map(|(_, node)| node).collect();
        Ok(self.nodes.pop_front())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<Rc<SearchNode<S>>> {
        self.nodes.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    fn states(frontier: &dyn Frontier<String>) -> Vec<String> {
        frontier
            .nodes()
            .iter()
            .map(|node| node.state().clone())
            .collect()
    }

    fn constant_key(value: f64) -> SortKey<String> {
        Box::new(move |_: &SearchNode<String>, _: &dyn SearchProblem<String>| {
            Ok(OrderedFloat(value))
        })
    }

    fn popped_state(
        frontier: &mut dyn Frontier<String>,
        problem: &dyn SearchProblem<String>,
    ) -> String {
        frontier.pop(problem).unwrap().unwrap().state().clone()
    }

    #[test]
    fn stack_pops_most_recent() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());
        let mut stack = Stack::new();
        stack.extend(root.expand(&problem));

        assert_eq!(states(&stack), vec!["Z", "S", "T"]);
        assert_eq!(popped_state(&mut stack, &problem), "T");
        assert_eq!(popped_state(&mut stack, &problem), "S");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn queue_pops_least_recent() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());
        let mut queue = FifoQueue::new();
        queue.extend(root.expand(&problem));

        assert_eq!(popped_state(&mut queue, &problem), "Z");
        assert_eq!(popped_state(&mut queue, &problem), "S");
        assert_eq!(popped_state(&mut queue, &problem), "T");
        assert!(queue.pop(&problem).unwrap().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn sorted_frontier_pops_smallest_key_and_stays_sorted() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());
        let mut frontier: SortedFrontier<String> = SortedFrontier::by_path_cost();
        frontier.extend(root.expand(&problem));

        // Z = 75, S = 140, T = 118
        assert_eq!(popped_state(&mut frontier, &problem), "Z");
        assert_eq!(states(&frontier), vec!["T", "S"]);
    }

    #[test]
    fn sorted_frontier_breaks_ties_by_insertion_order() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());
        let mut frontier = SortedFrontier::new("constant", constant_key(1.));
        frontier.extend(root.expand(&problem));

        assert_eq!(popped_state(&mut frontier, &problem), "Z");
        assert_eq!(popped_state(&mut frontier, &problem), "S");
        assert_eq!(popped_state(&mut frontier, &problem), "T");
    }

    #[test]
    fn heuristic_key_adds_estimate() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());
        let mut frontier: SortedFrontier<String> =
            SortedFrontier::by_path_cost_plus_heuristic();
        frontier.extend(root.expand(&problem));

        // Z = 75 + 356, S = 140 + 232, T = 118 + 317
        assert_eq!(popped_state(&mut frontier, &problem), "S");
        assert_eq!(states(&frontier), vec!["Z", "T"]);
    }

    #[test]
    fn failing_key_is_a_malformed_policy() {
        let problem = romania_problem("A", "B");
        let root = SearchNode::new_root("A".to_string());

        let failing_key: SortKey<String> = Box::new(
            |_: &SearchNode<String>, _: &dyn SearchProblem<String>| -> Result<Cost, SearchError> {
                Err(SearchError::MalformedFrontierPolicy {
                    reason: "no key".to_string(),
                })
            },
        );
        let mut failing = SortedFrontier::new("failing", failing_key);
        failing.push(root.clone());
        assert!(matches!(
            failing.pop(&problem),
            Err(SearchError::MalformedFrontierPolicy { .. })
        ));

        let mut not_a_number = SortedFrontier::new("nan", constant_key(f64::NAN));
        not_a_number.push(root);
        assert!(matches!(
            not_a_number.pop(&problem),
            Err(SearchError::MalformedFrontierPolicy { .. })
        ));
    }
}
