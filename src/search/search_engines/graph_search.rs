//! The graph search loop shared by batch searches and traced searches.
//!
//! Each iteration pops one node. A goal node ends the search. Otherwise the
//! node is expanded if its state has not been closed yet, and discarded if it
//! has. Successors go into the frontier unfiltered, even when their state is
//! closed or already queued, and a discarded node never updates a queued
//! node for the same state. With the sorted frontiers this means a cheaper
//! route to an already closed state is dropped, so the returned path is not
//! guaranteed to be the cheapest one.

use crate::search::{
    error::SearchError, Cost, Frontier, SearchNode, SearchProblem, SearchStatistics, State,
};
use itertools::Itertools;
use std::{
    collections::HashSet,
    fmt::{self, Display},
    rc::Rc,
};
use tracing::{debug, info};

/// A path from the initial state to a goal state.
#[derive(Debug, Clone)]
pub struct Solution<S: State> {
    goal: Rc<SearchNode<S>>,
}

impl<S: State> Solution<S> {
    pub fn new(goal: Rc<SearchNode<S>>) -> Self {
        Self { goal }
    }

    pub fn goal(&self) -> &Rc<SearchNode<S>> {
        &self.goal
    }

    pub fn path_cost(&self) -> Cost {
        self.goal.path_cost()
    }

    /// Nodes from the initial state to the goal.
    pub fn path(&self) -> Vec<Rc<SearchNode<S>>> {
        self.goal.path()
    }

    pub fn path_states(&self) -> Vec<S> {
        self.goal.path_states()
    }
}

impl<S: State + Display> Display for Solution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_states().iter().join(" -> "))
    }
}

#[derive(Debug, Clone)]
pub enum SearchResult<S: State> {
    /// The goal was reached
    Success(Solution<S>),
    /// The frontier ran out before a goal state was popped
    NoPathFound,
}

impl<S: State> SearchResult<S> {
    pub fn solution(&self) -> Option<&Solution<S>> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            SearchResult::NoPathFound => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

/// What one iteration of [`GraphSearch::step`] did with the node it popped.
#[derive(Debug, Clone)]
pub enum SearchStep<S: State> {
    /// The node's state was closed and its successors queued
    Expanded(Rc<SearchNode<S>>),
    /// The node's state was already closed, so the node was dropped
    Discarded(Rc<SearchNode<S>>),
    /// The node's state satisfies the goal test
    GoalFound(Rc<SearchNode<S>>),
    /// The frontier is empty
    Exhausted,
}

/// Search state that advances one popped node at a time. After a goal is
/// found, the frontier runs out or an error occurs, the search is finished
/// and further steps yield nothing.
#[derive(Debug)]
pub struct GraphSearch<S: State> {
    frontier: Box<dyn Frontier<S>>,
    closed: HashSet<S>,
    statistics: SearchStatistics,
    finished: bool,
}

impl<S: State> GraphSearch<S> {
    /// Start a search by pushing the root node for the problem's initial
    /// state into `frontier`.
    pub fn new(problem: &dyn SearchProblem<S>, mut frontier: Box<dyn Frontier<S>>) -> Self {
        let mut statistics = SearchStatistics::new();
        frontier.push(SearchNode::new_root(problem.initial_state()));
        statistics.increment_generated_nodes(1);
        Self {
            frontier,
            closed: HashSet::new(),
            statistics,
            finished: false,
        }
    }

    pub fn step(
        &mut self,
        problem: &dyn SearchProblem<S>,
    ) -> Result<Option<SearchStep<S>>, SearchError> {
        if self.finished {
            return Ok(None);
        }

        let node = match self.frontier.pop(problem) {
            Ok(Some(node)) => node,
            Ok(None) => {
                self.finish();
                info!("frontier exhausted, no path found");
                return Ok(Some(SearchStep::Exhausted));
            }
            Err(e) => {
                self.finish();
                return Err(e);
            }
        };
        self.statistics.increment_visited_nodes();

        if problem.is_goal(node.state()) {
            self.finish();
            info!(
                goal = ?node.state(),
                path_cost = node.path_cost().into_inner(),
                "goal found"
            );
            return Ok(Some(SearchStep::GoalFound(node)));
        }

        if self.closed.insert(node.state().clone()) {
            let successors = node.expand(problem);
            debug!(
                state = ?node.state(),
                path_cost = node.path_cost().into_inner(),
                successors = successors.len(),
                "expanding"
            );
            self.statistics.increment_expanded_nodes();
            self.statistics.increment_generated_nodes(successors.len());
            self.frontier.extend(successors);
            Ok(Some(SearchStep::Expanded(node)))
        } else {
            debug!(state = ?node.state(), "discarding node of closed state");
            self.statistics.increment_discarded_nodes();
            Ok(Some(SearchStep::Discarded(node)))
        }
    }

    /// Step until the search finishes.
    pub fn run(
        mut self,
        problem: &dyn SearchProblem<S>,
    ) -> Result<(SearchResult<S>, SearchStatistics), SearchError> {
        while let Some(step) = self.step(problem)? {
            match step {
                SearchStep::GoalFound(goal) => {
                    return Ok((SearchResult::Success(Solution::new(goal)), self.statistics));
                }
                SearchStep::Exhausted => break,
                SearchStep::Expanded(_) | SearchStep::Discarded(_) => {}
            }
        }
        Ok((SearchResult::NoPathFound, self.statistics))
    }

    fn finish(&mut self) {
        self.finished = true;
        self.statistics.finalise_search();
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn closed(&self) -> &HashSet<S> {
        &self.closed
    }

    pub fn frontier(&self) -> &dyn Frontier<S> {
        self.frontier.as_ref()
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

/// Run a graph search to completion. `NoPathFound` still comes with the
/// statistics of the exhausted search.
pub fn graph_search<S: State>(
    problem: &dyn SearchProblem<S>,
    frontier: Box<dyn Frontier<S>>,
) -> Result<(SearchResult<S>, SearchStatistics), SearchError> {
    GraphSearch::new(problem, frontier).run(problem)
}
