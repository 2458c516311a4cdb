//! Step-by-step view of a graph search, one snapshot per popped node.

use crate::search::{
    error::SearchError,
    search_engines::{GraphSearch, SearchStep},
    Cost, Frontier, SearchNode, SearchProblem, State,
};
use ordered_float::OrderedFloat;
use std::{collections::HashSet, rc::Rc};
use strum_macros::Display;

/// What the step that produced a snapshot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StepKind {
    Expanded,
    Discarded,
    GoalFound,
    Exhausted,
}

/// Drives a [`GraphSearch`] one iteration at a time. The tracer owns the
/// problem and the search, so it can only be walked once; walking the same
/// search again needs a new tracer.
#[derive(Debug)]
pub struct SearchTracer<S: State> {
    problem: Rc<dyn SearchProblem<S>>,
    search: GraphSearch<S>,
}

impl<S: State> SearchTracer<S> {
    pub fn new(problem: Rc<dyn SearchProblem<S>>, frontier: Box<dyn Frontier<S>>) -> Self {
        let search = GraphSearch::new(problem.as_ref(), frontier);
        Self { problem, search }
    }

    /// Run one iteration of the search. The returned view borrows the live
    /// closed set and frontier, which the next call mutates; use
    /// [`TraceView::to_snapshot`] to keep it. Returns `Ok(None)` once the
    /// goal snapshot or the exhausted snapshot has been produced.
    pub fn advance(&mut self) -> Result<Option<TraceView<'_, S>>, SearchError> {
        let step = match self.search.step(self.problem.as_ref())? {
            Some(step) => step,
            None => return Ok(None),
        };
        let (kind, node) = match step {
            SearchStep::Expanded(node) => (StepKind::Expanded, Some(node)),
            SearchStep::Discarded(node) => (StepKind::Discarded, Some(node)),
            SearchStep::GoalFound(node) => (StepKind::GoalFound, Some(node)),
            SearchStep::Exhausted => (StepKind::Exhausted, None),
        };
        let statistics = self.search.statistics();
        Ok(Some(TraceView {
            kind,
            node,
            generated: statistics.generated_nodes(),
            visited: statistics.visited_nodes(),
            closed: self.search.closed(),
            fringe: self.search.frontier(),
        }))
    }

    pub fn is_finished(&self) -> bool {
        self.search.is_finished()
    }

    /// Every remaining step as an owned snapshot.
    pub fn into_snapshots(self) -> Snapshots<S> {
        Snapshots { tracer: self }
    }
}

/// The outcome of one tracer step, borrowing the search's live state.
#[derive(Debug)]
pub struct TraceView<'a, S: State> {
    kind: StepKind,
    node: Option<Rc<SearchNode<S>>>,
    generated: usize,
    visited: usize,
    closed: &'a HashSet<S>,
    fringe: &'a dyn Frontier<S>,
}

impl<'a, S: State> TraceView<'a, S> {
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn current(&self) -> Option<&Rc<SearchNode<S>>> {
        self.node.as_ref()
    }

    pub fn generated(&self) -> usize {
        self.generated
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn closed(&self) -> &'a HashSet<S> {
        self.closed
    }

    pub fn fringe(&self) -> &'a dyn Frontier<S> {
        self.fringe
    }

    /// Copy the closed set and the frontier contents out of the search.
    pub fn to_snapshot(&self) -> SearchSnapshot<S> {
        SearchSnapshot {
            kind: self.kind,
            generated: self.generated,
            visited: self.visited,
            path_cost: self
                .node
                .as_ref()
                .map_or(OrderedFloat(0.), |node| node.path_cost()),
            path: self.node.as_ref().map(|node| node.path()),
            closed: self.closed.clone(),
            fringe: self.fringe.nodes(),
        }
    }
}

/// A point-in-time copy of a search's progress. Nothing in a snapshot
/// changes when the search moves on.
#[derive(Debug, Clone)]
pub struct SearchSnapshot<S: State> {
    kind: StepKind,
    generated: usize,
    visited: usize,
    path_cost: Cost,
    /// Root to the popped node, absent for the exhausted step
    path: Option<Vec<Rc<SearchNode<S>>>>,
    closed: HashSet<S>,
    fringe: Vec<Rc<SearchNode<S>>>,
}

impl<S: State> SearchSnapshot<S> {
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn generated(&self) -> usize {
        self.generated
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn path(&self) -> Option<&[Rc<SearchNode<S>>]> {
        self.path.as_deref()
    }

    /// The node popped in this step.
    pub fn current(&self) -> Option<&Rc<SearchNode<S>>> {
        self.path.as_ref().and_then(|path| path.last())
    }

    pub fn closed(&self) -> &HashSet<S> {
        &self.closed
    }

    /// Frontier contents after the step, in container order.
    pub fn fringe(&self) -> &[Rc<SearchNode<S>>] {
        &self.fringe
    }

    pub fn fringe_states(&self) -> Vec<&S> {
        self.fringe.iter().map(|node| node.state()).collect()
    }
}

/// Owned snapshots of a tracer, ending after the final step or the first
/// error.
#[derive(Debug)]
pub struct Snapshots<S: State> {
    tracer: SearchTracer<S>,
}

impl<S: State> Iterator for Snapshots<S> {
    type Item = Result<SearchSnapshot<S>, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tracer
            .advance()
            .map(|view| view.map(|view| view.to_snapshot()))
            .transpose()
    }
}
