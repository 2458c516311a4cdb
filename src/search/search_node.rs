use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    rc::Rc,
};

/// Edge weights, path costs, heuristic estimates and frontier sort keys.
pub type Cost = OrderedFloat<f64>;

/// Anything that can identify a position in a search space. Closed-set
/// deduplication is driven by `Eq` and `Hash`.
pub trait State: Clone + Eq + Hash + Debug + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + 'static {}

/// A [`SearchNode`] is one node of the search tree: a state, the node it was
/// reached from and the cost of getting here. Nodes are immutable once built
/// and are shared through [`Rc`], so many children can point at the same
/// parent and the chain to the root lives as long as any descendant does.
pub struct SearchNode<S: State> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    /// Weight of the edge from the parent, zero for the root
    step_cost: Cost,
    /// Sum of the step costs from the root
    path_cost: Cost,
    /// Number of edges from the root
    depth: usize,
}

impl<S: State> SearchNode<S> {
    /// Create the root of a search tree.
    pub fn new_root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            step_cost: OrderedFloat(0.),
            path_cost: OrderedFloat(0.),
            depth: 0,
        })
    }

    /// Create a child of `parent` reached over an edge costing `step_cost`.
    pub fn new_child(parent: &Rc<Self>, state: S, step_cost: Cost) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            step_cost,
            path_cost: parent.path_cost + step_cost,
            depth: parent.depth + 1,
        })
    }

    /// One child per successor reported by the problem, in the order the
    /// problem reports them.
    pub fn expand(self: &Rc<Self>, problem: &dyn SearchProblem<S>) -> Vec<Rc<Self>> {
        problem
            .successors(&self.state)
            .into_iter()
            .map(|(state, step_cost)| Self::new_child(self, state, step_cost))
            .collect()
    }

    /// The nodes from the root to this node, both included.
    pub fn path(self: &Rc<Self>) -> Vec<Rc<Self>> {
        let mut path = Vec::with_capacity(self.depth + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            path.push(Rc::clone(node));
            current = node.parent.as_ref();
        }
        path.reverse();
        path
    }

    /// The states from the root to this node, both included.
    pub fn path_states(&self) -> Vec<S> {
        let mut states = Vec::with_capacity(self.depth + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            states.push(node.state.clone());
            current = node.parent.as_deref();
        }
        states.reverse();
        states
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    pub fn step_cost(&self) -> Cost {
        self.step_cost
    }

    pub fn path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<S: State> Debug for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("parent", &self.parent.as_ref().map(|parent| &parent.state))
            .field("path_cost", &self.path_cost.into_inner())
            .field("depth", &self.depth)
            .finish()
    }
}

impl<S: State + Display> Display for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Node {}>", self.state)
    }
}
