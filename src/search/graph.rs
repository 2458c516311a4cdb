use crate::search::{Cost, State};
use std::collections::HashMap;

/// A weighted graph whose neighbour lists remember insertion order. The order
/// in which neighbours are reported is the order in which successors are
/// generated during search, so it is part of the observable behaviour of
/// every search strategy.
#[derive(Debug, Clone)]
pub struct WeightedGraph<S: State> {
    /// States in the order they were first seen
    states: Vec<S>,
    /// Position of each state in `states` and `adjacency`
    index: HashMap<S, usize>,
    /// Outgoing edges of each state, in insertion order
    adjacency: Vec<Vec<(S, Cost)>>,
    /// Positions of states in the order they gained their first outgoing edge
    sources: Vec<usize>,
    directed: bool,
}

impl<S: State> WeightedGraph<S> {
    /// Create an empty directed graph.
    pub fn new_directed() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            sources: Vec::new(),
            directed: true,
        }
    }

    /// Build a directed graph from a list of `(from, to, weight)` edges.
    pub fn directed<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Cost)>,
    {
        let mut graph = Self::new_directed();
        for (from, to, weight) in edges {
            graph.connect(from, to, weight);
        }
        graph
    }

    /// Build an undirected graph from a list of `(from, to, weight)` edges,
    /// each listed once. See [`WeightedGraph::make_undirected`] for how the
    /// reverse edges are ordered.
    pub fn undirected<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, Cost)>,
    {
        let mut graph = Self::directed(edges);
        graph.make_undirected();
        graph
    }

    /// Register a state without any edges. Does nothing if the state is
    /// already known.
    pub fn add_state(&mut self, state: S) -> usize {
        if let Some(&position) = self.index.get(&state) {
            return position;
        }
        let position = self.states.len();
        self.index.insert(state.clone(), position);
        self.states.push(state);
        self.adjacency.push(Vec::new());
        position
    }

    /// Add (or overwrite) a single directed edge. An overwritten edge keeps
    /// its position in the neighbour list.
    pub fn connect(&mut self, from: S, to: S, weight: Cost) {
        let position = self.add_state(from);
        if let Some(entry) = self.adjacency[position]
            .iter_mut()
            .find(|(state, _)| *state == to)
        {
            entry.1 = weight;
            return;
        }
        if self.adjacency[position].is_empty() {
            self.sources.push(position);
        }
        self.adjacency[position].push((to.clone(), weight));
        self.add_state(to);
    }

    /// Mirror every edge. States that own outgoing edges are visited in the
    /// order they gained their first outgoing edge, which is not the order
    /// they were first seen when a state shows up as a target before it has
    /// edges of its own. Each of their current neighbours receives the
    /// reverse edge, appended if new and overwritten in place otherwise.
    /// When both directions of an edge were given, the weight declared from
    /// the earlier source wins.
    pub fn make_undirected(&mut self) {
        let sources = self.sources.clone();
        for position in sources {
            let from = self.states[position].clone();
            let neighbours = self.adjacency[position].clone();
            for (to, weight) in neighbours {
                self.connect(to, from.clone(), weight);
            }
        }
        self.directed = false;
    }

    /// Neighbours of `state` with the weight of the edge leading to each. An
    /// unknown state has no neighbours.
    pub fn neighbours(&self, state: &S) -> &[(S, Cost)] {
        match self.index.get(state) {
            Some(&position) => &self.adjacency[position],
            None => &[],
        }
    }

    pub fn weight(&self, from: &S, to: &S) -> Option<Cost> {
        self.neighbours(from)
            .iter()
            .find(|(state, _)| state == to)
            .map(|(_, weight)| *weight)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn edges(&self) -> impl Iterator<Item = (&S, &S, Cost)> {
        self.states
            .iter()
            .zip(self.adjacency.iter())
            .flat_map(|(from, neighbours)| {
                neighbours.iter().map(move |(to, weight)| (from, to, *weight))
            })
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
