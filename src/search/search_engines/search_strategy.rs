use crate::search::{
    error::SearchError,
    search_engines::{graph_search, SearchResult, SearchTracer},
    FifoQueue, Frontier, SearchProblem, SearchStatistics, SortedFrontier, Stack, State,
};
use std::rc::Rc;
use strum_macros::{Display, EnumIter};

/// The search strategies available through the graph search loop. They
/// differ only in the frontier the loop pops from.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    #[clap(help = "Breadth-first search, FIFO frontier")]
    Bfs,
    #[clap(help = "Depth-first search, LIFO frontier")]
    Dfs,
    #[clap(help = "Frontier sorted by path cost")]
    BranchAndBound,
    #[clap(help = "Frontier sorted by path cost plus the heuristic estimate")]
    BranchAndBoundUnderestimation,
}

impl SearchStrategy {
    pub fn create_frontier<S: State>(&self) -> Box<dyn Frontier<S>> {
        match self {
            SearchStrategy::Bfs => Box::new(FifoQueue::new()),
            SearchStrategy::Dfs => Box::new(Stack::new()),
            SearchStrategy::BranchAndBound => Box::new(SortedFrontier::by_path_cost()),
            SearchStrategy::BranchAndBoundUnderestimation => {
                Box::new(SortedFrontier::by_path_cost_plus_heuristic())
            }
        }
    }

    pub fn search<S: State>(
        &self,
        problem: &dyn SearchProblem<S>,
    ) -> Result<(SearchResult<S>, SearchStatistics), SearchError> {
        graph_search(problem, self.create_frontier())
    }

    pub fn trace<S: State>(&self, problem: Rc<dyn SearchProblem<S>>) -> SearchTracer<S> {
        SearchTracer::new(problem, self.create_frontier())
    }
}
