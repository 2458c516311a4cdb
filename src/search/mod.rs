pub mod error;
mod frontier;
mod graph;
pub mod problem_formulations;
mod road_map;
mod search_engines;
mod search_node;
mod search_statistics;
mod verbosity;

pub use frontier::{FifoQueue, Frontier, SortKey, SortedFrontier, Stack};
pub use graph::WeightedGraph;
pub use problem_formulations::{RouteProblem, SearchProblem};
pub use road_map::{BuiltinMap, City, CityConfig, RoadConfig, RoadMap, RoadMapConfig};
pub use search_engines::{
    graph_search, BidirectionalIterator, GraphSearch, SearchResult, SearchSnapshot,
    SearchStep, SearchStrategy, SearchTracer, Snapshots, Solution, StepKind, TraceView,
};
pub use search_node::{Cost, SearchNode, State};
pub use search_statistics::SearchStatistics;
pub use verbosity::Verbosity;
