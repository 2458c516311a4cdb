mod bidirectional_iterator;
mod graph_search;
mod search_strategy;
mod search_tracer;

pub use bidirectional_iterator::BidirectionalIterator;
pub use graph_search::{graph_search, GraphSearch, SearchResult, SearchStep, Solution};
pub use search_strategy::SearchStrategy;
pub use search_tracer::{SearchSnapshot, SearchTracer, Snapshots, StepKind, TraceView};
