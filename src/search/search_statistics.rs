use std::time::{Duration, Instant};
use tracing::info;

/// Counters accumulated while a search runs. `generated` and `visited` are
/// the two counters reported to callers; `expanded` and `discarded` split
/// the non-goal visits by what happened to the popped node.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes constructed, including the root
    generated_nodes: usize,
    /// Number of nodes popped from the frontier
    visited_nodes: usize,
    /// Number of popped nodes whose state was closed and expanded
    expanded_nodes: usize,
    /// Number of popped nodes dropped because their state was already closed
    discarded_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            generated_nodes: 0,
            visited_nodes: 0,
            expanded_nodes: 0,
            discarded_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_visited_nodes(&mut self) {
        self.visited_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_discarded_nodes(&mut self) {
        self.discarded_nodes += 1;
        self.log_if_needed();
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn discarded_nodes(&self) -> usize {
        self.discarded_nodes
    }

    pub fn search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            generated_nodes = self.generated_nodes,
            visited_nodes = self.visited_nodes,
            expanded_nodes = self.expanded_nodes,
            discarded_nodes = self.discarded_nodes,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
