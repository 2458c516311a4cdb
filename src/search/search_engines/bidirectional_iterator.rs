use crate::search::{
    error::TraceError,
    search_engines::{SearchSnapshot, SearchTracer},
    State,
};

/// A cursor over the snapshots of a [`SearchTracer`]. Snapshots are copied
/// into a history buffer the first time they are reached, so stepping back
/// and forward again replays them without touching the search.
#[derive(Debug)]
pub struct BidirectionalIterator<S: State> {
    tracer: SearchTracer<S>,
    history: Vec<SearchSnapshot<S>>,
    /// Index into `history`, `None` before the first `next`
    cursor: Option<usize>,
}

impl<S: State> BidirectionalIterator<S> {
    pub fn new(tracer: SearchTracer<S>) -> Self {
        Self {
            tracer,
            history: Vec::new(),
            cursor: None,
        }
    }

    /// Move to the following snapshot, pulling a new one from the tracer if
    /// the cursor is on the last buffered snapshot.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&SearchSnapshot<S>, TraceError> {
        let position = self.cursor.map_or(0, |cursor| cursor + 1);
        if position == self.history.len() {
            let snapshot = match self.tracer.advance()? {
                Some(view) => view.to_snapshot(),
                None => return Err(TraceError::NoMoreSteps),
            };
            self.history.push(snapshot);
        }
        self.cursor = Some(position);
        Ok(&self.history[position])
    }

    /// Move back to the previous buffered snapshot.
    pub fn prev(&mut self) -> Result<&SearchSnapshot<S>, TraceError> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Ok(&self.history[cursor - 1])
            }
            _ => Err(TraceError::AtStart),
        }
    }

    pub fn current(&self) -> Option<&SearchSnapshot<S>> {
        self.cursor.map(|cursor| &self.history[cursor])
    }

    /// Move back to the first buffered snapshot.
    pub fn rewind(&mut self) -> Option<&SearchSnapshot<S>> {
        if self.history.is_empty() {
            return None;
        }
        self.cursor = Some(0);
        self.history.first()
    }

    /// Zero-based index of the current snapshot.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of snapshots captured so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the tracer has produced its last snapshot and the cursor is on
    /// it.
    pub fn is_at_end(&self) -> bool {
        self.tracer.is_finished()
            && self.cursor.map(|cursor| cursor + 1) == Some(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        error::SearchError, Cost, SearchNode, SearchProblem, SearchStrategy, SortKey,
        SortedFrontier, StepKind,
    };
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;
    use std::rc::Rc;

    /// The parts of a snapshot a replay must reproduce.
    type Fingerprint = (StepKind, usize, usize, Option<Vec<String>>, Vec<String>, Vec<String>);

    fn fingerprint(snapshot: &SearchSnapshot<String>) -> Fingerprint {
        let mut closed: Vec<String> = snapshot.closed().iter().cloned().collect();
        closed.sort();
        (
            snapshot.kind(),
            snapshot.generated(),
            snapshot.visited(),
            snapshot.current().map(|node| node.path_states()),
            closed,
            snapshot.fringe_states().into_iter().cloned().collect(),
        )
    }

    fn iterator(from: &str, to: &str, strategy: SearchStrategy) -> BidirectionalIterator<String> {
        BidirectionalIterator::new(strategy.trace(Rc::new(romania_problem(from, to))))
    }

    #[test]
    fn prev_before_any_step_is_at_start() {
        let mut steps = iterator("A", "B", SearchStrategy::Bfs);
        assert_eq!(steps.prev().unwrap_err(), TraceError::AtStart);
        assert!(steps.current().is_none());
        assert!(steps.rewind().is_none());

        steps.next().unwrap();
        assert_eq!(steps.prev().unwrap_err(), TraceError::AtStart);
        assert_eq!(steps.position(), Some(0));
    }

    #[test]
    fn replay_returns_captured_snapshots() {
        let mut steps = iterator("A", "B", SearchStrategy::BranchAndBound);
        let forward: Vec<Fingerprint> = (0..8)
            .map(|_| fingerprint(steps.next().unwrap()))
            .collect();

        let backward: Vec<Fingerprint> = (0..7)
            .map(|_| fingerprint(steps.prev().unwrap()))
            .collect();
        let expected_backward: Vec<Fingerprint> = forward[..7].iter().rev().cloned().collect();
        assert_eq!(backward, expected_backward);
        assert_eq!(steps.prev().unwrap_err(), TraceError::AtStart);

        let replayed: Vec<Fingerprint> = (0..7)
            .map(|_| fingerprint(steps.next().unwrap()))
            .collect();
        assert_eq!(replayed, forward[1..]);
        assert_eq!(steps.history_len(), 8);
    }

    #[test]
    fn replay_hands_out_the_same_nodes() {
        let mut steps = iterator("O", "E", SearchStrategy::Dfs);
        let first = Rc::clone(steps.next().unwrap().current().unwrap());
        steps.next().unwrap();
        let again = steps.prev().unwrap().current().unwrap();
        assert!(Rc::ptr_eq(&first, again));
    }

    #[test]
    fn captured_snapshots_do_not_follow_the_search() {
        let mut steps = iterator("A", "B", SearchStrategy::Bfs);
        let first = fingerprint(steps.next().unwrap());
        assert_eq!(first.4, vec!["A"]);
        assert_eq!(first.5, vec!["Z", "S", "T"]);

        for _ in 0..10 {
            steps.next().unwrap();
        }
        assert_eq!(fingerprint(steps.rewind().unwrap()), first);
    }

    #[test]
    fn stepping_past_the_goal_is_no_more_steps() {
        let mut steps = iterator("A", "B", SearchStrategy::BranchAndBoundUnderestimation);
        let mut last = None;
        loop {
            match steps.next() {
                Ok(snapshot) => last = Some(fingerprint(snapshot)),
                Err(TraceError::NoMoreSteps) => break,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        let last = last.unwrap();
        assert_eq!(last.0, StepKind::GoalFound);
        assert_eq!((last.1, last.2), (16, 6));
        let path: Vec<&str> = last.3.as_ref().unwrap().iter().map(String::as_str).collect();
        assert_eq!(path, vec!["A", "S", "R", "P", "B"]);

        assert!(steps.is_at_end());
        assert_eq!(steps.history_len(), 6);
        assert_eq!(steps.next().unwrap_err(), TraceError::NoMoreSteps);
        assert_eq!(steps.position(), Some(5));
        assert_eq!(steps.prev().unwrap().visited(), 5);
        assert!(!steps.is_at_end());
    }

    #[test]
    fn exhausted_trace_ends_with_exhausted_snapshot() {
        let tracer = SearchStrategy::Dfs.trace(Rc::new(australia_problem("WA", "T")));
        let mut steps = BidirectionalIterator::new(tracer);
        let mut kinds = Vec::new();
        while let Ok(snapshot) = steps.next() {
            kinds.push(snapshot.kind());
        }
        assert_eq!(kinds.len(), 20);
        assert_eq!(kinds.last(), Some(&StepKind::Exhausted));
        assert!(steps.current().unwrap().path().is_none());
    }

    #[test]
    fn search_errors_pass_through() {
        let nan_key: SortKey<String> = Box::new(
            |_: &SearchNode<String>, _: &dyn SearchProblem<String>| -> Result<Cost, SearchError> {
                Ok(OrderedFloat(f64::NAN))
            },
        );
        let tracer: SearchTracer<String> = SearchTracer::new(
            Rc::new(romania_problem("A", "B")),
            Box::new(SortedFrontier::new("nan", nan_key)),
        );
        let mut steps = BidirectionalIterator::new(tracer);

        assert!(matches!(
            steps.next(),
            Err(TraceError::Search(SearchError::MalformedFrontierPolicy { .. }))
        ));
        assert_eq!(steps.next().unwrap_err(), TraceError::NoMoreSteps);
        assert_eq!(steps.history_len(), 0);
    }
}
