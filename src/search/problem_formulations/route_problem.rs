use crate::search::{error::RoadMapError, Cost, RoadMap, SearchNode, SearchProblem};
use ordered_float::{Float, OrderedFloat};
use std::rc::Rc;

/// Find a route between two cities of a [`RoadMap`]. Successors are the
/// neighbouring cities in map order, and the heuristic is the straight-line
/// distance to the goal truncated to a whole number.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    map: Rc<RoadMap>,
    start: String,
    goal: String,
}

impl RouteProblem {
    pub fn new(map: Rc<RoadMap>, start: &str, goal: &str) -> Result<Self, RoadMapError> {
        for id in [start, goal] {
            if !map.contains(id) {
                return Err(RoadMapError::UnknownCity(id.to_string()));
            }
        }
        Ok(Self {
            map,
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }

    pub fn map(&self) -> &RoadMap {
        &self.map
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }
}

impl SearchProblem<String> for RouteProblem {
    fn initial_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &String) -> Vec<(String, Cost)> {
        self.map.neighbours(state).to_vec()
    }

    fn heuristic(&self, node: &SearchNode<String>) -> Cost {
        match self.map.straight_line_distance(node.state(), &self.goal) {
            Some(distance) => OrderedFloat(distance.trunc()),
            None => Cost::infinity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn goal_test_and_successors() {
        let problem = romania_problem("A", "B");
        assert_eq!(problem.initial_state(), "A");
        assert!(problem.is_goal(&"B".to_string()));
        assert!(!problem.is_goal(&"A".to_string()));

        let successors = problem.successors(&"B".to_string());
        let states: Vec<&str> = successors.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(states, vec!["U", "P", "G", "F"]);
        assert_eq!(successors[3].1, OrderedFloat(211.));
    }

    #[test]
    fn heuristic_is_truncated_straight_line_distance() {
        let problem = romania_problem("A", "B");
        let arad = SearchNode::new_root("A".to_string());
        let bucharest = SearchNode::new_root("B".to_string());
        assert_eq!(problem.heuristic(&arad), OrderedFloat(350.));
        assert_eq!(problem.heuristic(&bucharest), OrderedFloat(0.));
    }

    #[test]
    fn heuristic_without_locations_is_infinite() {
        let map = RoadMap::from_text(
            r#"
            name = "blind"
            [[cities]]
            id = "a"
            [[cities]]
            id = "b"
            location = [0, 0]
            "#,
        )
        .unwrap();
        let problem = RouteProblem::new(Rc::new(map), "a", "b").unwrap();
        let node = SearchNode::new_root("a".to_string());
        assert!(problem.heuristic(&node).is_infinite());
    }

    #[test]
    fn unknown_cities_are_rejected() {
        let map = Rc::new(RoadMap::from_text(ROMANIA_MAP_TEXT).unwrap());
        assert!(matches!(
            RouteProblem::new(map.clone(), "A", "Q"),
            Err(RoadMapError::UnknownCity(id)) if id == "Q"
        ));
        assert!(RouteProblem::new(map, "X", "B").is_err());
    }
}
