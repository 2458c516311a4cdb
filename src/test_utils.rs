use crate::search::{RoadMap, RouteProblem};
use std::rc::Rc;

pub const ROMANIA_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/romania.toml"));

pub const AUSTRALIA_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/australia.toml"));

pub fn romania_problem(from: &str, to: &str) -> RouteProblem {
    let map = RoadMap::from_text(ROMANIA_MAP_TEXT).unwrap();
    RouteProblem::new(Rc::new(map), from, to).unwrap()
}

pub fn australia_problem(from: &str, to: &str) -> RouteProblem {
    let map = RoadMap::from_text(AUSTRALIA_MAP_TEXT).unwrap();
    RouteProblem::new(Rc::new(map), from, to).unwrap()
}
