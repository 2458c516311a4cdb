mod route_problem;
mod search_problem;

pub use route_problem::RouteProblem;
pub use search_problem::SearchProblem;
