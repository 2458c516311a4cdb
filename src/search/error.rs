//! Error types for searching, stepping through traces and loading maps.
//!
//! Running out of frontier without reaching the goal is not an error; it is
//! reported as [`crate::search::SearchResult::NoPathFound`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure while driving a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The sort key of a sorted frontier could not be evaluated. The search
    /// is aborted at the pop that triggered it.
    #[error("malformed frontier policy: {reason}")]
    MalformedFrontierPolicy { reason: String },
}

/// Reasons a [`crate::search::BidirectionalIterator`] cannot move.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// The trace is finite and every step has been produced.
    #[error("no more steps in the search trace")]
    NoMoreSteps,
    /// The cursor is already on the first captured step.
    #[error("already at the first step of the search trace")]
    AtStart,
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Failure while loading or validating a road map, or while building a
/// problem on top of one.
#[derive(Debug, Error)]
pub enum RoadMapError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("city {0} is declared more than once")]
    DuplicateCity(String),
    /// Distances must be non-negative numbers.
    #[error("road {from} -> {to} has invalid distance {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
    #[error("unknown city {0}")]
    UnknownCity(String),
}
