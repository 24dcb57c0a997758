//! Error types for grid queries, searches and path reconstruction.
//!
//! [SearchError::Unreachable] is the only variant a well-formed caller is expected to handle
//! routinely. [ReconstructionError] signals that a cost map and grid disagree and should be
//! treated as a defect.

use std::fmt;

use crate::point::Point;

/// A point was queried that lies outside of the grid bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub point: Point,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "out of range {}", self.point)
    }
}

impl std::error::Error for OutOfRange {}

/// Reasons a search can terminate without producing a cost map that reaches the goal.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// Start or goal lies outside of the grid.
    OutOfRange(OutOfRange),
    /// Start or goal lies on a blocked cell.
    Blocked {
        point: Point,
    },
    /// The frontier was exhausted without reaching the goal.
    Unreachable {
        start: Point,
        goal: Point,
    },
    /// The heuristic weight is negative or not finite.
    InvalidWeight(f64),
    /// The configured expansion budget ran out before the search terminated.
    ExpansionLimit {
        expanded: usize,
    },
    /// The step cost of a move was negative.
    NegativeStepCost {
        from: Point,
        to: Point,
    },
}

impl SearchError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchError::Unreachable { .. })
    }

    /// True for errors caused by the arguments rather than by the grid layout.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SearchError::OutOfRange(_)
                | SearchError::Blocked { .. }
                | SearchError::InvalidWeight(_)
                | SearchError::NegativeStepCost { .. }
        )
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfRange(err) => write!(f, "{}", err),
            SearchError::Blocked { point } => write!(f, "{} is a blocked cell", point),
            SearchError::Unreachable { start, goal } => {
                write!(f, "{} is not reachable from {}", goal, start)
            }
            SearchError::InvalidWeight(weight) => {
                write!(f, "heuristic weight must be finite and non-negative, got {}", weight)
            }
            SearchError::ExpansionLimit { expanded } => {
                write!(f, "expansion limit reached after {} expansions", expanded)
            }
            SearchError::NegativeStepCost { from, to } => {
                write!(f, "negative step cost moving from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutOfRange> for SearchError {
    fn from(err: OutOfRange) -> Self {
        SearchError::OutOfRange(err)
    }
}

/// The backward walk over a cost map could not produce a complete path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconstructionError {
    /// The point (start or goal) has no entry in the cost map.
    NotReached(Point),
    /// No neighbour qualifies as the predecessor of this point.
    NoPredecessor(Point),
    /// The walk visited more points than the cost map holds.
    Cycle(Point),
}

impl fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructionError::NotReached(p) => write!(f, "{} has no recorded cost", p),
            ReconstructionError::NoPredecessor(p) => {
                write!(f, "no predecessor found for {}", p)
            }
            ReconstructionError::Cycle(p) => {
                write!(f, "backward walk revisits points, stopped at {}", p)
            }
        }
    }
}

impl std::error::Error for ReconstructionError {}

/// Umbrella error for the search-then-reconstruct convenience APIs.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Search(SearchError),
    Reconstruction(ReconstructionError),
}

impl Error {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Search(err) if err.is_unreachable())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Search(err) => write!(f, "search failed: {}", err),
            Error::Reconstruction(err) => write!(f, "path reconstruction failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Search(err) => Some(err),
            Error::Reconstruction(err) => Some(err),
        }
    }
}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        Error::Search(err)
    }
}

impl From<ReconstructionError> for Error {
    fn from(err: ReconstructionError) -> Self {
        Error::Reconstruction(err)
    }
}
