//! # grid_route
//!
//! Minimum-cost routing between two cells of a 4-connected obstacle grid using best-first
//! search: [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and (weighted)
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) are the same [SearchEngine] with a
//! different heuristic weight. Connected components are pre-computed when a [Grid] is built
//! to avoid flood-filling behaviour if no path exists.
//!
//! A search produces a [CostMap] of best-known costs and predecessors, which a
//! [PathReconstructor] turns into a [Path]. The cost type is chosen by the caller.
//!
//! ```
//! use grid_route::{CostMap, Grid, Path, Point, SearchEngine};
//!
//! // |S  |
//! // | # |
//! // |  G|
//! let grid = Grid::new(
//!     [[0, 0, 0], [0, 1, 0], [0, 0, 0]],
//!     Point::new(0, 0),
//!     Point::new(2, 2),
//! );
//! let costs: CostMap<i32> = SearchEngine::dijkstra().search_grid(&grid).unwrap();
//! assert_eq!(costs.get(&grid.goal()), Some(4));
//!
//! let path: Path<i32> = SearchEngine::astar().find_path(&grid).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod config;
pub mod cost_map;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod path;
pub mod point;
pub mod search;

pub use config::{GoalCheck, SearchConfig};
pub use cost_map::{Cost, CostMap};
pub use error::{Error, OutOfRange, ReconstructionError, SearchError};
pub use frontier::{Frontier, FrontierEntry};
pub use grid::{Cell, Grid};
pub use heuristic::{Euclidean, Heuristic, Manhattan, NoHeuristic, StepCost, UnitStep};
pub use path::{Path, PathReconstructor, Reconstruction};
pub use point::{Direction, Point};
pub use search::{Search, SearchEngine, SearchState};
