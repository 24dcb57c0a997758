use std::cmp::Ordering;

use fxhash::FxHashSet;
use itertools::Itertools;
use log::warn;

use crate::cost_map::{Cost, CostMap};
use crate::error::ReconstructionError;
use crate::grid::Grid;
use crate::point::Point;

/// How [PathReconstructor] picks the predecessor of a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reconstruction {
    /// Follow the predecessor links recorded during relaxation. Reproduces exactly the route the
    /// search settled on.
    #[default]
    Predecessors,
    /// Step to the first neighbour whose cost is exactly one below the current cost. Only
    /// meaningful for unit step costs.
    CostDescent,
    /// Step to the neighbour with the lowest cost, which must be below the current cost. On
    /// plateaus of equal-cost neighbours the first one in grid order wins, which need not be the
    /// neighbour the search actually came from.
    GreedyMinimum,
}

/// Walks a finished [CostMap] backwards from the goal to the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathReconstructor {
    pub strategy: Reconstruction,
}

impl PathReconstructor {
    pub fn new(strategy: Reconstruction) -> Self {
        PathReconstructor { strategy }
    }

    pub fn reconstruct<C: Cost>(
        &self,
        grid: &Grid,
        costs: &CostMap<C>,
        start: Point,
        goal: Point,
    ) -> Result<Path<C>, ReconstructionError> {
        let result = self.walk_back(grid, costs, start, goal);
        if let Err(err) = &result {
            warn!(
                "Could not reconstruct path {} -> {} ({:?}): {}",
                start, goal, self.strategy, err
            );
        }
        result
    }

    fn walk_back<C: Cost>(
        &self,
        grid: &Grid,
        costs: &CostMap<C>,
        start: Point,
        goal: Point,
    ) -> Result<Path<C>, ReconstructionError> {
        if !costs.contains(&start) {
            return Err(ReconstructionError::NotReached(start));
        }
        let cost = costs.get(&goal).ok_or(ReconstructionError::NotReached(goal))?;
        let mut points = vec![goal];
        let mut current = goal;
        while current != start {
            // A simple path cannot visit more points than the map holds.
            if points.len() > costs.len() {
                return Err(ReconstructionError::Cycle(current));
            }
            current = match self.strategy {
                Reconstruction::Predecessors => costs.predecessor(&current),
                Reconstruction::CostDescent => Self::descend(grid, costs, &current),
                Reconstruction::GreedyMinimum => Self::greedy_minimum(grid, costs, &current),
            }
            .ok_or(ReconstructionError::NoPredecessor(current))?;
            points.push(current);
        }
        points.reverse();
        Ok(Path { points, cost })
    }

    fn descend<C: Cost>(grid: &Grid, costs: &CostMap<C>, point: &Point) -> Option<Point> {
        let current = costs.get(point)?;
        if current <= C::zero() {
            return None;
        }
        let target = current - C::one();
        grid.neighbors(point)
            .into_iter()
            .find(|n| costs.get(n) == Some(target))
    }

    fn greedy_minimum<C: Cost>(grid: &Grid, costs: &CostMap<C>, point: &Point) -> Option<Point> {
        let current = costs.get(point)?;
        let (best, best_cost) = grid
            .neighbors(point)
            .into_iter()
            .filter_map(|n| costs.get(&n).map(|c| (n, c)))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))?;
        (best_cost < current).then_some(best)
    }
}

/// An ordered route from start to goal, both inclusive, together with its total cost.
///
/// The grid itself is never modified; [overlay](Self::overlay) gives a rendering layer the set
/// of cells to mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<C> {
    points: Vec<Point>,
    cost: C,
}

impl<C: Copy> Path<C> {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of points, start and goal included. Never zero.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consecutive (from, to) moves along the path.
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().tuple_windows::<(Point, Point)>()
    }

    /// True if every move is a single cardinal step.
    pub fn is_contiguous(&self) -> bool {
        self.steps().all(|(a, b)| a.is_adjacent(&b))
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// The path's cells as a set, for rendering on top of the grid.
    pub fn overlay(&self) -> FxHashSet<Point> {
        self.points.iter().copied().collect()
    }
}

impl<'a, C: Copy> IntoIterator for &'a Path<C> {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
