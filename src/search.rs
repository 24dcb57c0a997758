use log::{debug, info, warn};

use crate::config::{GoalCheck, SearchConfig};
use crate::cost_map::{Cost, CostMap};
use crate::error::{Error, SearchError};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::{Heuristic, Manhattan, StepCost, UnitStep};
use crate::path::{Path, PathReconstructor};
use crate::point::Point;

/// Best-first search over a [Grid]. The frontier is ordered by
/// `cost + weight * heuristic(point, goal)`, so the same engine covers Dijkstra (weight 0),
/// A* (weight 1) and weighted A* (weight above 1).
#[derive(Clone, Debug)]
pub struct SearchEngine<H = Manhattan, S = UnitStep> {
    pub heuristic: H,
    pub step_cost: S,
    pub config: SearchConfig,
}

impl SearchEngine<Manhattan, UnitStep> {
    /// Uniform-cost search.
    pub fn dijkstra() -> Self {
        Self::new(Manhattan, UnitStep).with_weight(0.0)
    }

    /// A* with the Manhattan heuristic.
    pub fn astar() -> Self {
        Self::new(Manhattan, UnitStep)
    }

    /// A* with the Manhattan heuristic scaled by `weight`, trading optimality for fewer
    /// expansions when `weight` is above 1.
    pub fn weighted_astar(weight: f64) -> Self {
        Self::new(Manhattan, UnitStep).with_weight(weight)
    }
}

impl Default for SearchEngine<Manhattan, UnitStep> {
    fn default() -> Self {
        Self::astar()
    }
}

/// Progress of a [Search].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// The goal was reached.
    Found,
    /// The frontier ran empty.
    Exhausted,
    /// The expansion budget ran out.
    LimitReached,
    /// The step cost returned a negative value for a move.
    Rejected,
}

impl SearchState {
    pub fn is_terminated(self) -> bool {
        self != SearchState::Running
    }
}

impl<H, S> SearchEngine<H, S> {
    pub fn new(heuristic: H, step_cost: S) -> Self {
        SearchEngine {
            heuristic,
            step_cost,
            config: SearchConfig::default(),
        }
    }

    /// Applies every setting of `config` except the weight, which stays as the constructor or
    /// [with_weight](Self::with_weight) chose it.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = SearchConfig {
            weight: self.config.weight,
            ..config
        };
        self
    }

    /// Edits the current configuration in place, weight included.
    pub fn map_config(mut self, f: impl FnOnce(SearchConfig) -> SearchConfig) -> Self {
        self.config = f(self.config);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.config.weight = weight;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<H: Heuristic, S> SearchEngine<H, S> {
    /// Validates the inputs and sets up a search that can be driven with [Search::step].
    pub fn begin<'a, C>(
        &'a self,
        grid: &'a Grid,
        start: Point,
        goal: Point,
    ) -> Result<Search<'a, C, H, S>, SearchError>
    where
        C: Cost,
        S: StepCost<C>,
    {
        if !self.config.weight_is_valid() {
            return Err(SearchError::InvalidWeight(self.config.weight));
        }
        for point in [start, goal] {
            if !grid.is_open(&point)? {
                return Err(SearchError::Blocked { point });
            }
        }
        let mut search = Search {
            engine: self,
            grid,
            start,
            goal,
            costs: CostMap::rooted_at(start),
            frontier: Frontier::new(),
            state: SearchState::Running,
            rejected: None,
        };
        if start == goal {
            search.state = SearchState::Found;
        } else if self.config.prune_unreachable && !grid.connected(&start, &goal) {
            info!("{} and {} are on different components", start, goal);
            search.state = SearchState::Exhausted;
        } else {
            let priority = search.priority(C::zero(), &start);
            search.frontier.push(priority, C::zero(), 0);
        }
        Ok(search)
    }

    /// Runs a search from `start` to `goal` to termination and returns the cost map it built.
    pub fn search<C>(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<CostMap<C>, SearchError>
    where
        C: Cost,
        S: StepCost<C>,
    {
        self.begin(grid, start, goal)?.finish()
    }

    /// [search](Self::search) between the grid's own start and goal.
    pub fn search_grid<C>(&self, grid: &Grid) -> Result<CostMap<C>, SearchError>
    where
        C: Cost,
        S: StepCost<C>,
    {
        self.search(grid, grid.start(), grid.goal())
    }

    /// Searches from `start` to `goal` and follows the recorded predecessors back into a
    /// [Path].
    pub fn route<C>(&self, grid: &Grid, start: Point, goal: Point) -> Result<Path<C>, Error>
    where
        C: Cost,
        S: StepCost<C>,
    {
        let costs = self.search(grid, start, goal)?;
        Ok(PathReconstructor::default().reconstruct(grid, &costs, start, goal)?)
    }

    /// [route](Self::route) between the grid's own start and goal.
    pub fn find_path<C>(&self, grid: &Grid) -> Result<Path<C>, Error>
    where
        C: Cost,
        S: StepCost<C>,
    {
        self.route(grid, grid.start(), grid.goal())
    }
}

/// A single search in progress. Owns its cost map and frontier; the grid is only borrowed.
pub struct Search<'a, C, H, S> {
    engine: &'a SearchEngine<H, S>,
    grid: &'a Grid,
    start: Point,
    goal: Point,
    costs: CostMap<C>,
    frontier: Frontier<usize, C>,
    state: SearchState,
    rejected: Option<(Point, Point, C)>,
}

impl<'a, C, H, S> Search<'a, C, H, S>
where
    C: Cost,
    H: Heuristic,
    S: StepCost<C>,
{
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The cost map as built so far.
    pub fn costs(&self) -> &CostMap<C> {
        &self.costs
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn priority(&self, cost: C, point: &Point) -> f64 {
        let cost = cost.to_f64().unwrap_or(f64::INFINITY);
        let weight = self.engine.config.weight;
        if weight == 0.0 {
            cost
        } else {
            cost + weight * self.engine.heuristic.estimate(point, &self.goal)
        }
    }

    /// Pops one frontier entry and expands it unless it is stale. Does nothing once the search
    /// has terminated.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminated() {
            return self.state;
        }
        let Some(entry) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };
        let Some((node, _, cost)) = self.costs.get_index(entry.item) else {
            return self.state;
        };
        // The same point may have been queued several times if a cheaper way to reach it was
        // found later. Only the entry matching the recorded cost is expanded.
        if entry.cost > cost {
            return self.state;
        }
        if self.engine.config.goal_check == GoalCheck::OnExpansion && node == self.goal {
            self.state = SearchState::Found;
            return self.state;
        }
        if let Some(limit) = self.engine.config.max_expansions {
            if self.costs.expanded() >= limit {
                self.state = SearchState::LimitReached;
                return self.state;
            }
        }
        self.costs.record_expansion();

        for successor in self.grid.neighbors(&node) {
            let step = self.engine.step_cost.step_cost(&node, &successor);
            // Negative moves would let relaxation lower costs forever.
            if step < C::zero() {
                self.rejected = Some((node, successor, step));
                self.state = SearchState::Rejected;
                return self.state;
            }
            let new_cost = cost + step;
            let Some(index) = self.costs.relax(successor, new_cost, entry.item) else {
                continue;
            };
            if self.engine.config.goal_check == GoalCheck::OnDiscovery && successor == self.goal
            {
                self.state = SearchState::Found;
                return self.state;
            }
            let priority = self.priority(new_cost, &successor);
            self.frontier.push(priority, new_cost, index);
        }
        self.state
    }

    /// Steps until the search terminates.
    pub fn finish(mut self) -> Result<CostMap<C>, SearchError> {
        while !self.step().is_terminated() {}
        debug!(
            "Search {} -> {} finished as {:?}: {} expanded, {} recorded, {} queued",
            self.start,
            self.goal,
            self.state,
            self.costs.expanded(),
            self.costs.len(),
            self.frontier.pushed()
        );
        if let Some((from, to, step)) = self.rejected {
            warn!("Step cost {:?} from {} to {} is negative", step, from, to);
            return Err(SearchError::NegativeStepCost { from, to });
        }
        match self.state {
            SearchState::Found => Ok(self.costs),
            SearchState::LimitReached => {
                warn!(
                    "Search {} -> {} hit the expansion limit",
                    self.start, self.goal
                );
                Err(SearchError::ExpansionLimit {
                    expanded: self.costs.expanded(),
                })
            }
            SearchState::Exhausted | SearchState::Running | SearchState::Rejected => {
                info!("{} is not reachable from {}", self.goal, self.start);
                Err(SearchError::Unreachable {
                    start: self.start,
                    goal: self.goal,
                })
            }
        }
    }
}
