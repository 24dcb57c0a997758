//! Injectable cost functions. A [Heuristic] estimates the remaining distance to the goal and
//! feeds only the frontier priority; a [StepCost] prices a single move and accumulates into the
//! cost map. Plain functions and closures with the matching signature implement both traits.

use num_traits::One;

use crate::point::Point;

/// Estimated cost of reaching `goal` from `from`. Admissible estimates (never above the true
/// cost) keep extraction-time goal checks optimal.
pub trait Heuristic {
    fn estimate(&self, from: &Point, goal: &Point) -> f64;
}

/// Cost of moving between two adjacent cells.
pub trait StepCost<C> {
    fn step_cost(&self, from: &Point, to: &Point) -> C;
}

impl<F> Heuristic for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        self(from, goal)
    }
}

impl<C, F> StepCost<C> for F
where
    F: Fn(&Point, &Point) -> C,
{
    fn step_cost(&self, from: &Point, to: &Point) -> C {
        self(from, to)
    }
}

/// `|Δrow| + |Δcol|`. The reference heuristic for 4-connected grids, and as a step cost
/// equivalent to [UnitStep] between adjacent cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

/// Straight-line distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Always estimates zero, turning any search into uniform-cost search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHeuristic;

/// Every move costs one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitStep;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        from.manhattan_distance(goal) as f64
    }
}

impl Heuristic for Euclidean {
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        from.euclidean_distance(goal)
    }
}

impl Heuristic for NoHeuristic {
    fn estimate(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}

impl<C: One> StepCost<C> for UnitStep {
    fn step_cost(&self, _: &Point, _: &Point) -> C {
        C::one()
    }
}

macro_rules! distance_step_cost {
    ($metric:ty, $distance:ident, $($t:ty),*) => {
        $(
            impl StepCost<$t> for $metric {
                fn step_cost(&self, from: &Point, to: &Point) -> $t {
                    from.$distance(to) as $t
                }
            }
        )*
    };
}

distance_step_cost!(Manhattan, manhattan_distance, i32, i64, u32, u64, usize, f32, f64);
distance_step_cost!(Euclidean, euclidean_distance, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn doubled_manhattan(from: &Point, goal: &Point) -> f64 {
        2.0 * from.manhattan_distance(goal) as f64
    }

    #[test]
    fn reference_estimates() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(Manhattan.estimate(&a, &b), 7.0);
        assert_eq!(Euclidean.estimate(&a, &b), 5.0);
        assert_eq!(NoHeuristic.estimate(&a, &b), 0.0);
        assert_eq!(doubled_manhattan.estimate(&a, &b), 14.0);
    }

    #[test]
    fn step_costs_between_neighbours() {
        let a = Point::new(2, 2);
        let b = a.right();
        assert_eq!(StepCost::<i32>::step_cost(&UnitStep, &a, &b), 1);
        assert_eq!(StepCost::<f64>::step_cost(&UnitStep, &a, &b), 1.0);
        assert_eq!(StepCost::<u64>::step_cost(&Manhattan, &a, &b), 1);
        assert_eq!(StepCost::<f64>::step_cost(&Euclidean, &a, &b), 1.0);
        let weighted = |_: &Point, to: &Point| if to.row == 2 { 3 } else { 1 };
        assert_eq!(weighted.step_cost(&a, &b), 3);
    }
}
