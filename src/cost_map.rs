use core::fmt::Debug;
use core::ops::Sub;

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::{One, ToPrimitive, Zero};

use crate::point::Point;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Index value marking "no predecessor" (the start point, or a cost set from outside a search).
const NO_PARENT: usize = usize::MAX;

/// Numeric type a search accumulates movement costs in. Implemented for all primitive integer
/// and floating point types.
pub trait Cost: Copy + PartialOrd + Debug + Zero + One + Sub<Output = Self> + ToPrimitive {}

impl<T> Cost for T where T: Copy + PartialOrd + Debug + Zero + One + Sub<Output = T> + ToPrimitive {}

/// Best known cost-to-reach per point, together with the point it was reached from.
///
/// Entries are kept in discovery order; predecessors are stored as indices into that order so a
/// backward walk never has to hash.
#[derive(Clone, Debug)]
pub struct CostMap<C> {
    entries: FxIndexMap<Point, (usize, C)>,
    expanded: usize,
}

impl<C> Default for CostMap<C> {
    fn default() -> Self {
        CostMap {
            entries: FxIndexMap::default(),
            expanded: 0,
        }
    }
}

impl<C: Cost> CostMap<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CostMap {
            entries: FxIndexMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
            expanded: 0,
        }
    }

    /// A map holding only `start` at cost zero.
    pub fn rooted_at(start: Point) -> Self {
        let mut costs = Self::new();
        costs.set(start, C::zero());
        costs
    }

    pub fn get(&self, point: &Point) -> Option<C> {
        self.entries.get(point).map(|&(_, cost)| cost)
    }

    /// Overwrites the cost of `point`. An existing predecessor link is kept.
    pub fn set(&mut self, point: Point, cost: C) {
        match self.entries.entry(point) {
            Vacant(e) => {
                e.insert((NO_PARENT, cost));
            }
            Occupied(mut e) => {
                e.get_mut().1 = cost;
            }
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.entries.contains_key(point)
    }

    /// The point `point` was last relaxed from, [None] for the start or unknown points.
    pub fn predecessor(&self, point: &Point) -> Option<Point> {
        let &(parent, _) = self.entries.get(point)?;
        self.entries.get_index(parent).map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of points the search expanded while building this map.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// All recorded points and costs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, C)> + '_ {
        self.entries.iter().map(|(p, &(_, cost))| (*p, cost))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.entries.keys().copied()
    }

    /// Records `cost` for `point` if it is new or strictly cheaper than the recorded cost.
    /// Returns the point's index when the entry changed.
    pub(crate) fn relax(&mut self, point: Point, cost: C, parent: usize) -> Option<usize> {
        match self.entries.entry(point) {
            Vacant(e) => {
                let ix = e.index();
                e.insert((parent, cost));
                Some(ix)
            }
            Occupied(mut e) => {
                if cost < e.get().1 {
                    *e.get_mut() = (parent, cost);
                    Some(e.index())
                } else {
                    None
                }
            }
        }
    }

    /// Point, predecessor index and cost stored at `index`.
    pub(crate) fn get_index(&self, index: usize) -> Option<(Point, usize, C)> {
        self.entries
            .get_index(index)
            .map(|(p, &(parent, cost))| (*p, parent, cost))
    }

    pub(crate) fn record_expansion(&mut self) {
        self.expanded += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_and_keeps_predecessor() {
        let a = Point::new(0, 0);
        let b = Point::new(0, 1);
        let mut costs: CostMap<i32> = CostMap::rooted_at(a);
        assert_eq!(costs.relax(b, 3, 0), Some(1));
        assert_eq!(costs.predecessor(&b), Some(a));
        costs.set(b, 7);
        assert_eq!(costs.get(&b), Some(7));
        assert_eq!(costs.predecessor(&b), Some(a));
        assert_eq!(costs.predecessor(&a), None);
    }

    #[test]
    fn relax_only_lowers_costs() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let mut costs: CostMap<f64> = CostMap::rooted_at(a);
        assert!(costs.relax(b, 2.5, 0).is_some());
        assert!(costs.relax(b, 2.5, 0).is_none());
        assert!(costs.relax(b, 3.0, 0).is_none());
        assert!(costs.relax(b, 1.5, 0).is_some());
        assert_eq!(costs.get(&b), Some(1.5));
        assert_eq!(costs.len(), 2);
    }

    #[test]
    fn iteration_follows_discovery_order() {
        let mut costs: CostMap<u32> = CostMap::new();
        assert!(costs.is_empty());
        costs.set(Point::new(2, 2), 0);
        costs.set(Point::new(0, 0), 4);
        costs.set(Point::new(1, 1), 2);
        assert_eq!(
            costs.points().collect::<Vec<_>>(),
            vec![Point::new(2, 2), Point::new(0, 0), Point::new(1, 1)]
        );
        assert!(costs.contains(&Point::new(1, 1)));
        assert!(!costs.contains(&Point::new(1, 2)));
        assert_eq!(costs.get(&Point::new(1, 2)), None);
    }
}
