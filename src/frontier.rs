use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An item queued for expansion.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<T, C> {
    pub priority: f64,
    pub cost: C,
    pub item: T,
    seq: u64,
}

impl<T, C: PartialOrd> PartialEq for FrontierEntry<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: PartialOrd> Eq for FrontierEntry<T, C> {}

impl<T, C: PartialOrd> PartialOrd for FrontierEntry<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: PartialOrd> Ord for FrontierEntry<T, C> {
    /// [BinaryHeap] is a max-heap, so "greater" means "popped first". Orders per priority
    /// (smallest first), then per cost (largest first, favouring entries that are deeper into
    /// the search), then per insertion (oldest first).
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| {
                self.cost
                    .partial_cmp(&other.cost)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of open items. Duplicates of the same item are allowed; the search is
/// responsible for discarding stale entries when they are popped.
///
/// Ties are broken deterministically: equal priorities pop the higher-cost entry first, and
/// entries equal in both pop in insertion order.
#[derive(Clone, Debug)]
pub struct Frontier<T, C> {
    heap: BinaryHeap<FrontierEntry<T, C>>,
    pushed: u64,
}

impl<T, C: PartialOrd> Default for Frontier<T, C> {
    fn default() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<T, C: PartialOrd> Frontier<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(&mut self, priority: f64, cost: C, item: T) {
        self.heap.push(FrontierEntry {
            priority,
            cost,
            item,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<FrontierEntry<T, C>> {
        self.heap.pop()
    }

    pub fn peek(&self) -> Option<&FrontierEntry<T, C>> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes, including entries that have since been popped.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.pushed = 0;
    }
}
