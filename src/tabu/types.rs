//! Move identifiers and the tabu list.

use std::collections::{HashMap, VecDeque};

/// Exchange of the cities at two tour positions.
///
/// Stored normalised (`i < j`), so `swap(3, 7)` and `swap(7, 3)` are the
/// same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapMove {
    pub i: usize,
    pub j: usize,
}

impl SwapMove {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        }
    }
}

/// Bounded FIFO of recently applied moves.
///
/// The same move may be pushed more than once (aspiration and the
/// all-tabu fallback can pick a tabu move); it stays tabu until its last
/// occurrence is evicted.
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<SwapMove>,
    counts: HashMap<SwapMove, usize>,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::new(),
            counts: HashMap::new(),
        }
    }

    pub fn contains(&self, mv: &SwapMove) -> bool {
        self.counts.contains_key(mv)
    }

    /// Appends `mv`, evicting the oldest entry once over capacity.
    pub fn push(&mut self, mv: SwapMove) {
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;

        if self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                if let Some(count) = self.counts.get_mut(&old) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&old);
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &SwapMove> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_move_normalised() {
        assert_eq!(SwapMove::new(7, 3), SwapMove::new(3, 7));
        assert_eq!(SwapMove::new(7, 3), SwapMove { i: 3, j: 7 });
    }

    #[test]
    fn test_fifo_eviction() {
        let mut list = TabuList::new(2);
        list.push(SwapMove::new(0, 1));
        list.push(SwapMove::new(1, 2));
        list.push(SwapMove::new(2, 3));

        assert_eq!(list.len(), 2);
        assert!(!list.contains(&SwapMove::new(0, 1)));
        assert!(list.contains(&SwapMove::new(1, 2)));
        assert!(list.contains(&SwapMove::new(2, 3)));
        let order: Vec<_> = list.iter().copied().collect();
        assert_eq!(order, vec![SwapMove::new(1, 2), SwapMove::new(2, 3)]);
    }

    #[test]
    fn test_duplicate_stays_tabu_until_last_copy_evicted() {
        let mut list = TabuList::new(2);
        let mv = SwapMove::new(0, 1);
        list.push(mv);
        list.push(mv);
        list.push(SwapMove::new(2, 3));
        // First copy evicted, second still present.
        assert!(list.contains(&mv));
        list.push(SwapMove::new(4, 5));
        assert!(!list.contains(&mv));
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut list = TabuList::new(usize::MAX);
        for k in 0..100 {
            list.push(SwapMove::new(k, k + 1));
        }
        assert_eq!(list.len(), 100);
        assert!(list.contains(&SwapMove::new(0, 1)));
    }

    #[test]
    fn test_empty() {
        let list = TabuList::new(3);
        assert!(list.is_empty());
        assert!(!list.contains(&SwapMove::new(0, 1)));
    }
}
