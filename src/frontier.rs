use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub(crate) struct QueueEntry {
    pub(crate) index: usize,
    pub(crate) depth: usize,
}

impl QueueEntry {
    pub(crate) fn new(index: usize, depth: usize) -> Self {
        Self { index, depth }
    }
}

/// Entry in the Dijkstra/A* priority queue. `priority` orders the queue and
/// `cost` is the true cost from the start at the time of the push; the two
/// differ only when a heuristic is in use.
#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry<Cost: PartialOrd<Cost>> {
    pub(crate) index: usize,
    pub(crate) priority: Cost,
    pub(crate) cost: Cost,
    pub(crate) seq: u64,
}

impl<Cost: PartialOrd<Cost>> PriorityEntry<Cost> {
    pub(crate) fn new(index: usize, priority: Cost, cost: Cost, seq: u64) -> Self {
        Self {
            index,
            priority,
            cost,
            seq,
        }
    }
}

impl<Cost: PartialOrd<Cost>> PartialEq for PriorityEntry<Cost> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Cost: PartialOrd<Cost>> PartialOrd for PriorityEntry<Cost> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Cost: PartialOrd<Cost>> Eq for PriorityEntry<Cost> {}

// reversed so that BinaryHeap pops the lowest priority, then the earliest push
impl<Cost: PartialOrd<Cost>> Ord for PriorityEntry<Cost> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
