use crate::path::{self, Path};
use crate::predecessor::PredecessorMap;
use grid_2d::Coord;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetadata {
    /// Cells taken off the frontier and expanded, the goal included.
    pub num_nodes_visited: usize,
    pub elapsed: Duration,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct SearchResult<Cost> {
    pub(crate) start: Coord,
    pub(crate) goal: Coord,
    pub(crate) predecessors: PredecessorMap,
    pub(crate) visit_order: Option<Vec<Coord>>,
    pub(crate) total_cost: Option<Cost>,
    pub(crate) metadata: SearchMetadata,
}

impl<Cost: Copy> SearchResult<Cost> {
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Only recorded when `SearchConfig::record_visit_order` is set.
    pub fn visit_order(&self) -> Option<&[Coord]> {
        self.visit_order.as_ref().map(Vec::as_slice)
    }

    /// Cost of the cheapest path, or `None` if the goal is unreachable.
    pub fn total_cost(&self) -> Option<Cost> {
        self.total_cost
    }

    pub fn is_reachable(&self) -> bool {
        self.total_cost.is_some()
    }

    pub fn metadata(&self) -> SearchMetadata {
        self.metadata
    }

    pub fn path(&self) -> Option<Path> {
        if !self.is_reachable() {
            return None;
        }
        path::reconstruct(&self.predecessors, self.start, self.goal)
    }
}
