use crate::predecessor::*;
use direction::CardinalDirection;
use grid_2d::Coord;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Cells from start to goal inclusive.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of edges travelled.
    pub fn num_steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().cloned()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.cells.last().cloned()
    }

    pub fn edges(&self) -> Vec<(Coord, Coord)> {
        self.cells.windows(2).map(|pair| (pair[0], pair[1])).collect()
    }

    pub fn directions(&self) -> Vec<CardinalDirection> {
        self.cells
            .windows(2)
            .filter_map(|pair| direction_between(pair[0], pair[1]))
            .collect()
    }
}

fn direction_between(from: Coord, to: Coord) -> Option<CardinalDirection> {
    let delta = to - from;
    match (delta.x, delta.y) {
        (0, -1) => Some(CardinalDirection::North),
        (1, 0) => Some(CardinalDirection::East),
        (0, 1) => Some(CardinalDirection::South),
        (-1, 0) => Some(CardinalDirection::West),
        _ => None,
    }
}

/// Walks back from `goal` to `start` through the predecessor map. Returns
/// `None` if the goal was never reached, or if the chain of parents does not
/// lead back to `start`.
pub fn reconstruct(predecessors: &PredecessorMap, start: Coord, goal: Coord) -> Option<Path> {
    let size = predecessors.size();
    let max_len = size.width() as usize * size.height() as usize;

    let mut cells = vec![goal];
    let mut current = goal;
    loop {
        match predecessors.get(current) {
            PredecessorEntry::Origin if current == start => break,
            PredecessorEntry::Parent(parent) if cells.len() < max_len => {
                cells.push(parent);
                current = parent;
            }
            _ => return None,
        }
    }

    cells.reverse();
    Some(Path { cells })
}
