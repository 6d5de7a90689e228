use crate::config::*;
use crate::error::*;
use crate::frontier::QueueEntry;
use crate::grid::*;
use crate::metadata::*;
use crate::predecessor::PredecessorMap;
use crate::search::validate;
use grid_2d::{Coord, Grid, Size};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct BfsNode {
    seen: u64,
    coord: Coord,
}

impl BfsNode {
    fn new(coord: Coord) -> Self {
        Self { seen: 0, coord }
    }
}

#[derive(Debug, Clone)]
pub struct BfsContext {
    seq: u64,
    queue: VecDeque<QueueEntry>,
    node_grid: Grid<BfsNode>,
}

impl BfsContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, BfsNode::new),
            queue: VecDeque::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    /// Fewest-steps path from `start` to `goal`. Edge weights are ignored;
    /// the total cost is the number of edges on the path.
    pub fn bfs<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchResult<usize>, Error>
    where
        G: SolidGrid,
    {
        let timer = Instant::now();
        validate(grid, start, goal)?;

        if self.node_grid.size() != grid.size() {
            *self = Self::new(grid.size());
        }
        self.seq += 1;
        self.queue.clear();

        let start_index = self
            .node_grid
            .index_of_coord(start)
            .ok_or(Error::StartOutsideGrid(start))?;
        let goal_index = self
            .node_grid
            .index_of_coord(goal)
            .ok_or(Error::GoalOutsideGrid(goal))?;

        let mut predecessors = PredecessorMap::new(grid.size());
        let mut visit_order = if config.record_visit_order {
            Some(Vec::new())
        } else {
            None
        };

        self.node_grid.get_index_checked_mut(start_index).seen = self.seq;
        predecessors.set_origin(start_index);
        self.queue.push_back(QueueEntry::new(start_index, 0));

        let mut num_nodes_visited = 0;
        let mut total_cost = None;

        while let Some(current_entry) = self.queue.pop_front() {
            num_nodes_visited += 1;
            let current_coord = self.node_grid.get_index_checked(current_entry.index).coord;
            if let Some(visit_order) = visit_order.as_mut() {
                visit_order.push(current_coord);
            }

            if current_entry.index == goal_index {
                total_cost = Some(current_entry.depth);
                break;
            }

            let next_depth = current_entry.depth + 1;

            for &direction in NEIGHBOUR_ORDER.iter() {
                let neighbour_coord = current_coord + direction.coord();
                if grid.is_solid_or_outside(neighbour_coord) {
                    continue;
                }
                let index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };

                // marked when queued, so each cell is queued at most once
                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq {
                    node.seen = self.seq;
                    predecessors.set_parent(index, direction);
                    self.queue.push_back(QueueEntry::new(index, next_depth));
                }
            }
        }

        let metadata = SearchMetadata {
            num_nodes_visited,
            elapsed: timer.elapsed(),
        };

        log::debug!(
            "bfs {:?} -> {:?}: cost {:?}, {} cells visited in {:?}",
            start,
            goal,
            total_cost,
            num_nodes_visited,
            metadata.elapsed,
        );

        Ok(SearchResult {
            start,
            goal,
            predecessors,
            visit_order,
            total_cost,
            metadata,
        })
    }
}

pub fn bfs<G: SolidGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<SearchResult<usize>, Error> {
    BfsContext::new(grid.size()).bfs(grid, start, goal, config)
}
