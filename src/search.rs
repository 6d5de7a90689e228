use crate::config::*;
use crate::error::*;
use crate::frontier::PriorityEntry;
use crate::grid::*;
use crate::metadata::*;
use crate::predecessor::PredecessorMap;
use grid_2d::{Coord, Grid, Size};
use num_traits::Zero;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Rejects a query before any traversal. A goal on an obstacle is not an
/// error; such a search simply never reaches it.
pub(crate) fn validate<G: SolidGrid>(grid: &G, start: Coord, goal: Coord) -> Result<(), Error> {
    let start_solid = grid.is_solid(start).ok_or(Error::StartOutsideGrid(start))?;
    if grid.is_solid(goal).is_none() {
        return Err(Error::GoalOutsideGrid(goal));
    }
    if start_solid {
        return Err(Error::StartSolid(start));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct SearchNode<Cost> {
    seen: u64,
    coord: Coord,
    cost: Cost,
}

impl<Cost: Zero> SearchNode<Cost> {
    fn new(coord: Coord) -> Self {
        Self {
            seen: 0,
            coord,
            cost: Zero::zero(),
        }
    }
}

/// Scratch state for Dijkstra and A* searches. A context can be reused for
/// any number of searches but serves one search at a time; results are
/// returned by value and do not borrow from it.
#[derive(Debug, Clone)]
pub struct SearchContext<Cost: PartialOrd<Cost>> {
    seq: u64,
    priority_queue: BinaryHeap<PriorityEntry<Cost>>,
    node_grid: Grid<SearchNode<Cost>>,
}

impl<Cost: EdgeCost> SearchContext<Cost> {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            priority_queue: BinaryHeap::new(),
            node_grid: Grid::new_fn(size, SearchNode::new),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    fn prepare(&mut self, size: Size) {
        if self.node_grid.size() != size {
            *self = Self::new(size);
        }
        self.seq += 1;
        self.priority_queue.clear();
    }

    pub(crate) fn search_general<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        name: &'static str,
    ) -> Result<SearchResult<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
        H: Fn(Coord, Coord) -> Cost,
    {
        let timer = Instant::now();
        validate(grid, start, goal)?;
        self.prepare(grid.size());

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

        {
            let node = self.node_grid.get_index_checked_mut(start_index);
            node.seen = self.seq;
            node.cost = Zero::zero();
        }
        predecessors.set_origin(start_index);

        let mut push_seq = 0;
        self.priority_queue.push(PriorityEntry::new(
            start_index,
            heuristic_fn(start, goal),
            Zero::zero(),
            push_seq,
        ));

        let mut num_nodes_visited = 0;
        let mut total_cost = None;

        while let Some(current_entry) = self.priority_queue.pop() {
            let current = *self.node_grid.get_index_checked(current_entry.index);

            // superseded by a cheaper push of the same cell
            if current_entry.cost > current.cost {
                log::trace!("{}: skipping stale entry for {:?}", name, current.coord);
                continue;
            }

            num_nodes_visited += 1;
            if let Some(visit_order) = visit_order.as_mut() {
                visit_order.push(current.coord);
            }

            if current_entry.index == goal_index {
                total_cost = Some(current_entry.cost);
                break;
            }

            for &direction in NEIGHBOUR_ORDER.iter() {
                let edge_cost = match grid.cost(current.coord, direction) {
                    Some(edge_cost) => edge_cost,
                    None => continue,
                };
                let neighbour_coord = current.coord + direction.coord();
                let index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };

                // a cost that overflows is never an improvement
                let candidate = match current_entry.cost.checked_add_cost(edge_cost) {
                    Some(candidate) => candidate,
                    None => continue,
                };
                let node = self.node_grid.get_index_checked_mut(index);
                if node.seen != self.seq || candidate < node.cost {
                    node.seen = self.seq;
                    node.cost = candidate;
                    predecessors.set_parent(index, direction);

                    push_seq += 1;
                    let priority = candidate
                        .checked_add_cost(heuristic_fn(neighbour_coord, goal))
                        .unwrap_or(candidate);
                    self.priority_queue
                        .push(PriorityEntry::new(index, priority, candidate, push_seq));
                }
            }
        }

        let metadata = SearchMetadata {
            num_nodes_visited,
            elapsed: timer.elapsed(),
        };

        log::debug!(
            "{} {:?} -> {:?}: cost {:?}, {} cells visited in {:?}",
            name,
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
