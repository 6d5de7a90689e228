use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::Zero;

impl<Cost: EdgeCost> SearchContext<Cost> {
    pub fn dijkstra<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchResult<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        self.search_general(grid, start, goal, |_, _| Zero::zero(), config, "dijkstra")
    }
}

/// Cheapest path from `start` to `goal` using a context that lives for this
/// call only.
pub fn dijkstra<G: CostGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<SearchResult<G::Cost>, Error> {
    SearchContext::new(grid.size()).dijkstra(grid, start, goal, config)
}
