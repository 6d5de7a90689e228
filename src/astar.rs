use crate::config::*;
use crate::error::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use num_traits::{NumCast, Zero};

pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl<Cost: EdgeCost> SearchContext<Cost> {
    /// A* with a caller-supplied heuristic. The result is optimal provided the
    /// heuristic never overestimates the remaining cost to `goal`.
    pub fn astar<G, H>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
    ) -> Result<SearchResult<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
        H: Fn(Coord, Coord) -> Cost,
    {
        self.search_general(grid, start, goal, heuristic_fn, config, "astar")
    }

    /// Admissible on any 4-connected grid whose edges all weigh at least one.
    pub fn astar_manhattan_distance_heuristic<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchResult<Cost>, Error>
    where
        G: CostGrid<Cost = Cost>,
    {
        // falling back to zero keeps the heuristic admissible
        let heuristic_fn =
            |a, b| NumCast::from(manhattan_distance(a, b)).unwrap_or_else(Zero::zero);
        self.astar(grid, start, goal, heuristic_fn, config)
    }
}

pub fn astar<G, H>(
    grid: &G,
    start: Coord,
    goal: Coord,
    heuristic_fn: H,
    config: SearchConfig,
) -> Result<SearchResult<G::Cost>, Error>
where
    G: CostGrid,
    H: Fn(Coord, Coord) -> G::Cost,
{
    SearchContext::new(grid.size()).astar(grid, start, goal, heuristic_fn, config)
}

pub fn astar_manhattan<G: CostGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<SearchResult<G::Cost>, Error> {
    SearchContext::new(grid.size()).astar_manhattan_distance_heuristic(grid, start, goal, config)
}
