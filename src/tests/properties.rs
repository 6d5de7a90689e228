use super::*;
use crate::astar::*;
use crate::bfs::*;
use crate::dijkstra::*;
use crate::metadata::SearchResult;
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

const NUM_SEEDS: u64 = 64;
const WIDTH: u32 = 14;
const HEIGHT: u32 = 11;

fn random_coord<R: Rng>(rng: &mut R) -> Coord {
    Coord::new(
        rng.gen_range(0..WIDTH as i32),
        rng.gen_range(0..HEIGHT as i32),
    )
}

fn random_open_coord<R: Rng>(grid: &LatticeGrid<u32>, rng: &mut R) -> Coord {
    loop {
        let coord = random_coord(rng);
        if !grid.is_obstacle(coord) {
            return coord;
        }
    }
}

fn random_grid<R: Rng>(rng: &mut R, weighted: bool) -> LatticeGrid<u32> {
    let mut grid = LatticeGrid::new(WIDTH, HEIGHT).unwrap();
    let num_obstacles = rng.gen_range(0..(WIDTH * HEIGHT / 3) as usize);
    let obstacles: Vec<Coord> = (0..num_obstacles).map(|_| random_coord(rng)).collect();
    grid.remove_obstacles(obstacles);
    if weighted {
        for _ in 0..rng.gen_range(1..6) {
            let region: Vec<Coord> = (0..rng.gen_range(1..20))
                .map(|_| random_coord(rng))
                .collect();
            grid.apply_cost_region(region, rng.gen_range(1..9)).unwrap();
        }
    }
    grid
}

fn assert_valid_path<C: Copy>(grid: &LatticeGrid<u32>, result: &SearchResult<C>) -> Option<u32> {
    let path = result.path()?;
    assert_eq!(path.start(), Some(result.start()));
    assert_eq!(path.goal(), Some(result.goal()));
    let edges = path.edges();
    assert_eq!(edges.len(), path.len() - 1);
    let mut cost = 0;
    for (a, b) in edges {
        cost += grid.edge_cost(a, b).expect("consecutive cells must be adjacent");
    }
    Some(cost)
}

#[test]
fn astar_matches_dijkstra() {
    for seed in 0..NUM_SEEDS {
        let mut rng = IsaacRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, true);
        let start = random_open_coord(&grid, &mut rng);
        let goal = random_coord(&mut rng);

        let dijkstra_result = dijkstra(&grid, start, goal, Default::default()).unwrap();
        let astar_result = astar_manhattan(&grid, start, goal, Default::default()).unwrap();

        assert_eq!(
            astar_result.total_cost(),
            dijkstra_result.total_cost(),
            "seed {}",
            seed
        );
        assert!(
            astar_result.metadata().num_nodes_visited
                <= dijkstra_result.metadata().num_nodes_visited,
            "seed {}",
            seed
        );
        assert_eq!(
            assert_valid_path(&grid, &dijkstra_result),
            dijkstra_result.total_cost()
        );
        assert_eq!(
            assert_valid_path(&grid, &astar_result),
            astar_result.total_cost()
        );
    }
}

#[test]
fn bfs_matches_dijkstra_on_uniform_grids() {
    for seed in 0..NUM_SEEDS {
        let mut rng = IsaacRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, false);
        let start = random_open_coord(&grid, &mut rng);
        let goal = random_open_coord(&grid, &mut rng);

        let bfs_result = bfs(&grid, start, goal, Default::default()).unwrap();
        let dijkstra_result = dijkstra(&grid, start, goal, Default::default()).unwrap();

        assert_eq!(
            bfs_result.total_cost().map(|cost| cost as u32),
            dijkstra_result.total_cost(),
            "seed {}",
            seed
        );
        assert_eq!(
            bfs_result.path().map(|path| path.len()),
            dijkstra_result.path().map(|path| path.len())
        );
        assert_eq!(
            assert_valid_path(&grid, &bfs_result),
            dijkstra_result.total_cost()
        );
    }
}

#[test]
fn reachability_agrees() {
    for seed in 0..NUM_SEEDS {
        let mut rng = IsaacRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, true);
        let start = random_open_coord(&grid, &mut rng);
        let goal = random_coord(&mut rng);

        let bfs_result = bfs(&grid, start, goal, Default::default()).unwrap();
        let dijkstra_result = dijkstra(&grid, start, goal, Default::default()).unwrap();
        let astar_result = astar_manhattan(&grid, start, goal, Default::default()).unwrap();

        assert_eq!(bfs_result.is_reachable(), dijkstra_result.is_reachable());
        assert_eq!(astar_result.is_reachable(), dijkstra_result.is_reachable());
        if grid.is_obstacle(goal) {
            assert!(!dijkstra_result.is_reachable());
        }
        if let (Some(steps), Some(cost)) = (bfs_result.total_cost(), dijkstra_result.total_cost()) {
            // weights are at least one, so the cheapest path has at least as many steps as the shortest
            assert!(steps as u32 <= cost);
        }
    }
}

#[test]
fn same_query_same_path() {
    let mut rng = IsaacRng::seed_from_u64(0);
    let grid = random_grid(&mut rng, true);
    let start = random_open_coord(&grid, &mut rng);
    let goal = random_open_coord(&grid, &mut rng);
    let first = dijkstra(&grid, start, goal, Default::default()).unwrap();
    let second = dijkstra(&grid, start, goal, Default::default()).unwrap();
    assert_eq!(first.path(), second.path());
    assert_eq!(
        first.metadata().num_nodes_visited,
        second.metadata().num_nodes_visited
    );
}
