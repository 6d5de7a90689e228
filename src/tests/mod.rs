mod properties;

use crate::grid::*;
use grid_2d::{Coord, Size};

pub(crate) const REGION_WEIGHT: u32 = 10;

/// `.` open, `,` open with incident edges weighing `REGION_WEIGHT`, `#`
/// obstacle, `s` start, `g` goal, `B` start and goal, `G` goal on an
/// obstacle, `S` start on an obstacle.
pub(crate) fn grid_from_strings(strings: &[&str]) -> (LatticeGrid<u32>, Coord, Coord) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let mut grid = LatticeGrid::new(width, height).unwrap();
    let mut obstacles = Vec::new();
    let mut region = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            match ch {
                '.' => (),
                ',' => region.push(coord),
                '#' => obstacles.push(coord),
                's' => start = Some(coord),
                'g' => goal = Some(coord),
                'B' => {
                    goal = Some(coord);
                    start = Some(coord);
                }
                'G' => {
                    goal = Some(coord);
                    obstacles.push(coord);
                }
                'S' => {
                    start = Some(coord);
                    obstacles.push(coord);
                }
                _ => panic!("unexpected character {:?}", ch),
            }
        }
    }
    grid.remove_obstacles(obstacles);
    grid.apply_cost_region(region, REGION_WEIGHT).unwrap();

    (grid, start.unwrap(), goal.unwrap())
}

pub(crate) fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}
