//! Shortest paths on 4-connected 2D grids with obstacles and weighted edges.
//!
//! Three searches share one grid model: `bfs` (fewest steps, weights
//! ignored), `dijkstra` (cheapest path) and `astar` (cheapest path, guided by
//! a heuristic). Each returns a `SearchResult` holding the predecessor map and
//! total cost, from which a `Path` can be reconstructed.

mod astar;
mod bfs;
mod config;
mod dijkstra;
mod error;
mod frontier;
mod grid;
mod metadata;
mod path;
mod predecessor;
mod search;

pub use crate::astar::*;
pub use crate::bfs::*;
pub use crate::config::*;
pub use crate::dijkstra::*;
pub use crate::error::*;
pub use crate::grid::*;
pub use crate::metadata::*;
pub use crate::path::*;
pub use crate::predecessor::*;
pub use crate::search::SearchContext;

pub use direction::CardinalDirection;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
