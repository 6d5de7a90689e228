use crate::error::*;
use crate::grid::*;
use grid_2d::Coord;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Record the order in which cells are expanded.
    pub record_visit_order: bool,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CostRegion<Cost> {
    pub cells: Vec<Coord>,
    pub weight: Cost,
}

/// Declarative description of a grid: dimensions, obstacles, and cost regions
/// applied in order.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridDescription<Cost> {
    pub width: u32,
    pub height: u32,
    pub obstacles: Vec<Coord>,
    pub cost_regions: Vec<CostRegion<Cost>>,
}

impl<Cost: EdgeCost> GridDescription<Cost> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
            cost_regions: Vec::new(),
        }
    }

    pub fn build(&self) -> Result<LatticeGrid<Cost>, Error> {
        let mut grid = LatticeGrid::new(self.width, self.height)?;
        grid.remove_obstacles(self.obstacles.iter().cloned());
        for region in &self.cost_regions {
            grid.apply_cost_region(region.cells.iter().cloned(), region.weight)?;
        }
        Ok(grid)
    }
}
