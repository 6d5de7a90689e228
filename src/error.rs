use grid_2d::Coord;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid dimensions must be positive and fit in i32, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("start {0:?} is outside the grid")]
    StartOutsideGrid(Coord),
    #[error("goal {0:?} is outside the grid")]
    GoalOutsideGrid(Coord),
    #[error("start {0:?} is an obstacle")]
    StartSolid(Coord),
    #[error("edge weights must be at least one")]
    WeightBelowOne,
}
