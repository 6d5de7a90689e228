use crate::error::*;
use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
use num_traits::{CheckedAdd, NumCast, One, Zero};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::Add;

/// Order in which neighbours of a cell are considered by every search.
/// Changing it changes which of several equal-cost paths is returned.
pub static NEIGHBOUR_ORDER: [CardinalDirection; 4] = [
    CardinalDirection::North,
    CardinalDirection::East,
    CardinalDirection::South,
    CardinalDirection::West,
];

pub trait EdgeCost:
    Copy + Debug + Add<Self, Output = Self> + PartialOrd<Self> + Zero + One + NumCast
{
    /// Sum of two costs, or `None` if it cannot be represented.
    fn checked_add_cost(self, other: Self) -> Option<Self>;
}

macro_rules! impl_edge_cost_integer {
    ($($t:ty)*) => {
        $(
            impl EdgeCost for $t {
                fn checked_add_cost(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_edge_cost_float {
    ($($t:ty)*) => {
        $(
            impl EdgeCost for $t {
                fn checked_add_cost(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_edge_cost_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
impl_edge_cost_float!(f32 f64);

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

pub trait CostGrid: SolidGrid {
    type Cost: EdgeCost;

    /// Weight of the edge leaving `coord` in `direction`. `None` if either
    /// endpoint is outside the grid or solid.
    fn cost(&self, coord: Coord, direction: CardinalDirection) -> Option<Self::Cost>;

    fn neighbours(&self, coord: Coord) -> Neighbours<'_, Self>
    where
        Self: Sized,
    {
        Neighbours {
            grid: self,
            coord,
            directions: NEIGHBOUR_ORDER.iter(),
        }
    }
}

/// Traversable neighbours of a cell paired with the connecting edge weight,
/// in `NEIGHBOUR_ORDER`.
pub struct Neighbours<'a, G> {
    grid: &'a G,
    coord: Coord,
    directions: std::slice::Iter<'static, CardinalDirection>,
}

impl<'a, G: CostGrid> Iterator for Neighbours<'a, G> {
    type Item = (Coord, G::Cost);
    fn next(&mut self) -> Option<Self::Item> {
        for &direction in &mut self.directions {
            if let Some(cost) = self.grid.cost(self.coord, direction) {
                return Some((self.coord + direction.coord(), cost));
            }
        }
        None
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
struct LatticeCell<Cost> {
    solid: bool,
    east: Option<Cost>,
    south: Option<Cost>,
}

impl<Cost> LatticeCell<Cost> {
    fn new() -> Self {
        Self {
            solid: false,
            east: None,
            south: None,
        }
    }
}

/// Rectangular 4-connected lattice. Each undirected edge is stored once, on
/// its northern or western endpoint; edges without an override weigh one.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct LatticeGrid<Cost> {
    grid: Grid<LatticeCell<Cost>>,
}

fn checked_size(width: u32, height: u32) -> Result<Size, Error> {
    let max = i32::MAX as u32;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(Size::new(width, height))
}

impl<Cost: EdgeCost> LatticeGrid<Cost> {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let size = checked_size(width, height)?;
        Ok(Self {
            grid: Grid::new_fn(size, |_| LatticeCell::new()),
        })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.grid.get(coord).is_some()
    }

    pub fn is_obstacle(&self, coord: Coord) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.solid)
    }

    /// Removes the given cells, and with them all their incident edges, from
    /// the traversable graph. Cells outside the grid and repeated cells are
    /// ignored, so applying the same set twice is the same as applying it once.
    pub fn remove_obstacles<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in cells {
            if let Some(cell) = self.grid.get_mut(coord) {
                cell.solid = true;
            }
        }
    }

    /// Sets the weight of every edge incident to any of the given cells.
    /// Where an edge already carries an override, the larger weight is kept,
    /// so overlapping regions give the same grid in any application order.
    pub fn apply_cost_region<I>(&mut self, cells: I, weight: Cost) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        self.set_region(cells, weight, |current| match current {
            Some(current) if current >= weight => current,
            _ => weight,
        })
    }

    /// Like `apply_cost_region`, but the most recently applied weight always
    /// replaces any existing override.
    pub fn overwrite_cost_region<I>(&mut self, cells: I, weight: Cost) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        self.set_region(cells, weight, |_| weight)
    }

    fn set_region<I, F>(&mut self, cells: I, weight: Cost, resolve: F) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
        F: Fn(Option<Cost>) -> Cost,
    {
        // manhattan distance stays admissible only while no edge is cheaper than one
        if !(weight >= One::one()) {
            return Err(Error::WeightBelowOne);
        }
        for coord in cells {
            if !self.contains(coord) {
                continue;
            }
            for &direction in NEIGHBOUR_ORDER.iter() {
                if let Some(slot) = self.edge_slot_mut(coord, direction) {
                    *slot = Some(resolve(*slot));
                }
            }
        }
        Ok(())
    }

    fn edge_owner(&self, coord: Coord, direction: CardinalDirection) -> Option<(Coord, bool)> {
        let neighbour = coord + direction.coord();
        if !self.contains(coord) || !self.contains(neighbour) {
            return None;
        }
        Some(match direction {
            CardinalDirection::East => (coord, true),
            CardinalDirection::South => (coord, false),
            CardinalDirection::West => (neighbour, true),
            CardinalDirection::North => (neighbour, false),
        })
    }

    fn edge_slot_mut(&mut self, coord: Coord, direction: CardinalDirection) -> Option<&mut Option<Cost>> {
        let (owner, east) = self.edge_owner(coord, direction)?;
        let cell = self.grid.get_mut(owner)?;
        Some(if east { &mut cell.east } else { &mut cell.south })
    }

    /// Weight of the edge between two adjacent traversable cells.
    pub fn edge_cost(&self, a: Coord, b: Coord) -> Option<Cost> {
        let delta = b - a;
        let direction = NEIGHBOUR_ORDER
            .iter()
            .cloned()
            .find(|direction| direction.coord() == delta)?;
        self.cost(a, direction)
    }
}

impl<Cost: EdgeCost> SolidGrid for LatticeGrid<Cost> {
    fn size(&self) -> Size {
        self.grid.size()
    }

    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.grid.get(coord).map(|cell| cell.solid)
    }
}

impl<Cost: EdgeCost> CostGrid for LatticeGrid<Cost> {
    type Cost = Cost;

    fn cost(&self, coord: Coord, direction: CardinalDirection) -> Option<Cost> {
        let neighbour = coord + direction.coord();
        if self.is_solid_or_outside(coord) || self.is_solid_or_outside(neighbour) {
            return None;
        }
        let (owner, east) = self.edge_owner(coord, direction)?;
        let cell = self.grid.get(owner)?;
        let weight = if east { cell.east } else { cell.south };
        Some(weight.unwrap_or_else(One::one))
    }
}
