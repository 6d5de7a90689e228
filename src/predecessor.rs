use direction::CardinalDirection;
use grid_2d::{Coord, Grid, Size};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Origin,
    FromParent(CardinalDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredecessorEntry {
    Origin,
    Unvisited,
    Outside,
    Parent(Coord),
}

impl PredecessorEntry {
    pub fn parent(self) -> Option<Coord> {
        match self {
            PredecessorEntry::Parent(coord) => Some(coord),
            _ => None,
        }
    }
    pub fn is_origin(self) -> bool {
        self == PredecessorEntry::Origin
    }
    pub fn is_visited(self) -> bool {
        match self {
            PredecessorEntry::Origin | PredecessorEntry::Parent(_) => true,
            _ => false,
        }
    }
}

/// For every cell reached by a search, the direction travelled to enter it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    grid: Grid<Option<Step>>,
    len: usize,
}

impl PredecessorMap {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            grid: Grid::new_clone(size, None),
            len: 0,
        }
    }

    pub(crate) fn set_origin(&mut self, index: usize) {
        self.set(index, Step::Origin);
    }

    pub(crate) fn set_parent(&mut self, index: usize, from_parent: CardinalDirection) {
        self.set(index, Step::FromParent(from_parent));
    }

    fn set(&mut self, index: usize, step: Step) {
        let slot = self.grid.get_index_checked_mut(index);
        if slot.is_none() {
            self.len += 1;
        }
        *slot = Some(step);
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    /// Number of cells with an entry, the origin included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, coord: Coord) -> PredecessorEntry {
        match self.grid.get(coord) {
            None => PredecessorEntry::Outside,
            Some(None) => PredecessorEntry::Unvisited,
            Some(Some(Step::Origin)) => PredecessorEntry::Origin,
            Some(Some(Step::FromParent(direction))) => {
                PredecessorEntry::Parent(coord - direction.coord())
            }
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).is_visited()
    }

    pub fn parent(&self, coord: Coord) -> Option<Coord> {
        self.get(coord).parent()
    }

    pub fn direction_from_parent(&self, coord: Coord) -> Option<CardinalDirection> {
        match self.grid.get(coord) {
            Some(Some(Step::FromParent(direction))) => Some(*direction),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, PredecessorEntry)> + '_ {
        self.grid
            .coord_iter()
            .map(move |coord| (coord, self.get(coord)))
            .filter(|(_, entry)| entry.is_visited())
    }
}
