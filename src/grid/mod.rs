pub mod city_map;

use std::fmt::Debug;
use num_traits::PrimInt;


/// Compass direction between neighbouring cells
/// Neighbours are always visited in North, East, South, West order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {

    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// (dx, dy) step, y grows southward
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}


/// Search state of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unmarked,
    InList, // waiting in the frontier
    OutList, // settled, distance is final
}


/// Grid the road search runs on
///
/// Cells are small copyable handles; all per-cell search state (distance,
/// predecessor, mark) lives in the grid and is updated in place by the search.
/// Distances start at `Distance::max_value()`, which stands for "not reached".
pub trait CityGrid {
    type Cell: Copy + Eq + Debug;
    type Distance: PrimInt + Debug;

    fn start(&self) -> Self::Cell;

    /// Adjacent cell in `direction`, None when there is nothing there
    fn neighbour(&self, cell: Self::Cell, direction: Direction) -> Option<Self::Cell>;

    fn is_start(&self, cell: Self::Cell) -> bool;
    fn is_destination(&self, cell: Self::Cell) -> bool;
    fn is_intersection(&self, cell: Self::Cell) -> bool;

    /// One-way road segment running in `direction`
    fn is_road(&self, cell: Self::Cell, direction: Direction) -> bool;

    fn is_north_road(&self, cell: Self::Cell) -> bool {
        self.is_road(cell, Direction::North)
    }

    fn is_east_road(&self, cell: Self::Cell) -> bool {
        self.is_road(cell, Direction::East)
    }

    fn is_south_road(&self, cell: Self::Cell) -> bool {
        self.is_road(cell, Direction::South)
    }

    fn is_west_road(&self, cell: Self::Cell) -> bool {
        self.is_road(cell, Direction::West)
    }

    fn distance_to_start(&self, cell: Self::Cell) -> Self::Distance;
    fn set_distance_to_start(&mut self, cell: Self::Cell, distance: Self::Distance);

    fn predecessor(&self, cell: Self::Cell) -> Option<Self::Cell>;
    fn set_predecessor(&mut self, cell: Self::Cell, predecessor: Self::Cell);

    fn mark(&self, cell: Self::Cell) -> Mark;
    fn mark_in_list(&mut self, cell: Self::Cell);
    fn mark_out_list(&mut self, cell: Self::Cell);

    /// True while in the frontier and once settled
    fn is_marked(&self, cell: Self::Cell) -> bool {
        self.mark(cell) != Mark::Unmarked
    }
}
