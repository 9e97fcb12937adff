pub mod errors;
pub mod collections;
pub mod grid;
pub mod graph_algos;

pub use collections::{Entry, OrderedSequence};
pub use errors::{MapError, PathPlannerError, SequenceError};
pub use graph_algos::{PathResult, find_shortest_path, shortest_path};
pub use grid::{CityGrid, Direction, Mark};
pub use grid::city_map::{CellId, CellKind, CityMap};
