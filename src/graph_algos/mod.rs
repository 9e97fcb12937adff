mod path_finder;
mod shortest_path;

pub use path_finder::{PathResult, eligible_neighbours, find_shortest_path};
pub use shortest_path::shortest_path;
