use crate::errors::PathPlannerError;
use crate::grid::CityGrid;

use num_traits::{Bounded, ToPrimitive};


/// Construct the path from the start cell to `destination`
/// Follows the predecessor links left behind by `find_shortest_path`
/// Returns the ordered cells, start first, destination last
pub fn shortest_path<G: CityGrid>(grid: &G, destination: G::Cell) -> Result<Vec<G::Cell>, PathPlannerError> {

    let distance = grid.distance_to_start(destination);
    if distance == G::Distance::max_value() {
        return Err(PathPlannerError::NoPathFound);
    }

    // a path never holds more cells than distance + 1
    let max_cells = distance.to_usize().map_or(usize::MAX, |d| d.saturating_add(1));

    let mut path = vec![destination];
    let mut current = destination;

    // Trace back from destination to start
    while !grid.is_start(current) {
        let Some(previous) = grid.predecessor(current) else {
            return Err(PathPlannerError::NoPathFound);
        };
        path.push(previous);
        if path.len() > max_cells {
            return Err(PathPlannerError::NoPathFound);
        }
        current = previous;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
