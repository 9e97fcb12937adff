use crate::collections::OrderedSequence;
use crate::grid::{CityGrid, Direction, Mark};

use std::fmt;
use num_traits::{One, Saturating, Zero};
use log::{debug, trace};


/// Outcome of a road search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathResult<D> {
    Found { length: D }, // number of cells on the path, start and destination included
    NotFound,
}

impl<D: Copy> PathResult<D> {

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn length(&self) -> Option<D> {
        match self {
            PathResult::Found { length } => Some(*length),
            PathResult::NotFound => None,
        }
    }
}

impl<D: fmt::Display> fmt::Display for PathResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found { length } => write!(f, "Path found containing {length} cells."),
            PathResult::NotFound => write!(f, "Path not found."),
        }
    }
}


/// Shortest path from the grid's start to the first destination reached
///
/// Uniform cost search: every step costs 1 and the frontier is an
/// `OrderedSequence` keyed by distance from the start. Distances, predecessors
/// and marks are written back into the grid, follow the predecessors from the
/// destination (see `shortest_path`) to recover the cells.
///
/// Every cell distance must be `Distance::max_value()` before the call.
pub fn find_shortest_path<G: CityGrid>(grid: &mut G) -> PathResult<G::Distance> {

    let start = grid.start();
    let mut frontier: OrderedSequence<G::Cell, G::Distance> = OrderedSequence::new();

    grid.set_distance_to_start(start, G::Distance::zero());
    frontier.insert(start, G::Distance::zero());
    grid.mark_in_list(start);

    debug!("road search started at {start:?}");

    let mut reached = None;

    // get_smallest only fails once the frontier is empty
    while let Ok(current) = frontier.get_smallest() {

        // stale duplicate of a settled cell
        if grid.mark(current) == Mark::OutList {
            continue;
        }
        grid.mark_out_list(current);

        if grid.is_destination(current) {
            reached = Some(current);
            break;
        }

        let next_distance = grid.distance_to_start(current).saturating_add(G::Distance::one());
        let next_cells: Vec<(Direction, G::Cell)> = eligible_neighbours(grid, current).collect();

        for (direction, next) in next_cells {

            // only a strictly shorter path replaces the predecessor
            if grid.distance_to_start(next) > next_distance {
                grid.set_distance_to_start(next, next_distance);
                grid.set_predecessor(next, current);
            }

            let distance = grid.distance_to_start(next);
            frontier.insert(next, distance);
            grid.mark_in_list(next);

            trace!("{current:?} -> {next:?} going {direction:?}, distance {distance:?}");
        }
    }

    match reached {
        Some(destination) => {
            let length = grid.distance_to_start(destination).saturating_add(G::Distance::one());
            debug!("road search reached {destination:?}, {length:?} cells");
            PathResult::Found { length }
        }
        None => {
            debug!("road search exhausted the frontier without reaching a destination");
            PathResult::NotFound
        }
    }
}


/// Unmarked neighbours of `cell` the search may step onto, in N, E, S, W order
///
/// From the start or an intersection: any neighbouring intersection or
/// destination, or a road running away from `cell`.
/// From a road: only the next cell in the road's own direction, and only if
/// it continues the road, is an intersection or is a destination.
pub fn eligible_neighbours<G: CityGrid>(grid: &G, cell: G::Cell) -> impl Iterator<Item = (Direction, G::Cell)> + '_ {
    Direction::ALL.into_iter().filter_map(move |direction| {
        let next = grid.neighbour(cell, direction)?;
        if grid.is_marked(next) {
            return None;
        }

        let junction_or_goal = grid.is_intersection(next) || grid.is_destination(next);

        let from_junction = (grid.is_start(cell) || grid.is_intersection(cell))
            && (junction_or_goal || grid.is_road(next, direction));
        let along_road = grid.is_road(cell, direction)
            && (junction_or_goal || grid.is_road(next, direction));

        (from_junction || along_road).then_some((direction, next))
    })
}
