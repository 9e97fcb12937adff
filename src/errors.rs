use std::fmt;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    NotFound, // No entry with the requested identifier
    EmptyContainer, // Extract on an empty sequence
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPlannerError {
    NoPathFound, // Unable to find a path to the goal
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    MissingStart, // Map has no start cell
    DuplicateStart, // More than one start cell
    DuplicateCell((i32, i32)), // Two cells at the same position
}


impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::NotFound => write!(f, "no data item with the given id"),
            SequenceError::EmptyContainer => write!(f, "empty list, cannot get smallest"),
        }
    }
}

impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::MissingStart => write!(f, "map has no start cell"),
            MapError::DuplicateStart => write!(f, "map has more than one start cell"),
            MapError::DuplicateCell((x, y)) => write!(f, "duplicate cell at ({x}, {y})"),
        }
    }
}

impl std::error::Error for SequenceError {}
impl std::error::Error for PathPlannerError {}
impl std::error::Error for MapError {}
