use std::fmt;

use stepmaze_core::Point;

/// Errors that can occur when constructing a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start cell is not part of the grid.
    StartOutOfBounds(Point),
    /// The goal cell is not part of the grid.
    GoalOutOfBounds(Point),
    /// Search state for `cells` cells could not be allocated.
    Allocation { cells: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "pathfinder: start {p} is outside the grid"),
            Self::GoalOutOfBounds(p) => write!(f, "pathfinder: goal {p} is outside the grid"),
            Self::Allocation { cells } => {
                write!(f, "pathfinder: cannot allocate search state for {cells} cells")
            }
        }
    }
}

impl std::error::Error for PathError {}
