use std::fmt;

/// Errors that can occur when constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was less than one.
    EmptyDimensions { width: i32, height: i32 },
    /// Wall storage for the requested size could not be obtained.
    Allocation { width: i32, height: i32 },
    /// Deserialized wall storage does not match the declared dimensions.
    InconsistentWalls {
        expected: usize,
        found: usize,
        axis: &'static str,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions { width, height } => {
                write!(f, "grid: dimensions must be positive, got {width}x{height}")
            }
            Self::Allocation { width, height } => {
                write!(f, "grid: cannot allocate wall storage for {width}x{height}")
            }
            Self::InconsistentWalls {
                expected,
                found,
                axis,
            } => write!(
                f,
                "grid: expected {expected} {axis} edge flags, found {found}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
