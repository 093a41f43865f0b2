//! Step-driven A* search over walled grids.
//!
//! This crate drives a search one expansion at a time so that every
//! intermediate state can be inspected:
//!
//! - [`Pathfinder`] owns the per-cell distances and the open queue, and
//!   advances with [`Pathfinder::step`]
//! - [`NodeColor`] classifies each cell as unvisited, open or closed
//! - [`OpenHeap`] is the slot-tracking binary min-heap behind the open queue
//! - [`Neighbors`] lists the cells reachable through a cell's open edges
//!
//! The heuristic is the [`manhattan`] distance to the goal, which is exact
//! enough to guarantee that a closed cell's distance is the true shortest
//! distance on a unit-cost four-way grid.
//!
//! ```
//! use stepmaze_core::{Grid, Point};
//! use stepmaze_paths::{NodeColor, Pathfinder};
//!
//! let grid = Grid::new(3, 1).unwrap();
//! let mut pf = Pathfinder::new(&grid, Point::new(0, 0), Point::new(2, 0)).unwrap();
//! pf.step();
//! assert_eq!(pf.cell_color(Point::new(1, 0)), NodeColor::Open);
//! ```

mod distance;
mod error;
mod heap;
mod neighbors;
mod pathfinder;

pub use distance::manhattan;
pub use error::PathError;
pub use heap::OpenHeap;
pub use neighbors::Neighbors;
pub use pathfinder::{NodeColor, Pathfinder};
