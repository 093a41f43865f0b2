//! **stepmaze-core** — walled grid lattices for step-driven maze search.
//!
//! This crate provides the types shared across the *stepmaze* workspace:
//! geometry primitives, the [`Grid`] with per-edge wall storage, the
//! [`CellWalls`] view used by searches, and a few ready-made mazes.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod presets;

pub use cell::CellWalls;
pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::Grid;
