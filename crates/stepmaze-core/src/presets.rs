//! Ready-made mazes.

use crate::error::GridError;
use crate::geom::{Direction, Point};
use crate::grid::Grid;

/// Width of the [`showcase`] maze.
pub const SHOWCASE_WIDTH: i32 = 40;
/// Height of the [`showcase`] maze.
pub const SHOWCASE_HEIGHT: i32 = 32;
/// Start cell for searches on the [`showcase`] maze (top-right corner).
pub const SHOWCASE_START: Point = Point::new(SHOWCASE_WIDTH - 1, 0);
/// Goal cell for searches on the [`showcase`] maze, inside the walled pocket.
pub const SHOWCASE_GOAL: Point = Point::new(19, 15);

/// The 40×32 demonstration maze.
///
/// Two long horizontal barriers force a detour around opposite ends, and the
/// goal sits in a pocket closed on its upper and right sides.
pub fn showcase() -> Result<Grid, GridError> {
    let mut grid = Grid::new(SHOWCASE_WIDTH, SHOWCASE_HEIGHT)?;

    // Barrier above row 10, gap in the first column.
    for x in 1..SHOWCASE_WIDTH {
        grid.set_wall(Point::new(x, 10), Direction::Up, true);
    }
    // Barrier above row 13, gap in the last nine columns.
    for x in 0..SHOWCASE_HEIGHT - 1 {
        grid.set_wall(Point::new(x, 13), Direction::Up, true);
    }
    // Pocket around the goal.
    for x in 15..=19 {
        grid.set_wall(Point::new(x, 15), Direction::Up, true);
    }
    for y in 15..=19 {
        grid.set_wall(Point::new(19, y), Direction::Right, true);
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_dimensions_and_endpoints() {
        let g = showcase().unwrap();
        assert_eq!((g.width(), g.height()), (SHOWCASE_WIDTH, SHOWCASE_HEIGHT));
        assert!(g.contains(SHOWCASE_START));
        assert!(g.contains(SHOWCASE_GOAL));
    }

    #[test]
    fn showcase_barriers_leave_gaps() {
        let g = showcase().unwrap();
        assert!(!g.is_blocked(Point::new(0, 10), Direction::Up));
        assert!(g.is_blocked(Point::new(1, 10), Direction::Up));
        assert!(g.is_blocked(Point::new(30, 13), Direction::Up));
        assert!(!g.is_blocked(Point::new(31, 13), Direction::Up));
    }

    #[test]
    fn goal_pocket_is_walled_above_and_right() {
        let g = showcase().unwrap();
        let walls = g.edges_of(SHOWCASE_GOAL);
        assert!(walls.up);
        assert!(walls.right);
        assert!(!walls.left);
        assert!(!walls.down);
    }
}
