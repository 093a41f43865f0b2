//! The [`CellWalls`] type — the blocked/open status of a cell's four edges.

use crate::geom::Direction;

/// Which of a cell's four edges block movement.
///
/// Boundary edges are always reported as blocked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellWalls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl CellWalls {
    /// Every edge blocked.
    pub const CLOSED: Self = Self {
        left: true,
        right: true,
        up: true,
        down: true,
    };

    /// Whether the edge in direction `dir` is blocked.
    #[inline]
    pub const fn is_blocked(self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Directions that can be crossed, in [`Direction::ALL`] order.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| !self.is_blocked(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_directions_keep_search_order() {
        let walls = CellWalls {
            left: false,
            right: true,
            up: false,
            down: false,
        };
        let dirs: Vec<_> = walls.open_directions().collect();
        assert_eq!(dirs, [Direction::Left, Direction::Up, Direction::Down]);
        assert!(walls.is_blocked(Direction::Right));
    }

    #[test]
    fn closed_has_no_exits() {
        assert_eq!(CellWalls::CLOSED.open_directions().count(), 0);
        assert!(Direction::ALL.iter().all(|&d| CellWalls::CLOSED.is_blocked(d)));
    }
}
