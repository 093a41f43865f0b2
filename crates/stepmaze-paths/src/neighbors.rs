use stepmaze_core::{Grid, Point};

/// The cells reachable from one cell through open edges.
///
/// Neighbors are listed left, right, up, down, skipping blocked edges. The
/// value is self-contained, so each call owns its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    buf: [Point; 4],
    len: usize,
}

impl Neighbors {
    /// Open-edge neighbors of `p` in `grid`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn of(grid: &Grid, p: Point) -> Self {
        let mut n = Self {
            buf: [Point::ZERO; 4],
            len: 0,
        };
        for dir in grid.edges_of(p).open_directions() {
            n.buf[n.len] = p.step(dir);
            n.len += 1;
        }
        n
    }

    /// The neighbors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.buf[..self.len]
    }

    /// Number of open neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether every edge is blocked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterator over the neighbors.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.as_slice().iter()
    }
}

impl IntoIterator for Neighbors {
    type Item = Point;
    type IntoIter = std::iter::Take<std::array::IntoIter<Point, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter().take(self.len)
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepmaze_core::Direction;

    #[test]
    fn interior_cell_lists_left_right_up_down() {
        let g = Grid::new(3, 3).unwrap();
        let n = Neighbors::of(&g, Point::new(1, 1));
        assert_eq!(
            n.as_slice(),
            [
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn corner_skips_boundary() {
        let g = Grid::new(3, 3).unwrap();
        let n = Neighbors::of(&g, Point::new(2, 0));
        assert_eq!(n.as_slice(), [Point::new(1, 0), Point::new(2, 1)]);
    }

    #[test]
    fn walls_are_skipped() {
        let mut g = Grid::new(3, 3).unwrap();
        let c = Point::new(1, 1);
        g.set_wall(c, Direction::Left, true);
        g.set_wall(c, Direction::Down, true);
        let n = Neighbors::of(&g, c);
        assert_eq!(n.len(), 2);
        assert_eq!(n.into_iter().collect::<Vec<_>>(), [Point::new(2, 1), Point::new(1, 0)]);
    }

    #[test]
    fn enclosed_cell_has_no_neighbors() {
        let g = Grid::new(1, 1).unwrap();
        assert!(Neighbors::of(&g, Point::ZERO).is_empty());
    }

    #[test]
    fn results_are_independent() {
        let g = Grid::new(4, 4).unwrap();
        let a = Neighbors::of(&g, Point::new(0, 0));
        let b = Neighbors::of(&g, Point::new(3, 3));
        assert_eq!(a.as_slice(), [Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(b.as_slice(), [Point::new(2, 3), Point::new(3, 2)]);
    }
}
