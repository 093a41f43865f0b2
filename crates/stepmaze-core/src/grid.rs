//! The [`Grid`] type — a W×H cell lattice with per-edge walls.
//!
//! Only interior edges are stored. Vertical edges separate a cell from its
//! right-hand neighbour, horizontal edges separate a cell from the one below
//! it. Edges on the lattice boundary have no storage and always block.
//!
//! The edge accessors take the stored edge's owning cell: the vertical edge
//! at `(x, y)` lies between `(x, y)` and `(x + 1, y)`, and the horizontal
//! edge at `(x, y)` lies between `(x, y)` and `(x, y + 1)`. Asking for an
//! edge that is not stored is a programming error and panics.

use std::fmt;

use crate::cell::CellWalls;
use crate::error::GridError;
use crate::geom::{Direction, Point, Range};

/// A rectangular lattice of cells whose shared edges can be walled off.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: i32,
    height: i32,
    /// `(width - 1) * height` flags, row-major.
    vertical: Vec<bool>,
    /// `width * (height - 1)` flags, row-major.
    horizontal: Vec<bool>,
}

impl Grid {
    /// Create a `width`×`height` grid with every interior edge open.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let alloc_err = GridError::Allocation { width, height };
        let w = width as usize;
        let h = height as usize;
        w.checked_mul(h).ok_or_else(|| alloc_err.clone())?;

        let vertical = open_edges((w - 1) * h).ok_or_else(|| alloc_err.clone())?;
        let horizontal = open_edges(w * (h - 1)).ok_or(alloc_err)?;

        log::debug!(
            "grid: allocated {width}x{height} with {} interior edges",
            vertical.len() + horizontal.len()
        );
        Ok(Self {
            width,
            height,
            vertical,
            horizontal,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covering every cell.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds().len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `p` is a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat row-major index of `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn coord(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`coord`](Grid::coord).
    #[inline]
    pub fn point(&self, coord: usize) -> Point {
        let w = self.width as usize;
        Point::new((coord % w) as i32, (coord / w) as i32)
    }

    #[inline]
    fn vertical_index(&self, p: Point) -> usize {
        assert!(
            p.x >= 0 && p.x < self.width - 1 && p.y >= 0 && p.y < self.height,
            "no stored vertical edge right of {p} in a {}x{} grid",
            self.width,
            self.height
        );
        p.y as usize * (self.width as usize - 1) + p.x as usize
    }

    #[inline]
    fn horizontal_index(&self, p: Point) -> usize {
        assert!(
            p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height - 1,
            "no stored horizontal edge below {p} in a {}x{} grid",
            self.width,
            self.height
        );
        p.y as usize * self.width as usize + p.x as usize
    }

    // -----------------------------------------------------------------------
    // Edge accessors
    // -----------------------------------------------------------------------

    /// The wall between `p` and its right-hand neighbour.
    ///
    /// # Panics
    ///
    /// If `p` is in the last column or outside the grid.
    pub fn vertical_edge(&mut self, p: Point) -> &mut bool {
        let i = self.vertical_index(p);
        &mut self.vertical[i]
    }

    /// The wall between `p` and the cell below it.
    ///
    /// # Panics
    ///
    /// If `p` is in the last row or outside the grid.
    pub fn horizontal_edge(&mut self, p: Point) -> &mut bool {
        let i = self.horizontal_index(p);
        &mut self.horizontal[i]
    }

    /// The wall between `p` and its left-hand neighbour.
    ///
    /// # Panics
    ///
    /// If `p` is in the first column or outside the grid.
    pub fn left_edge(&mut self, p: Point) -> &mut bool {
        assert!(p.x > 0, "no stored edge left of {p}: first column");
        self.vertical_edge(p.shift(-1, 0))
    }

    /// The wall between `p` and the cell above it.
    ///
    /// # Panics
    ///
    /// If `p` is in the first row or outside the grid.
    pub fn upper_edge(&mut self, p: Point) -> &mut bool {
        assert!(p.y > 0, "no stored edge above {p}: first row");
        self.horizontal_edge(p.shift(0, -1))
    }

    /// Read-only form of [`vertical_edge`](Grid::vertical_edge).
    pub fn vertical_wall(&self, p: Point) -> bool {
        self.vertical[self.vertical_index(p)]
    }

    /// Read-only form of [`horizontal_edge`](Grid::horizontal_edge).
    pub fn horizontal_wall(&self, p: Point) -> bool {
        self.horizontal[self.horizontal_index(p)]
    }

    /// Block or open the edge of `p` facing `dir`.
    ///
    /// # Panics
    ///
    /// If that edge lies on the boundary.
    pub fn set_wall(&mut self, p: Point, dir: Direction, blocked: bool) {
        assert!(
            self.contains(p) && self.contains(p.step(dir)),
            "edge {dir} of {p} lies on the boundary of a {}x{} grid",
            self.width,
            self.height
        );
        let edge = match dir {
            Direction::Left => self.left_edge(p),
            Direction::Right => self.vertical_edge(p),
            Direction::Up => self.upper_edge(p),
            Direction::Down => self.horizontal_edge(p),
        };
        *edge = blocked;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Blocked/open status of all four edges of `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn edges_of(&self, p: Point) -> CellWalls {
        assert!(
            self.contains(p),
            "cell {p} outside {}x{} grid",
            self.width,
            self.height
        );
        // Boundary checks come first: boundary edges have no storage.
        CellWalls {
            left: p.x == 0 || self.vertical[self.vertical_index(p.shift(-1, 0))],
            right: p.x == self.width - 1 || self.vertical[self.vertical_index(p)],
            up: p.y == 0 || self.horizontal[self.horizontal_index(p.shift(0, -1))],
            down: p.y == self.height - 1 || self.horizontal[self.horizontal_index(p)],
        }
    }

    /// Whether the edge of `p` facing `dir` blocks movement.
    #[inline]
    pub fn is_blocked(&self, p: Point, dir: Direction) -> bool {
        self.edges_of(p).is_blocked(dir)
    }
}

/// A vector of `len` open edge flags, or `None` if it cannot be reserved.
fn open_edges(len: usize) -> Option<Vec<bool>> {
    let mut edges = Vec::new();
    edges.try_reserve_exact(len).ok()?;
    edges.resize(len, false);
    Some(edges)
}

impl fmt::Display for Grid {
    /// ASCII drawing: `|` and `-` for blocked edges, `+` at corners.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: String = "-+".repeat(self.width as usize);
        writeln!(f, "+{top}")?;
        for y in 0..self.height {
            f.write_str("|")?;
            for x in 0..self.width {
                let walls = self.edges_of(Point::new(x, y));
                f.write_str(if walls.right { " |" } else { "  " })?;
            }
            f.write_str("\n+")?;
            for x in 0..self.width {
                let walls = self.edges_of(Point::new(x, y));
                f.write_str(if walls.down { "-+" } else { " +" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

/// Unvalidated wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let mut grid = Grid::new(raw.width, raw.height)?;
        if raw.vertical.len() != grid.vertical.len() {
            return Err(GridError::InconsistentWalls {
                expected: grid.vertical.len(),
                found: raw.vertical.len(),
                axis: "vertical",
            });
        }
        if raw.horizontal.len() != grid.horizontal.len() {
            return Err(GridError::InconsistentWalls {
                expected: grid.horizontal.len(),
                found: raw.horizontal.len(),
                axis: "horizontal",
            });
        }
        grid.vertical = raw.vertical;
        grid.horizontal = raw.horizontal;
        Ok(grid)
    }
}
