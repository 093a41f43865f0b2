use stepmaze_core::{Grid, Point};

use crate::distance::manhattan;
use crate::error::PathError;
use crate::heap::OpenHeap;
use crate::neighbors::Neighbors;

/// Search classification of a single cell.
///
/// The variants are ordered: a cell only ever moves forward through
/// `Unvisited`, `Open` and `Closed`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeColor {
    /// Never queued; no known distance.
    Unvisited,
    /// Queued with a tentative distance.
    Open,
    /// Popped from the queue; its distance is final.
    Closed,
}

/// Incremental A* search from a start cell towards a goal cell.
///
/// Each call to [`step`](Pathfinder::step) closes exactly one cell, so a
/// front-end can show the search unfold one expansion at a time. The search
/// keeps going after the goal closes until every reachable cell is closed.
///
/// The pathfinder borrows its grid, so walls cannot change while it lives.
#[derive(Debug, Clone)]
pub struct Pathfinder<'g> {
    grid: &'g Grid,
    start: Point,
    goal: Point,
    /// Best known distance from `start`, per coord.
    distances: Vec<Option<u32>>,
    open: OpenHeap,
    closed: usize,
}

impl<'g> Pathfinder<'g> {
    /// Prepare a search over `grid` with only `start` queued, at distance 0.
    pub fn new(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, PathError> {
        let start_coord = grid.coord(start).ok_or(PathError::StartOutOfBounds(start))?;
        if !grid.contains(goal) {
            return Err(PathError::GoalOutOfBounds(goal));
        }

        let cells = grid.len();
        let mut distances = Vec::new();
        distances
            .try_reserve_exact(cells)
            .map_err(|_| PathError::Allocation { cells })?;
        distances.resize(cells, None);
        let mut open = OpenHeap::with_capacity(cells)?;

        distances[start_coord] = Some(0);
        open.push(start_coord, weigher(grid, goal, &distances));

        log::debug!(
            "pathfinder: searching {}x{} grid from {start} to {goal}",
            grid.width(),
            grid.height()
        );
        Ok(Self {
            grid,
            start,
            goal,
            distances,
            open,
            closed: 0,
        })
    }

    /// Close the open cell with the lowest weight and relax its neighbors.
    ///
    /// Returns the closed cell, or `None` without touching any state once the
    /// search is exhausted.
    pub fn step(&mut self) -> Option<Point> {
        let grid = self.grid;
        let goal = self.goal;

        let coord = self.open.pop_min(weigher(grid, goal, &self.distances))?;
        self.closed += 1;
        let current = grid.point(coord);
        let Some(dist) = self.distances[coord] else {
            unreachable!("queued cell {current} without a distance");
        };
        // Distances never exceed the cell count, which fits in u32 for any
        // grid whose state could be allocated.
        let next_dist = dist.saturating_add(1);

        for n in Neighbors::of(grid, current) {
            let Some(nc) = grid.coord(n) else {
                continue;
            };
            let queued = self.open.contains(nc);
            match self.distances[nc] {
                // Closed: distance is final.
                Some(_) if !queued => continue,
                Some(d) if next_dist >= d => continue,
                _ => {}
            }
            self.distances[nc] = Some(next_dist);
            let weight = weigher(grid, goal, &self.distances);
            if queued {
                self.open.decrease(nc, weight);
            } else {
                self.open.push(nc, weight);
            }
        }

        log::trace!(
            "pathfinder: closed {current} at distance {dist}, {} open",
            self.open.len()
        );
        if current == goal {
            log::debug!("pathfinder: goal {goal} closed at distance {dist}");
        }
        if self.open.is_empty() {
            log::debug!(
                "pathfinder: exhausted after closing {} of {} cells",
                self.closed,
                grid.len()
            );
        }
        Some(current)
    }

    /// Step until the search is exhausted. Returns the number of cells closed
    /// by this call.
    pub fn run_to_end(&mut self) -> usize {
        let mut n = 0;
        while self.step().is_some() {
            n += 1;
        }
        n
    }

    /// Classification of cell `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn cell_color(&self, p: Point) -> NodeColor {
        let coord = self.coord_checked(p);
        if self.open.contains(coord) {
            return NodeColor::Open;
        }
        match self.distances[coord] {
            Some(_) => NodeColor::Closed,
            None => NodeColor::Unvisited,
        }
    }

    /// Best known distance from the start to `p`: tentative while `p` is
    /// open, final once closed, `None` while unvisited.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn distance(&self, p: Point) -> Option<u32> {
        self.distances[self.coord_checked(p)]
    }

    /// Whether no open cells remain.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    /// Whether the goal cell is closed.
    pub fn goal_reached(&self) -> bool {
        self.cell_color(self.goal) == NodeColor::Closed
    }

    /// Number of open cells.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of closed cells.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    fn coord_checked(&self, p: Point) -> usize {
        match self.grid.coord(p) {
            Some(c) => c,
            None => panic!(
                "cell {p} outside {}x{} grid",
                self.grid.width(),
                self.grid.height()
            ),
        }
    }
}

/// A* key of a queued coord: distance so far plus Manhattan distance to
/// `goal`.
fn weigher<'a>(
    grid: &'a Grid,
    goal: Point,
    distances: &'a [Option<u32>],
) -> impl Fn(usize) -> u32 + 'a {
    move |coord| match distances[coord] {
        Some(d) => d.saturating_add(manhattan(grid.point(coord), goal)),
        None => u32::MAX,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_color_round_trip() {
        for color in [NodeColor::Unvisited, NodeColor::Open, NodeColor::Closed] {
            let json = serde_json::to_string(&color).unwrap();
            let back: NodeColor = serde_json::from_str(&json).unwrap();
            assert_eq!(back, color);
        }
    }
}
