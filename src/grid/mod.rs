//! Logical maze grid structs and utilities.

use crate::error::PageError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Enum for direction values.
///
/// The discriminants give the canonical neighbor order used everywhere in the crate.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// -x
    Left = 0,
    /// -y
    Up = 1,
    /// +x
    Right = 2,
    /// +y
    Down = 3,
}

impl Direction {
    /// All directions, in canonical order
    pub fn get_all() -> [Self; 4] {
        [Self::Left, Self::Up, Self::Right, Self::Down]
    }
}

/// A rectangular, 4-connected lattice of cells with one wall bit per shared edge.
///
/// Cells are plain ids, `id = x + y * width`. Each cell owns the slot for the edge to its
/// right (`2 * id + 1`) and the edge below it (`2 * id`), so shared edges are stored once.
///
/// # Examples
///
/// ```
/// use printable_pages::grid::MazeGrid;
///
/// let mut grid = MazeGrid::new(3, 2).unwrap();
/// grid.set_all_walls(true);
/// grid.set_wall(4, 1, false).unwrap();
///
/// assert_eq!(grid.is_wall(1, 4), Ok(false));
/// assert_eq!(grid.neighbors(4), vec![3, 1, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct MazeGrid {
    width: usize,
    height: usize,
    edges: Vec<bool>,
}

/// Unchecked serialized form of a [`MazeGrid`]
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    edges: Vec<bool>,
}

impl TryFrom<RawGrid> for MazeGrid {
    type Error = PageError;

    fn try_from(raw: RawGrid) -> Result<Self, PageError> {
        let slots = MazeGrid::slot_count(raw.width, raw.height)?;
        if raw.edges.len() != slots {
            return Err(PageError::InvalidParameter(format!(
                "a {}x{} grid has {slots} edge slots, got {}",
                raw.width,
                raw.height,
                raw.edges.len()
            )));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            edges: raw.edges,
        })
    }
}

impl MazeGrid {
    /// Create a grid; the edge state is unspecified until [`MazeGrid::set_all_walls`] is called
    pub fn new(width: usize, height: usize) -> Result<Self, PageError> {
        Ok(Self {
            width,
            height,
            edges: vec![false; Self::slot_count(width, height)?],
        })
    }

    /// Two edge slots per cell; both dimensions must be at least 1
    fn slot_count(width: usize, height: usize) -> Result<usize, PageError> {
        if width < 1 || height < 1 {
            return Err(PageError::InvalidDimension { width, height });
        }
        width
            .checked_mul(height)
            .and_then(|cells| cells.checked_mul(2))
            .ok_or(PageError::InvalidDimension { width, height })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The raw edge slots, including slots with no lattice edge behind them
    pub fn edges(&self) -> &[bool] {
        &self.edges
    }

    /// Column and row of a cell
    ///
    /// ```
    /// use printable_pages::grid::MazeGrid;
    ///
    /// let grid = MazeGrid::new(3, 2).unwrap();
    /// assert_eq!(grid.cell_to_xy(4), (1, 1));
    /// ```
    pub fn cell_to_xy(&self, id: usize) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Cell id at a column and row, or `None` if out of bounds
    pub fn xy_to_cell(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            None
        } else {
            Some(x + y * self.width)
        }
    }

    /// Returns the cell in the given direction from the given cell, or `None` if that would
    /// leave the grid.
    ///
    /// ```
    /// use printable_pages::grid::{Direction, MazeGrid};
    ///
    /// let grid = MazeGrid::new(3, 2).unwrap();
    /// assert_eq!(grid.next(0, Direction::Right), Some(1));
    /// assert_eq!(grid.next(0, Direction::Down), Some(3));
    /// assert_eq!(grid.next(0, Direction::Left), None);
    /// assert_eq!(grid.next(5, Direction::Down), None);
    /// ```
    pub fn next(&self, id: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.cell_to_xy(id);
        if y >= self.height {
            return None;
        }
        match direction {
            Direction::Left => x.checked_sub(1).map(|x| x + y * self.width),
            Direction::Up => y.checked_sub(1).map(|y| x + y * self.width),
            Direction::Right => self.xy_to_cell(x + 1, y),
            Direction::Down => self.xy_to_cell(x, y + 1),
        }
    }

    /// Returns all neighbors of a cell in left, up, right, down order
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        Direction::get_all()
            .into_iter()
            .filter_map(|direction| self.next(id, direction))
            .collect()
    }

    /// Whether `a` and `b` share an edge
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.wall_address(a, b).is_some()
    }

    /// Slot index of the edge between two cells, in either order
    fn wall_address(&self, a: usize, b: usize) -> Option<usize> {
        let (small, large) = if a < b { (a, b) } else { (b, a) };
        if large >= self.cell_count() {
            return None;
        }
        // vertical first: with a single column, vertical neighbors also differ by one
        if large - small == self.width {
            Some(2 * small)
        } else if large - small == 1 && small % self.width != self.width - 1 {
            Some(2 * small + 1)
        } else {
            None
        }
    }

    /// Whether there is a wall between two adjacent cells
    pub fn is_wall(&self, a: usize, b: usize) -> Result<bool, PageError> {
        let addr = self
            .wall_address(a, b)
            .ok_or(PageError::NotAdjacent { a, b })?;
        Ok(self.edges[addr])
    }

    /// Place or remove the wall between two adjacent cells
    pub fn set_wall(&mut self, a: usize, b: usize, is_wall: bool) -> Result<(), PageError> {
        let addr = self
            .wall_address(a, b)
            .ok_or(PageError::NotAdjacent { a, b })?;
        self.edges[addr] = is_wall;
        Ok(())
    }

    /// Overwrite every edge slot
    pub fn set_all_walls(&mut self, is_wall: bool) {
        self.edges.fill(is_wall);
    }

    /// Every lattice edge exactly once, as `(smaller, larger)` pairs.
    ///
    /// Cells are visited in id order; for each cell the edge to its right comes before
    /// the edge below it.
    ///
    /// ```
    /// use printable_pages::grid::MazeGrid;
    ///
    /// let grid = MazeGrid::new(2, 2).unwrap();
    /// let boundaries: Vec<_> = grid.boundaries().collect();
    /// assert_eq!(boundaries, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    /// ```
    pub fn boundaries(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cell_count()).flat_map(move |id| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter_map(move |direction| self.next(id, direction).map(|other| (id, other)))
        })
    }

    /// Edges that are still walls
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.boundaries()
            .filter(|&(a, b)| self.wall_address(a, b).is_some_and(|addr| self.edges[addr]))
    }

    /// Number of lattice edges that are open
    pub fn passage_count(&self) -> usize {
        self.boundaries().count() - self.walls().count()
    }
}
