//! Printable maze pages.
//!
//! [`carve`](carve::carve) turns a [`MazeGrid`] into a perfect maze,
//! [`project`](geometry::project) turns its walls into stroke-corrected segments, and
//! [`MazeSettings`] lays the result out on a page.

use crate::constants::{MAZE_STROKE_RATIO, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH};
use crate::error::PageError;
use crate::grid::MazeGrid;
use crate::page::PageGenerator;
use crate::svg::{Element, SvgDocument};
use geometry::MazeDrawing;
use log::debug;
use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod carve;
pub mod geometry;

/// Options for a maze page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    /// Rows of cells; the width is whatever fits on the page
    pub height: usize,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self { height: 25 }
    }
}

/// Where a maze of a given height goes on a page
#[derive(Clone, Debug, PartialEq)]
pub struct MazeLayout {
    /// Columns of cells
    pub width_in_cells: usize,
    /// Rows of cells
    pub height_in_cells: usize,
    /// Side of one square cell
    pub cell_size: f64,
    /// Wall thickness
    pub stroke_width: f64,
    /// Translation that centres the maze on the page
    pub offset: Vector2<f64>,
}

impl MazeLayout {
    /// Fit `height_in_cells` rows of whole-unit cells inside the margins, then fill the
    /// available width with as many columns as fit.
    ///
    /// ```
    /// use printable_pages::maze::MazeLayout;
    ///
    /// let layout = MazeLayout::for_page(25, 612.0, 792.0, 54.0).unwrap();
    /// assert_eq!(layout.cell_size, 27.0);
    /// assert_eq!(layout.width_in_cells, 18);
    /// assert_eq!(layout.offset.x, 63.0);
    /// ```
    pub fn for_page(
        height_in_cells: usize,
        page_width: f64,
        page_height: f64,
        margin: f64,
    ) -> Result<Self, PageError> {
        let invalid = PageError::InvalidDimension {
            width: 0,
            height: height_in_cells,
        };
        if height_in_cells < 1 {
            return Err(invalid);
        }

        let available_width = page_width - 2.0 * margin;
        let available_height = page_height - 2.0 * margin;
        let cell_size = (available_height / height_in_cells as f64).floor();
        if cell_size < 1.0 {
            return Err(invalid);
        }
        let width_in_cells = (available_width / cell_size).floor().max(0.0) as usize;
        if width_in_cells < 1 {
            return Err(PageError::InvalidDimension {
                width: width_in_cells,
                height: height_in_cells,
            });
        }

        let maze_width = width_in_cells as f64 * cell_size;
        let maze_height = height_in_cells as f64 * cell_size;
        Ok(Self {
            width_in_cells,
            height_in_cells,
            cell_size,
            stroke_width: cell_size * MAZE_STROKE_RATIO,
            offset: Vector2::new(
                (page_width - maze_width) / 2.0,
                (page_height - maze_height) / 2.0,
            ),
        })
    }
}

/// Carve a new maze and project it.
///
/// # Examples
///
/// ```
/// use printable_pages::maze::generate_maze;
/// use rand::rngs::mock::StepRng;
///
/// let drawing = generate_maze(3, 2, 10.0, 2.0, &mut StepRng::new(0, 0)).unwrap();
/// assert_eq!(drawing.width, 30.0);
/// assert_eq!(drawing.height, 20.0);
/// assert_eq!(drawing.segments.len(), 6);
/// ```
pub fn generate_maze<R: Rng + ?Sized>(
    width_in_cells: usize,
    height_in_cells: usize,
    cell_size: f64,
    stroke_width: f64,
    rng: &mut R,
) -> Result<MazeDrawing, PageError> {
    // checked before anything is allocated
    let mut grid = MazeGrid::new(width_in_cells, height_in_cells)?;
    if cell_size.is_nan() || cell_size <= 0.0 {
        return Err(PageError::InvalidParameter(format!(
            "cell size must be positive, got {cell_size}"
        )));
    }
    if stroke_width.is_nan() || stroke_width <= 0.0 {
        return Err(PageError::InvalidParameter(format!(
            "stroke width must be positive, got {stroke_width}"
        )));
    }

    carve::carve(&mut grid, rng)?;
    Ok(geometry::project(&grid, cell_size, stroke_width))
}

impl PageGenerator for MazeSettings {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SvgDocument, PageError> {
        let layout = MazeLayout::for_page(self.height, PAGE_WIDTH, PAGE_HEIGHT, PAGE_MARGIN)?;
        debug!(
            "Maze layout {}x{} cells of {}",
            layout.width_in_cells, layout.height_in_cells, layout.cell_size
        );
        let drawing = generate_maze(
            layout.width_in_cells,
            layout.height_in_cells,
            layout.cell_size,
            layout.stroke_width,
            rng,
        )?;

        let mut page = SvgDocument::new(PAGE_WIDTH, PAGE_HEIGHT);
        page.push(Element::Group {
            translate: layout.offset,
            children: vec![Element::Path {
                d: drawing.path_data(),
                stroke_width: drawing.stroke_width,
                line_cap: Some("butt"),
                line_join: None,
            }],
        });
        Ok(page)
    }
}
