//! Projection of a carved [`MazeGrid`] into page-space line segments

use crate::error::PageError;
use crate::grid::MazeGrid;
use crate::svg::{PathData, Segment};

/// Line segments for a maze, in maze-local coordinates with the top left corner at the origin
#[derive(Clone, Debug, PartialEq)]
pub struct MazeDrawing {
    /// Outer boundary (left, bottom, top, right) followed by the internal walls
    pub segments: Vec<Segment>,
    /// `width_in_cells * cell_size`
    pub width: f64,
    /// `height_in_cells * cell_size`
    pub height: f64,
    /// The stroke width the segments were extended for
    pub stroke_width: f64,
}

impl MazeDrawing {
    /// Serialize all segments as independent subpaths
    pub fn path_data(&self) -> PathData {
        PathData::from_segments(&self.segments)
    }
}

/// Lengthen an axis-aligned segment by `half_stroke` at both ends so that perpendicular
/// strokes meeting at a corner overlap.
///
/// The result always runs from the smaller coordinate to the larger one.
///
/// ```
/// use printable_pages::maze::geometry::extend_segment;
/// use printable_pages::svg::Segment;
///
/// let extended = extend_segment(Segment::new(5.0, 0.0, 5.0, 10.0), 1.5);
/// assert_eq!(extended, Segment::new(5.0, -1.5, 5.0, 11.5));
/// ```
pub fn extend_segment(segment: Segment, half_stroke: f64) -> Segment {
    let (s, e) = (segment.start, segment.end);
    if s.x == e.x {
        Segment::new(
            s.x,
            s.y.min(e.y) - half_stroke,
            s.x,
            s.y.max(e.y) + half_stroke,
        )
    } else {
        Segment::new(
            s.x.min(e.x) - half_stroke,
            s.y,
            s.x.max(e.x) + half_stroke,
            s.y,
        )
    }
}

/// The outer rectangle as four extended segments: left, bottom, top, right.
///
/// The bottom edge stops one cell short of the right corner and the top edge starts one
/// cell in from the left corner, leaving an entrance at the top left and an exit at the
/// bottom right.
pub fn outer_boundary(
    width_in_cells: usize,
    height_in_cells: usize,
    cell_size: f64,
    half_stroke: f64,
) -> [Segment; 4] {
    let right = width_in_cells as f64 * cell_size;
    let bottom = height_in_cells as f64 * cell_size;
    [
        Segment::new(0.0, 0.0, 0.0, bottom),
        Segment::new(0.0, bottom, right - cell_size, bottom),
        Segment::new(cell_size, 0.0, right, 0.0),
        Segment::new(right, 0.0, right, bottom),
    ]
    .map(|segment| extend_segment(segment, half_stroke))
}

/// Nominal (unextended) segment separating two adjacent cells
fn separating_segment(grid: &MazeGrid, a: usize, b: usize, cell_size: f64) -> Segment {
    let (small, large) = if a < b { (a, b) } else { (b, a) };
    let (x, y) = grid.cell_to_xy(large);
    let (left, top) = (x as f64 * cell_size, y as f64 * cell_size);
    if large - small == grid.width() {
        // stacked cells share a horizontal edge along the top of the lower one
        Segment::new(left, top, left + cell_size, top)
    } else {
        Segment::new(left, top, left, top + cell_size)
    }
}

/// Nominal segment for the wall between two adjacent cells
///
/// ```
/// use printable_pages::grid::MazeGrid;
/// use printable_pages::maze::geometry::wall_segment;
/// use printable_pages::svg::Segment;
///
/// let grid = MazeGrid::new(3, 2).unwrap();
/// assert_eq!(wall_segment(&grid, 1, 2, 10.0), Ok(Segment::new(20.0, 0.0, 20.0, 10.0)));
/// assert_eq!(wall_segment(&grid, 4, 1, 10.0), Ok(Segment::new(10.0, 10.0, 20.0, 10.0)));
/// ```
pub fn wall_segment(
    grid: &MazeGrid,
    a: usize,
    b: usize,
    cell_size: f64,
) -> Result<Segment, PageError> {
    if !grid.adjacent(a, b) {
        return Err(PageError::NotAdjacent { a, b });
    }
    Ok(separating_segment(grid, a, b, cell_size))
}

/// Project the walls of a carved grid into extended page segments
pub fn project(grid: &MazeGrid, cell_size: f64, stroke_width: f64) -> MazeDrawing {
    let half_stroke = stroke_width / 2.0;
    let mut segments: Vec<Segment> =
        outer_boundary(grid.width(), grid.height(), cell_size, half_stroke).to_vec();
    segments.extend(grid.walls().map(|(a, b)| {
        extend_segment(separating_segment(grid, a, b, cell_size), half_stroke)
    }));

    MazeDrawing {
        segments,
        width: grid.width() as f64 * cell_size,
        height: grid.height() as f64 * cell_size,
        stroke_width,
    }
}
