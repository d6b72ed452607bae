//! Provides constants for the library.

/// US Letter page width, in points
pub const PAGE_WIDTH: f64 = 612.0;
/// US Letter page height, in points
pub const PAGE_HEIGHT: f64 = 792.0;
/// Three-quarter inch margin used by the maze, worksheet and word search pages
pub const PAGE_MARGIN: f64 = 54.0;

/// Ratio of maze stroke width to cell size (a 30pt cell gets a 4pt wall)
pub const MAZE_STROKE_RATIO: f64 = 2.0 / 15.0;

/// Outer comic page margin, as a fraction of page width
pub const COMIC_OUTER_MARGIN: f64 = 0.08;
/// Gutter between comic panels, as a fraction of page width
pub const COMIC_INNER_MARGIN: f64 = 0.03;
/// Comic frame stroke, as a fraction of page width
pub const COMIC_STROKE_WIDTH: f64 = 0.005;

/// Number of problem columns on a worksheet
pub const WORKSHEET_COLUMNS: usize = 5;
/// Worksheet problem font size
pub const WORKSHEET_FONT_SIZE: f64 = 22.0;
/// Vertical distance between worksheet rows
pub const WORKSHEET_LINE_HEIGHT: f64 = 105.0;

/// How many random positions are tried before a word is left out of the puzzle
pub const WORD_PLACEMENT_ATTEMPTS: usize = 100;
/// Words per grid column in a word search
pub const WORD_DENSITY: f64 = 0.85;
/// Word list font size in a word search
pub const WORD_LIST_FONT_SIZE: f64 = 14.0;
