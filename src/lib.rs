#![warn(missing_docs)]
//! Generators for printable activity pages: mazes, comic panels, math worksheets and word
//! searches, each drawn as an SVG page from a seedable random source.

pub mod comic;
pub mod constants;
pub mod error;
pub mod grid;
pub mod math;
pub mod maze;
pub mod page;
pub mod settings;
pub mod svg;
pub mod word_search;
