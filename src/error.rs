//! Errors produced while generating a page.

use thiserror::Error;

/// Everything that can go wrong inside a page generator
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PageError {
    /// A grid was requested with a zero width or height
    #[error("invalid grid dimensions {width}x{height}; both must be at least 1")]
    InvalidDimension {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },
    /// Wall state was read or written between two cells that don't share an edge
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent {
        /// First cell id
        a: usize,
        /// Second cell id
        b: usize,
    },
    /// A comic row template could not be parsed
    #[error("invalid panel template: {0}")]
    InvalidTemplate(String),
    /// None of the candidate words fit in the word search grid
    #[error("no usable words for the word search")]
    EmptyWordList,
    /// Some other numeric parameter is out of its domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
