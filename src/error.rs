//! Errors reported while building a grid.

use crate::{cost::Heuristic, neighbors::Movement};
use thiserror::Error;

/// Rejected construction input for a [`WeightMatrix`](crate::WeightMatrix) or
/// [`GridMap`](crate::GridMap).
///
/// Misuse of a constructed grid (popping an empty frontier, reopening an open node, ...) is a
/// bug in the driver and panics instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Either dimension was zero
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid {
        /// requested width
        width: usize,
        /// requested height
        height: usize,
    },
    /// `width * height` does not fit the coordinate type
    #[error("grid of {width}x{height} cells is too large to address")]
    TooLarge {
        /// requested width
        width: usize,
        /// requested height
        height: usize,
    },
    /// The flattened weight array does not have `width * height` entries
    #[error("expected {expected} weights, got {actual}")]
    WeightCount {
        /// `width * height`
        expected: usize,
        /// length of the provided array
        actual: usize,
    },
    /// A weight could not be ordered (NaN)
    #[error("weight at ({x}, {y}) is not a number")]
    InvalidWeight {
        /// column of the offending cell
        x: usize,
        /// row of the offending cell
        y: usize,
    },
    /// The heuristic overestimates for the chosen movement mode
    #[error("{heuristic:?} heuristic is not admissible with {movement:?} movement")]
    InadmissibleHeuristic {
        /// the configured heuristic
        heuristic: Heuristic,
        /// the configured movement mode
        movement: Movement,
    },
}
