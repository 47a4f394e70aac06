//! The Terrain store: weights of the tiles a search runs over.

use crate::{cost::Cost, Coord, GridError};

/// Answers how expensive it is to walk onto a tile.
///
/// A negative weight marks a solid tile. Coordinates outside of
/// `(0..width, 0..height)` are part of the contract: they **must** report a negative weight,
/// because neighbor enumeration does not clip to the Grid and relies on this check alone.
pub trait Terrain {
    /// The numeric type of weights and costs
    type Cost: Cost;

    /// Number of columns
    fn width(&self) -> usize;
    /// Number of rows
    fn height(&self) -> usize;
    /// The weight of the tile at `coord`, or a negative value if it cannot be entered
    fn weight(&self, coord: Coord) -> Self::Cost;

    /// `true` if the tile at `coord` exists and can be entered
    fn passable(&self, coord: Coord) -> bool {
        self.weight(coord) >= Self::Cost::ZERO
    }
}

/// A dense [`Terrain`] stored as a flattened, row-major array of weights.
///
/// ## Examples
/// ```
/// use tile_search::{Terrain, WeightMatrix};
///
/// let terrain = WeightMatrix::new(3, 2, vec![
///     1.0, 1.0, -1.0,
///     1.0, 5.0, 1.0,
/// ]).unwrap();
///
/// assert_eq!(terrain.weight((1, 1)), 5.0);
/// assert!(!terrain.passable((2, 0)));
/// assert!(!terrain.passable((3, 0))); // outside
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix<C> {
    width: usize,
    height: usize,
    weights: Vec<C>,
}

impl<C: Cost> WeightMatrix<C> {
    /// Creates a WeightMatrix of `width` columns and `height` rows.
    ///
    /// `weights[y * width + x]` is the weight of the tile at `(x, y)`.
    ///
    /// ## Errors
    /// - [`GridError::EmptyGrid`] if either dimension is zero
    /// - [`GridError::TooLarge`] if the cells cannot be addressed by a [`Coord`]
    /// - [`GridError::WeightCount`] if `weights` does not hold `width * height` entries
    /// - [`GridError::InvalidWeight`] if a weight is NaN
    pub fn new(width: usize, height: usize, weights: Vec<C>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let expected = width
            .checked_mul(height)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })?;
        if weights.len() != expected {
            return Err(GridError::WeightCount {
                expected,
                actual: weights.len(),
            });
        }
        if let Some(index) = weights.iter().position(|weight| !weight.is_comparable()) {
            return Err(GridError::InvalidWeight {
                x: index % width,
                y: index / width,
            });
        }

        Ok(WeightMatrix {
            width,
            height,
            weights,
        })
    }

    /// Creates a WeightMatrix where every tile has weight `weight`
    pub fn uniform(width: usize, height: usize, weight: C) -> Result<Self, GridError> {
        let cells = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        Self::new(width, height, vec![weight; cells])
    }

    /// The index of `coord` in the flattened array, if it lies inside the Grid
    pub fn index_of(&self, (x, y): Coord) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

impl<C: Cost> Terrain for WeightMatrix<C> {
    type Cost = C;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn weight(&self, coord: Coord) -> C {
        match self.index_of(coord) {
            Some(index) => self.weights[index],
            None => C::IMPASSABLE,
        }
    }
}
