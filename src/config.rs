use crate::{cost::Heuristic, neighbors::Movement};

/// Options for configuring a [`GridMap`](crate::GridMap)
///
/// Default options:
/// ```
/// # use tile_search::{GridConfig, Heuristic, Movement};
/// assert_eq!(
///     GridConfig {
///         movement: Movement::Diagonal,
///         heuristic: Heuristic::Octile,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    /// Which tiles are reachable in one step (defaults to [`Movement::Diagonal`])
    pub movement: Movement,
    /// The estimate returned by [`GridMap::heuristic`](crate::GridMap::heuristic)
    /// (defaults to [`Heuristic::Octile`]).
    ///
    /// Must be admissible for `movement`, see [`Heuristic::is_admissible_for`].
    pub heuristic: Heuristic,
}

impl GridConfig {
    /// 4-directional movement with the Manhattan heuristic
    ///
    /// Values:
    /// ```
    /// # use tile_search::{GridConfig, Heuristic, Movement};
    /// assert_eq!(
    ///     GridConfig {
    ///         movement: Movement::Cardinal,
    ///         heuristic: Heuristic::Manhattan,
    ///     },
    ///     GridConfig::CARDINAL
    /// );
    /// ```
    pub const CARDINAL: GridConfig = GridConfig {
        movement: Movement::Cardinal,
        heuristic: Heuristic::Manhattan,
    };
    /// 8-directional movement with the straight-line heuristic
    pub const EUCLIDEAN: GridConfig = GridConfig {
        movement: Movement::Diagonal,
        heuristic: Heuristic::Euclidean,
    };

    /// The given movement with its tightest admissible heuristic
    pub fn with_movement(movement: Movement) -> GridConfig {
        GridConfig {
            movement,
            heuristic: movement.default_heuristic(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig::with_movement(Movement::Diagonal)
    }
}
