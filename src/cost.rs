//! The Cost Model: numeric cost types, heuristics and step weights.

use crate::{neighbors::Movement, Coord};
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// A numeric type usable for terrain weights, path costs and queue keys.
///
/// Implemented for `i32`, `i64`, `f32` and `f64`. Integer types are scaled: a straight step
/// costs `100` and a diagonal step `142`, so that the octile heuristic stays admissible
/// (`DIAGONAL >= √2 * STRAIGHT`) without fractional values. Floating point types use `1.0`
/// and the smallest representable value not below `√2`.
pub trait Cost: Copy + Debug + PartialOrd + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity, also the cost of the start Node
    const ZERO: Self;
    /// Weight of an axis-aligned step
    const STRAIGHT: Self;
    /// Weight of a diagonal step
    const DIAGONAL: Self;
    /// The weight a [`Terrain`](crate::Terrain) reports for solid or out-of-bounds cells
    const IMPASSABLE: Self;

    /// Converts a number of unscaled steps into this type
    fn from_steps(steps: usize) -> Self;
    /// Converts a real distance, measured in straight steps, into this type.
    ///
    /// Integer types round down to keep heuristics built on this admissible.
    fn from_distance(distance: f64) -> Self;

    /// `false` for values that cannot be ordered (NaN)
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! impl_int_cost {
    ($($type:ty),+) => {$(
        impl Cost for $type {
            const ZERO: $type = 0;
            const STRAIGHT: $type = 100;
            const DIAGONAL: $type = 142;
            const IMPASSABLE: $type = -1;

            fn from_steps(steps: usize) -> $type {
                steps as $type
            }
            fn from_distance(distance: f64) -> $type {
                (distance * Self::STRAIGHT as f64).floor() as $type
            }
        }
    )+}
}

impl_int_cost!(i32, i64);

impl Cost for f64 {
    const ZERO: f64 = 0.0;
    const STRAIGHT: f64 = 1.0;
    // the f64 nearest to √2 lies above it
    const DIAGONAL: f64 = std::f64::consts::SQRT_2;
    const IMPASSABLE: f64 = -1.0;

    fn from_steps(steps: usize) -> f64 {
        steps as f64
    }
    fn from_distance(distance: f64) -> f64 {
        distance
    }
}

impl Cost for f32 {
    const ZERO: f32 = 0.0;
    const STRAIGHT: f32 = 1.0;
    // f32::consts::SQRT_2 rounds down, use the next representable value
    const DIAGONAL: f32 = 1.414_213_7;
    const IMPASSABLE: f32 = -1.0;

    fn from_steps(steps: usize) -> f32 {
        steps as f32
    }
    fn from_distance(distance: f64) -> f32 {
        distance as f32
    }
}

fn deltas(n0: Coord, n1: Coord) -> (usize, usize) {
    (n1.0.abs_diff(n0.0), n1.1.abs_diff(n0.1))
}

/// `dx + dy` straight steps. Only admissible for [`Movement::Cardinal`].
pub fn manhattan_distance<C: Cost>(n0: Coord, n1: Coord) -> C {
    let (dx, dy) = deltas(n0, n1);
    C::from_steps(dx + dy) * C::STRAIGHT
}

/// Octile distance: as many diagonal steps as possible, then straight ones.
pub fn diagonal_distance<C: Cost>(n0: Coord, n1: Coord) -> C {
    let (dx, dy) = deltas(n0, n1);
    let (dmin, dmax) = (dx.min(dy), dx.max(dy));
    C::from_steps(dmin) * C::DIAGONAL + C::from_steps(dmax - dmin) * C::STRAIGHT
}

/// Straight-line distance. Admissible for either movement mode.
pub fn euclidean_distance<C: Cost>(n0: Coord, n1: Coord) -> C {
    let (dx, dy) = deltas(n0, n1);
    let (dx, dy) = (dx as f64, dy as f64);
    C::from_distance((dx * dx + dy * dy).sqrt())
}

/// The weight of a single step from `c0` to the adjacent `c1`.
///
/// ## Panics
/// If `c0` and `c1` are not neighbors in the 8-connected sense (this includes `c0 == c1`).
#[track_caller]
pub fn move_weight<C: Cost>(c0: Coord, c1: Coord) -> C {
    match deltas(c0, c1) {
        (1, 0) | (0, 1) => C::STRAIGHT,
        (1, 1) => C::DIAGONAL,
        _ => panic!("move_weight called on non-adjacent cells {:?} and {:?}", c0, c1),
    }
}

/// Selects one of the distance functions of this module as the search heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// [`manhattan_distance`]
    Manhattan,
    /// [`diagonal_distance`]
    Octile,
    /// [`euclidean_distance`]
    Euclidean,
}

impl Heuristic {
    /// Estimates the cost of walking from `point` to `goal`
    pub fn evaluate<C: Cost>(self, point: Coord, goal: Coord) -> C {
        match self {
            Heuristic::Manhattan => manhattan_distance(point, goal),
            Heuristic::Octile => diagonal_distance(point, goal),
            Heuristic::Euclidean => euclidean_distance(point, goal),
        }
    }

    /// Whether this heuristic never overestimates on a grid with the given movement,
    /// assuming terrain weights of at least `1`.
    pub fn is_admissible_for(self, movement: Movement) -> bool {
        !matches!((self, movement), (Heuristic::Manhattan, Movement::Diagonal))
    }
}
