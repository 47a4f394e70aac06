#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate providing the bookkeeping underneath A* searches on weighted tile Grids.
//!
//! ## Introduction
//! A best-first search over a Grid spends most of its effort on two things: keeping the
//! frontier of discovered Tiles ordered by their estimated total cost, and remembering for
//! every Tile how it was reached and whether it is still waiting, finalized, or untouched.
//! Whenever a cheaper way to a waiting Tile is found, its priority has to drop *in place*,
//! which a plain [`BinaryHeap`](std::collections::BinaryHeap) cannot do.
//!
//! This crate provides exactly that engine, and leaves the search loop itself to the caller:
//! - [`OpenList`]: a min-heap with `O(log n)` [`decrease_key`](OpenList::decrease_key),
//!   addressed through [`Handle`]s
//! - [`GridMap`]: one [`Node`] per Tile with a strict lifecycle
//!   ([`NodeState`]), the Cost Model and the neighbor enumeration, exposed through the
//!   [`SearchMap`] operations
//! - [`Terrain`]: the store of Tile weights. A negative weight marks a solid Tile.
//!
//! ## Examples
//! Creating a Grid:
//! ```
//! use tile_search::prelude::*;
//!
//! // 1 = empty, 5 = swamp, -1 = wall
//! #[rustfmt::skip]
//! let weights = vec![
//!     1, -1, 1, 1, 1,
//!     1, -1, 1, 1, 1,
//!     1,  5, 1, 1, 1,
//!     1,  5, 1, 1, 1,
//!     1,  1, 1, 1, 1,
//! ];
//!
//! let map = GridMap::new(
//!     5, 5,                // the size of the Grid
//!     weights,             // flattened, row by row
//!     GridConfig::default(), // 8 directions with the octile heuristic
//! ).unwrap();
//!
//! // integer costs are scaled: a straight step over a weight of 1 costs 100
//! assert_eq!(map.edge_cost((0, 0), (0, 1)), 100);
//! assert_eq!(map.edge_cost((0, 1), (1, 2)), 5 * 142);
//! assert_eq!(map.neighbors_with_cost((0, 0)), vec![((0, 1), 100)]);
//! ```
//!
//! ### Searching
//! The search loop is driven from the outside. See [`SearchMap`] for the protocol and
//! [`GridMap`] for a complete driver.
//!
//! ### Reusing a Grid
//! Nodes are allocated once and live as long as the GridMap. Before starting another search
//! on the same GridMap, it has to be [`reset`](GridMap::reset):
//! ```
//! # use tile_search::prelude::*;
//! let mut map = GridMap::new(2, 1, vec![1.0, 1.0], GridConfig::CARDINAL).unwrap();
//!
//! map.open_start((0, 0), 1.0);
//! assert_eq!(map.extract_cheapest(), (0, 0));
//! assert_eq!(map.state((0, 0)), NodeState::Closed);
//!
//! map.reset();
//! assert_eq!(map.state((0, 0)), NodeState::Unexplored);
//! assert!(!map.frontier_nonempty());
//! ```
//!
//! ### Misuse
//! Construction input is validated and rejected with a [`GridError`]. Everything after
//! that is a contract between the driver and the GridMap: popping an empty frontier,
//! discovering a closed Node or reconstructing a Path that was never found are bugs in the
//! driver and panic immediately.
//!
//! ## Features
//! - `log`: trace every Node transition through the [`log`](https://docs.rs/log) crate.

/// A position on the Grid: `(x, y)`.
///
/// Signed, so that neighbors of border Tiles can be expressed and rejected by the
/// [`Terrain`].
pub type Coord = (isize, isize);

mod utils;

mod config;
pub use self::config::GridConfig;

pub mod cost;
pub use self::cost::{Cost, Heuristic};

mod error;
pub use self::error::GridError;

mod grid_map;
pub use self::grid_map::GridMap;

pub mod neighbors;
pub use self::neighbors::Movement;

mod node;
pub use self::node::{Node, NodeState};

pub mod open_list;
pub use self::open_list::{Handle, OpenList};

mod path;
pub use self::path::Path;

mod search_map;
pub use self::search_map::SearchMap;

mod stats;
pub use self::stats::SearchStats;

mod terrain;
pub use self::terrain::{Terrain, WeightMatrix};

/// The most commonly used items
pub mod prelude {
    pub use crate::{
        Coord, GridConfig, GridMap, Heuristic, Movement, NodeState, Path, SearchMap, Terrain,
        WeightMatrix,
    };
}
