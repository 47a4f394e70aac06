//! The two supported Neighborhoods of a tile

use crate::{cost::Heuristic, Coord};

/// Defines how a Path can move along the Grid.
///
/// Neighbors are enumerated in a fixed clockwise order starting north, so that searches over
/// identical input explore identical Nodes. The enumeration does **not** clip to the Grid:
/// deciding which candidates exist is the job of the [`Terrain`](crate::Terrain), which
/// reports everything outside its bounds as impassable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Agents move along the 4 cardinal directions.
    ///
    /// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood)
    /// or Manhattan Metric.
    ///
    /// ```no_code
    /// A: Agent, o: reachable in one step
    ///   o
    ///   |
    /// o-A-o
    ///   |
    ///   o
    /// ```
    Cardinal,
    /// Agents move along the 4 cardinal directions and the 4 diagonals.
    ///
    /// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
    ///
    /// ```no_code
    /// A: Agent, o: reachable in one step
    /// o o o
    ///  \|/
    /// o-A-o
    ///  /|\
    /// o o o
    /// ```
    Diagonal,
}

const CARDINAL_OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

const DIAGONAL_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Movement {
    /// The step offsets of this Neighborhood, in enumeration order
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Movement::Cardinal => &CARDINAL_OFFSETS,
            Movement::Diagonal => &DIAGONAL_OFFSETS,
        }
    }

    /// Appends all candidate neighbors of `point` to `target`.
    ///
    /// Candidates may lie outside the Grid or on solid tiles. That check is done later.
    pub fn get_all_neighbors(self, point: Coord, target: &mut Vec<Coord>) {
        target.extend(
            self.offsets()
                .iter()
                .map(|(dx, dy)| (point.0 + dx, point.1 + dy)),
        );
    }

    /// The tightest admissible [`Heuristic`] for this Neighborhood
    pub fn default_heuristic(self) -> Heuristic {
        match self {
            Movement::Cardinal => Heuristic::Manhattan,
            Movement::Diagonal => Heuristic::Octile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_get_all_neighbors() {
        let mut neighbors = vec![];
        Movement::Cardinal.get_all_neighbors((0, 2), &mut neighbors);
        assert_eq!(neighbors, vec![(0, 1), (1, 2), (0, 3), (-1, 2)]);
    }

    #[test]
    fn diagonal_get_all_neighbors() {
        let mut neighbors = vec![];
        Movement::Diagonal.get_all_neighbors((3, 3), &mut neighbors);
        assert_eq!(
            neighbors,
            vec![
                (3, 2),
                (4, 2),
                (4, 3),
                (4, 4),
                (3, 4),
                (2, 4),
                (2, 3),
                (2, 2)
            ],
        );
    }

    #[test]
    fn neighbors_are_appended() {
        let mut neighbors = vec![(9, 9)];
        Movement::Cardinal.get_all_neighbors((0, 0), &mut neighbors);
        assert_eq!(neighbors.len(), 5);
        assert_eq!(neighbors[0], (9, 9));
    }

    #[test]
    fn default_heuristics() {
        assert_eq!(Movement::Cardinal.default_heuristic(), Heuristic::Manhattan);
        assert_eq!(Movement::Diagonal.default_heuristic(), Heuristic::Octile);
    }
}
