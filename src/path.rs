use crate::cost::Cost;

/// A reconstructed Path, ordered from the start to the goal.
///
/// Both endpoints are included, so a Path from a tile to itself has length 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P, C> {
    path: Vec<P>,
    cost: C,
}

impl<P, C: Cost> Path<P, C> {
    /// Creates a Path from its steps and total cost
    pub fn new(path: Vec<P>, cost: C) -> Path<P, C> {
        Path { path, cost }
    }

    /// The `g` cost of the goal when the Path was reconstructed
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of tiles on the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no tiles
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first tile
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last tile
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// The tiles as a slice
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }
}

use std::ops::Index;

impl<P, C> Index<usize> for Path<P, C> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<'a, P, C: Cost> IntoIterator for &'a Path<P, C> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: PartialEq, C> PartialEq<Vec<P>> for Path<P, C> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq, C> PartialEq<&'a [P]> for Path<P, C> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl<P: fmt::Debug, C: fmt::Display> fmt::Display for Path<P, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        match self.path.split_first() {
            None => write!(fmt, "<empty>"),
            Some((first, rest)) => {
                write!(fmt, "{:?}", first)?;
                for p in rest {
                    write!(fmt, " -> {:?}", p)?;
                }
                Ok(())
            }
        }
    }
}
