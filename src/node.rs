use crate::{cost::Cost, open_list::Handle, Coord};

/// Where a Node is in its search lifecycle.
///
/// ```no_code
///               discover          extract_cheapest
/// Unexplored ------------> Open -----------------> Closed
///                          |  ^                      |
///       decrease_open_key  |  |        reopen        |
///                          +--+  <-------------------+
/// ```
/// `Start`, `Goal` and `Result` are only assigned by path reconstruction and are never left
/// again until the Grid is reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NodeState {
    /// Not discovered in the current search
    #[default]
    Unexplored,
    /// Discovered and waiting in the Open List
    Open,
    /// Extracted from the Open List
    Closed,
    /// The first cell of a reconstructed Path
    Start,
    /// The last cell of a reconstructed Path
    Goal,
    /// An interior cell of a reconstructed Path
    Result,
}

/// The search record of a single tile
#[derive(Clone, Debug, PartialEq)]
pub struct Node<C> {
    pub(crate) coord: Coord,
    pub(crate) g: C,
    pub(crate) f: C,
    pub(crate) parent: Coord,
    pub(crate) state: NodeState,
    pub(crate) handle: Option<Handle>,
}

impl<C: Cost> Node<C> {
    fn new(coord: Coord) -> Node<C> {
        Node {
            coord,
            g: C::ZERO,
            f: C::ZERO,
            parent: coord,
            state: NodeState::Unexplored,
            handle: None,
        }
    }

    /// The position of this Node
    pub fn coord(&self) -> Coord {
        self.coord
    }
    /// Cost of the cheapest known Path from the start. Meaningless while unexplored.
    pub fn g(&self) -> C {
        self.g
    }
    /// `g` plus the heuristic estimate, the key in the Open List
    pub fn f(&self) -> C {
        self.f
    }
    /// The previous cell on the cheapest known Path. The start is its own parent.
    pub fn parent(&self) -> Coord {
        self.parent
    }
    /// The lifecycle state
    pub fn state(&self) -> NodeState {
        self.state
    }

    pub(crate) fn clear(&mut self) {
        *self = Node::new(self.coord);
    }
}

/// One Node per tile, indexed like the flattened weights of a
/// [`WeightMatrix`](crate::WeightMatrix)
#[derive(Clone, Debug)]
pub(crate) struct NodeArray<C> {
    width: usize,
    height: usize,
    nodes: Vec<Node<C>>,
}

impl<C: Cost> NodeArray<C> {
    pub fn new(width: usize, height: usize) -> NodeArray<C> {
        let nodes = (0..height)
            .flat_map(|y| (0..width).map(move |x| Node::new((x as isize, y as isize))))
            .collect();
        NodeArray {
            width,
            height,
            nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, (x, y): Coord) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, coord: Coord) -> Option<&Node<C>> {
        self.index_of(coord).map(|index| &self.nodes[index])
    }
}

use std::ops::{Index, IndexMut};
impl<C> Index<usize> for NodeArray<C> {
    type Output = Node<C>;
    #[track_caller]
    fn index(&self, index: usize) -> &Node<C> {
        &self.nodes[index]
    }
}
impl<C> IndexMut<usize> for NodeArray<C> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Node<C> {
        &mut self.nodes[index]
    }
}
