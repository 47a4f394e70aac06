/// Counts the Node transitions of the current search.
///
/// Only the transitions themselves increment these, and they never influence the search.
/// [`GridMap::reset`](crate::GridMap::reset) sets them back to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    pub(crate) opened: usize,
    pub(crate) reopened: usize,
    pub(crate) decreased: usize,
    pub(crate) closed: usize,
}

impl SearchStats {
    /// Unexplored Nodes that were discovered
    pub fn opened(&self) -> usize {
        self.opened
    }
    /// Closed Nodes that were opened again
    pub fn reopened(&self) -> usize {
        self.reopened
    }
    /// Open Nodes whose key was lowered in place
    pub fn decreased(&self) -> usize {
        self.decreased
    }
    /// Nodes extracted from the Open List
    pub fn closed(&self) -> usize {
        self.closed
    }
}
