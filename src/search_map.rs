use crate::{cost::Cost, node::NodeState, path::Path};

/// The operations a best-first driver needs from the graph it searches.
///
/// A driver is expected to follow this protocol:
/// ```no_code
/// open_start(start, heuristic(start, goal))
/// while frontier_nonempty():
///     current = extract_cheapest()
///     if current == goal: return reconstruct_path(goal)
///     for (next, edge) in neighbors_with_cost(current):
///         g = current_cost(current) + edge
///         match state(next):
///             Unexplored          => discover(next, g, h(next), current)
///             Open   if g < g(next) => decrease_open_key(next, g, h(next), current)
///             Closed if g < g(next) => reopen(next, g, h(next), current)
/// ```
/// Every transition panics if the Node is not in the state it starts from. `reopen` and
/// `decrease_open_key` ignore costs that are not strictly better than the current one.
pub trait SearchMap {
    /// Identifies a Node
    type Node: Copy + Eq;
    /// Path costs and priorities
    type Cost: Cost;

    /// An admissible estimate of the cost from `node` to `goal`
    fn heuristic(&self, node: Self::Node, goal: Self::Node) -> Self::Cost;
    /// The lifecycle state of `node`
    fn state(&self, node: Self::Node) -> NodeState;
    /// The best known cost from the start to `node`
    fn current_cost(&self, node: Self::Node) -> Self::Cost;

    /// `true` while the Open List has members
    fn frontier_nonempty(&self) -> bool;
    /// All enterable neighbors of `node` with the cost of stepping onto them
    fn neighbors_with_cost(&self, node: Self::Node) -> Vec<(Self::Node, Self::Cost)>;

    /// Opens `start` as its own parent with cost zero
    fn open_start(&mut self, start: Self::Node, h: Self::Cost);
    /// Unexplored → Open
    fn discover(&mut self, node: Self::Node, g: Self::Cost, h: Self::Cost, parent: Self::Node);
    /// Closed → Open, if `g` is an improvement
    fn reopen(&mut self, node: Self::Node, g: Self::Cost, h: Self::Cost, parent: Self::Node);
    /// Open → Open with a smaller key, if `g` is an improvement
    fn decrease_open_key(
        &mut self,
        node: Self::Node,
        g: Self::Cost,
        h: Self::Cost,
        parent: Self::Node,
    );
    /// Open → Closed for the Node with the smallest key, which is returned
    fn extract_cheapest(&mut self) -> Self::Node;
    /// Follows parents from `goal` back to the start
    fn reconstruct_path(&mut self, goal: Self::Node) -> Path<Self::Node, Self::Cost>;
}
