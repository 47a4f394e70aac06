use std::cmp::Ordering;

use crate::{
    cost::{move_weight, Cost},
    node::{Node, NodeArray, NodeState},
    open_list::OpenList,
    path::Path,
    search_map::SearchMap,
    stats::SearchStats,
    terrain::{Terrain, WeightMatrix},
    utils::{debug, trace},
    Coord, GridConfig, GridError,
};

/// A tile Grid prepared for best-first searches.
///
/// The GridMap owns one [`Node`] per tile and the Open List of the current search. The search
/// itself is run by a driver through the [`SearchMap`] operations; see there for the
/// protocol. Between two searches on the same GridMap, call [`reset`](GridMap::reset).
///
/// ## Examples
/// ```
/// use tile_search::prelude::*;
///
/// // 1 = empty, -1 = wall
/// #[rustfmt::skip]
/// let weights = vec![
///     1.0,  1.0, 1.0,
///     -1.0, -1.0, 1.0,
///     1.0,  1.0, 1.0,
/// ];
/// let mut map = GridMap::new(3, 3, weights, GridConfig::CARDINAL).unwrap();
///
/// let (start, goal) = ((0, 0), (0, 2));
/// map.open_start(start, map.heuristic(start, goal));
///
/// while map.frontier_nonempty() {
///     let current = map.extract_cheapest();
///     if current == goal {
///         break;
///     }
///     for (next, edge) in map.neighbors_with_cost(current) {
///         let g = map.current_cost(current) + edge;
///         let h = map.heuristic(next, goal);
///         match map.state(next) {
///             NodeState::Unexplored => map.discover(next, g, h, current),
///             NodeState::Open => map.decrease_open_key(next, g, h, current),
///             NodeState::Closed => map.reopen(next, g, h, current),
///             _ => {}
///         }
///     }
/// }
///
/// let path = map.reconstruct_path(goal);
/// assert_eq!(path.cost(), 6.0);
/// assert_eq!(path.len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct GridMap<C, T = WeightMatrix<C>> {
    terrain: T,
    nodes: NodeArray<C>,
    open_list: OpenList<usize, C>,
    /// every Node discovered since the last reset
    touched: Vec<usize>,
    start: Option<usize>,
    stats: SearchStats,
    config: GridConfig,
}

impl<C: Cost> GridMap<C> {
    /// Creates a GridMap over a row-major array of weights.
    ///
    /// `weights[y * width + x]` is the cost of entering `(x, y)`. Negative weights are solid.
    ///
    /// ## Errors
    /// Everything [`WeightMatrix::new`] rejects, and [`GridError::InadmissibleHeuristic`] if
    /// the configured heuristic overestimates for the configured movement.
    pub fn new(
        width: usize,
        height: usize,
        weights: Vec<C>,
        config: GridConfig,
    ) -> Result<GridMap<C>, GridError> {
        let terrain = WeightMatrix::new(width, height, weights)?;
        GridMap::with_terrain(terrain, config)
    }
}

impl<C: Cost, T: Terrain<Cost = C>> GridMap<C, T> {
    /// Creates a GridMap over any [`Terrain`].
    ///
    /// ## Errors
    /// - [`GridError::EmptyGrid`] or [`GridError::TooLarge`] for unusable terrain dimensions
    /// - [`GridError::InadmissibleHeuristic`] for a mismatched `config`
    pub fn with_terrain(terrain: T, config: GridConfig) -> Result<GridMap<C, T>, GridError> {
        let (width, height) = (terrain.width(), terrain.height());
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if !width
            .checked_mul(height)
            .map_or(false, |cells| cells <= isize::MAX as usize)
        {
            return Err(GridError::TooLarge { width, height });
        }
        if !config.heuristic.is_admissible_for(config.movement) {
            return Err(GridError::InadmissibleHeuristic {
                heuristic: config.heuristic,
                movement: config.movement,
            });
        }

        debug!(
            "creating {}x{} GridMap with {:?}",
            width, height, config
        );

        Ok(GridMap {
            terrain,
            nodes: NodeArray::new(width, height),
            open_list: OpenList::new(),
            touched: vec![],
            start: None,
            stats: SearchStats::default(),
            config,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.terrain.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.terrain.height()
    }

    /// `true` if `coord` lies inside the Grid
    pub fn contains(&self, coord: Coord) -> bool {
        self.nodes.index_of(coord).is_some()
    }

    /// The options this GridMap was created with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The underlying Terrain
    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// Transition counters of the current search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search record of `coord`, or `None` outside of the Grid
    pub fn node(&self, coord: Coord) -> Option<&Node<C>> {
        self.nodes.get(coord)
    }

    /// Number of Nodes currently in the Open List
    pub fn open_count(&self) -> usize {
        self.open_list.len()
    }

    /// The cost of stepping from `from` onto the adjacent tile `to`.
    ///
    /// ## Panics
    /// If the two tiles are not adjacent.
    #[track_caller]
    pub fn edge_cost(&self, from: Coord, to: Coord) -> C {
        self.terrain.weight(to) * move_weight(from, to)
    }

    /// Prepares the GridMap for the next search.
    ///
    /// Every Node touched since the last reset becomes [`NodeState::Unexplored`] again, the
    /// Open List is emptied and the [`stats`](GridMap::stats) are zeroed. Runs in
    /// O(touched Nodes).
    pub fn reset(&mut self) {
        debug!("resetting {} touched Nodes", self.touched.len());
        for index in self.touched.drain(..) {
            self.nodes[index].clear();
        }
        self.open_list.clear();
        self.start = None;
        self.stats = SearchStats::default();
    }

    #[track_caller]
    fn index(&self, coord: Coord) -> usize {
        match self.nodes.index_of(coord) {
            Some(index) => index,
            None => panic!("{:?} is outside of the Grid", coord),
        }
    }

    /// The start keeps itself as parent for the whole search, nothing else may point to itself
    #[track_caller]
    fn check_parent(&self, index: usize, parent: Coord) {
        let coord = self.nodes[index].coord;
        if self.start == Some(index) {
            panic!("the start {:?} cannot get a parent", coord);
        }
        if self.index(parent) == index {
            panic!("only the start may be its own parent, not {:?}", coord);
        }
    }

    /// Puts the Node at `index` into the Open List with the given cost and parent
    fn open(&mut self, index: usize, g: C, h: C, parent: Coord) {
        let node = &mut self.nodes[index];
        node.g = g;
        node.f = g + h;
        node.parent = parent;
        node.state = NodeState::Open;
        node.handle = Some(self.open_list.insert(index, node.f));
    }
}

impl<C: Cost, T: Terrain<Cost = C>> SearchMap for GridMap<C, T> {
    type Node = Coord;
    type Cost = C;

    fn heuristic(&self, node: Coord, goal: Coord) -> C {
        self.config.heuristic.evaluate(node, goal)
    }

    /// ## Panics
    /// If `node` is outside of the Grid.
    #[track_caller]
    fn state(&self, node: Coord) -> NodeState {
        self.nodes[self.index(node)].state
    }

    /// ## Panics
    /// If `node` is outside of the Grid.
    #[track_caller]
    fn current_cost(&self, node: Coord) -> C {
        self.nodes[self.index(node)].g
    }

    fn frontier_nonempty(&self) -> bool {
        !self.open_list.is_empty()
    }

    fn neighbors_with_cost(&self, node: Coord) -> Vec<(Coord, C)> {
        let mut candidates = Vec::with_capacity(8);
        self.config.movement.get_all_neighbors(node, &mut candidates);
        candidates
            .into_iter()
            .filter(|&next| self.terrain.passable(next))
            .map(|next| (next, self.edge_cost(node, next)))
            .collect()
    }

    #[track_caller]
    fn open_start(&mut self, start: Coord, h: C) {
        self.discover(start, C::ZERO, h, start);
    }

    /// ## Panics
    /// - if `node` is not [`NodeState::Unexplored`]
    /// - if `node` or `parent` is outside of the Grid
    /// - if `node` is its own parent and the search already has a start
    #[track_caller]
    fn discover(&mut self, node: Coord, g: C, h: C, parent: Coord) {
        let index = self.index(node);
        let parent_index = self.index(parent);
        let state = self.nodes[index].state;
        if state != NodeState::Unexplored {
            panic!("discover called on {:?} Node {:?}", state, node);
        }
        if parent_index == index {
            if let Some(start) = self.start {
                panic!(
                    "{:?} cannot be a second start, the search started at {:?}",
                    node, self.nodes[start].coord
                );
            }
            self.start = Some(index);
        }

        self.open(index, g, h, parent);
        self.touched.push(index);
        self.stats.opened += 1;
        trace!("opened {:?}: g = {:?}, parent = {:?}", node, g, parent);
    }

    /// ## Panics
    /// - if `node` is not [`NodeState::Closed`]
    /// - if `node` is the start or `parent == node`
    #[track_caller]
    fn reopen(&mut self, node: Coord, g: C, h: C, parent: Coord) {
        let index = self.index(node);
        self.check_parent(index, parent);
        let current = &self.nodes[index];
        if current.state != NodeState::Closed {
            panic!("reopen called on {:?} Node {:?}", current.state, node);
        }
        if g.partial_cmp(&current.g) != Some(Ordering::Less) {
            trace!("kept {:?}: g = {:?} is no improvement", node, g);
            return;
        }

        self.open(index, g, h, parent);
        self.stats.reopened += 1;
        trace!("reopened {:?}: g = {:?}, parent = {:?}", node, g, parent);
    }

    /// ## Panics
    /// - if `node` is not [`NodeState::Open`]
    /// - if `node` is the start or `parent == node`
    /// - if `g + h` is larger than the current key
    #[track_caller]
    fn decrease_open_key(&mut self, node: Coord, g: C, h: C, parent: Coord) {
        let index = self.index(node);
        self.check_parent(index, parent);
        let current = &mut self.nodes[index];
        if current.state != NodeState::Open {
            panic!("decrease_open_key called on {:?} Node {:?}", current.state, node);
        }
        if g.partial_cmp(&current.g) != Some(Ordering::Less) {
            trace!("kept {:?}: g = {:?} is no improvement", node, g);
            return;
        }
        let handle = match current.handle {
            Some(handle) => handle,
            None => unreachable!("open Node {:?} is not in the Open List", node),
        };

        current.g = g;
        current.f = g + h;
        current.parent = parent;
        self.open_list.decrease_key(handle, current.f);
        self.stats.decreased += 1;
        trace!("decreased {:?}: g = {:?}, parent = {:?}", node, g, parent);
    }

    /// ## Panics
    /// If the frontier is empty.
    #[track_caller]
    fn extract_cheapest(&mut self) -> Coord {
        if self.open_list.is_empty() {
            panic!("extract_cheapest called with an empty frontier");
        }
        let (index, _) = self.open_list.pop_min();
        let node = &mut self.nodes[index];
        node.handle = None;
        node.state = NodeState::Closed;
        self.stats.closed += 1;
        trace!("closed {:?}: f = {:?}", node.coord, node.f);
        node.coord
    }

    /// Open Nodes on the Path leave the Open List. The Path's cost is the `g` of `goal`.
    ///
    /// ## Panics
    /// If the parents of `goal` do not lead to the start of the search, which happens when
    /// `goal` (or a Node on the way) was never discovered.
    #[track_caller]
    fn reconstruct_path(&mut self, goal: Coord) -> Path<Coord, C> {
        let goal_index = self.index(goal);
        let mut steps = vec![];
        let mut current = goal_index;

        loop {
            let node = &self.nodes[current];
            if node.state == NodeState::Unexplored {
                panic!(
                    "no Path to {:?}: {:?} was never discovered",
                    goal, node.coord
                );
            }
            steps.push(current);
            if node.parent == node.coord {
                break;
            }
            if steps.len() >= self.nodes.len() {
                panic!("the parents of {:?} do not lead to a start", goal);
            }
            current = self.index(node.parent);
        }

        for (i, &index) in steps.iter().enumerate() {
            let node = &mut self.nodes[index];
            if let Some(handle) = node.handle.take() {
                self.open_list.remove(handle);
            }
            node.state = if i + 1 == steps.len() {
                NodeState::Start
            } else if i == 0 {
                NodeState::Goal
            } else {
                NodeState::Result
            };
        }

        let cost = self.nodes[goal_index].g;
        debug!("reconstructed Path to {:?} with {} steps", goal, steps.len());
        let path = steps
            .into_iter()
            .rev()
            .map(|index| self.nodes[index].coord)
            .collect();
        Path::new(path, cost)
    }
}
