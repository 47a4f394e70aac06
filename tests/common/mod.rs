#![allow(dead_code)]

use hashbrown::{HashMap, HashSet};
use tile_search::{prelude::*, Cost};

/// Setup logging output, so `RUST_LOG=trace` shows every transition
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Outcome<N> {
    pub found: bool,
    /// Nodes in the order they were extracted
    pub explored: Vec<N>,
}

/// A plain A* driver following the protocol documented on `SearchMap`
pub fn search<M: SearchMap>(map: &mut M, start: M::Node, goal: M::Node) -> Outcome<M::Node> {
    let h = map.heuristic(start, goal);
    map.open_start(start, h);

    let mut explored = vec![];
    while map.frontier_nonempty() {
        let current = map.extract_cheapest();
        explored.push(current);
        if current == goal {
            return Outcome {
                found: true,
                explored,
            };
        }

        let g = map.current_cost(current);
        for (next, edge) in map.neighbors_with_cost(current) {
            let tentative = g + edge;
            let h = map.heuristic(next, goal);
            match map.state(next) {
                NodeState::Unexplored => map.discover(next, tentative, h, current),
                NodeState::Open if tentative < map.current_cost(next) => {
                    map.decrease_open_key(next, tentative, h, current)
                }
                NodeState::Closed if tentative < map.current_cost(next) => {
                    map.reopen(next, tentative, h, current)
                }
                _ => {}
            }
        }
    }

    Outcome {
        found: false,
        explored,
    }
}

pub fn find_path<M: SearchMap>(
    map: &mut M,
    start: M::Node,
    goal: M::Node,
) -> Option<Path<M::Node, M::Cost>> {
    let found = search(map, start, goal).found;
    found.then(|| map.reconstruct_path(goal))
}

/// Exact costs from `source` to every reachable tile, by exhaustive relaxation
pub fn dijkstra<M: SearchMap<Node = Coord>>(map: &M, source: Coord) -> HashMap<Coord, M::Cost> {
    let mut dist = HashMap::new();
    let mut done = HashSet::new();
    dist.insert(source, M::Cost::ZERO);

    loop {
        let next = dist
            .iter()
            .filter(|(coord, _)| !done.contains(*coord))
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(&coord, &cost)| (coord, cost));
        let (current, cost) = match next {
            Some(next) => next,
            None => break,
        };
        done.insert(current);

        for (neighbor, edge) in map.neighbors_with_cost(current) {
            let candidate = cost + edge;
            let better = dist.get(&neighbor).map_or(true, |&known| candidate < known);
            if better {
                dist.insert(neighbor, candidate);
            }
        }
    }
    dist
}

pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}
