//! Distance-optimal routes (Dijkstra with linear-scan selection).
//!
//! # Algorithm
//!
//! 1. `distance[origin] = 0`, `cost[origin] = 0`; every other node is
//!    unlabelled (infinite).
//! 2. Settle the unsettled node with the smallest distance, found by a
//!    linear scan in index order (lowest index wins exact ties, see
//!    [`crate::graph::select`]).
//! 3. Relax its routes in insertion order. Distance, cost and predecessor
//!    of the target move together, and only when the new distance is
//!    strictly smaller. Cost is never optimised on its own: when two paths
//!    tie on distance, the cost reported is that of the first one found.
//! 4. Stop when nothing reachable is left, or once the requested target is
//!    settled (its labels are final at that point).
//!
//! O(V² + E). Route graphs are small enough that the scan beats the
//! bookkeeping of a heap, and it fixes the tie-break.

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::graph::RouteGraph;
use crate::graph::select::lowest_open;
use crate::routing::RouteResult;

/// Labels produced by one single-source search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLabels {
    origin: NodeIndex,
    distance: Vec<Option<u64>>,
    cost: Vec<u64>,
    predecessor: Vec<Option<NodeIndex>>,
}

impl PathLabels {
    /// The node the search started from.
    #[must_use]
    pub const fn origin(&self) -> NodeIndex {
        self.origin
    }

    /// Shortest distance to `node`, `None` if unreachable.
    #[must_use]
    pub fn distance_to(&self, node: NodeIndex) -> Option<u64> {
        self.distance.get(node.index()).copied().flatten()
    }

    /// Cost accumulated along the path to `node`, `None` if unreachable.
    #[must_use]
    pub fn cost_to(&self, node: NodeIndex) -> Option<u64> {
        self.distance_to(node)?;
        self.cost.get(node.index()).copied()
    }

    /// Node sequence from the origin to `node`, `None` if unreachable.
    #[must_use]
    pub fn path_to(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.distance_to(node)?;
        let mut path = Vec::new();
        let mut at = Some(node);
        while let Some(current) = at {
            path.push(current);
            at = self.predecessor[current.index()];
        }
        path.reverse();
        Some(path)
    }

    /// Build the [`RouteResult`] for `target`.
    #[must_use]
    pub fn route_to(&self, graph: &RouteGraph, target: NodeIndex) -> RouteResult {
        match (self.path_to(target), self.distance_to(target), self.cost_to(target)) {
            (Some(path), Some(distance), Some(cost)) => {
                RouteResult::from_path(graph, &path, distance, cost)
            }
            _ => RouteResult::none(graph.code(self.origin), graph.code(target)),
        }
    }
}

/// Run the search from `origin`.
///
/// With `target = Some(t)` the search stops as soon as `t` is settled;
/// labels of nodes not yet settled may then be provisional.
#[must_use]
pub fn label_paths(graph: &RouteGraph, origin: NodeIndex, target: Option<NodeIndex>) -> PathLabels {
    let n = graph.node_count();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut cost: Vec<u64> = vec![0; n];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);

    if origin.index() < n {
        distance[origin.index()] = Some(0);
    }

    while let Some(u) = lowest_open(&distance, &settled) {
        settled.insert(u.index());
        if Some(u) == target {
            break;
        }

        let Some(base) = distance[u.index()] else {
            continue;
        };
        let base_cost = cost[u.index()];

        for route in graph.routes_from(u) {
            let v = route.target();
            if settled.contains(v.index()) {
                continue;
            }
            let candidate = base.saturating_add(route.weight().distance);
            if distance[v.index()].is_none_or(|current| candidate < current) {
                distance[v.index()] = Some(candidate);
                cost[v.index()] = base_cost.saturating_add(route.weight().cost);
                predecessor[v.index()] = Some(u);
            }
        }
    }

    PathLabels {
        origin,
        distance,
        cost,
        predecessor,
    }
}

/// Shortest route between two known airports.
#[must_use]
pub fn route_between(graph: &RouteGraph, origin: NodeIndex, destination: NodeIndex) -> RouteResult {
    label_paths(graph, origin, Some(destination)).route_to(graph, destination)
}

/// Shortest route by distance from `origin` to `destination`.
///
/// Returns a "no route" result when either code is unknown or the
/// destination is unreachable. `origin == destination` yields the
/// single-airport path with zero distance and cost.
#[must_use]
#[instrument(skip(graph))]
pub fn shortest_route(graph: &RouteGraph, origin: &str, destination: &str) -> RouteResult {
    let (Some(from), Some(to)) = (graph.find_index(origin), graph.find_index(destination)) else {
        debug!("unknown airport code");
        return RouteResult::none(origin, destination);
    };

    let result = route_between(graph, from, to);
    debug!(
        found = result.found,
        distance = result.total_distance,
        legs = result.legs(),
        "shortest route"
    );
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
