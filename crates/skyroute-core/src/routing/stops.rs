//! Shortest simple route with an exact number of intermediate stops.
//!
//! Exhaustive depth-first backtracking over simple paths. A route with `k`
//! stops flies `k + 1` legs, so the search starts with a leg budget of
//! `k + 1` and only records the destination when the budget is spent
//! exactly. Among qualifying paths the one with strictly smallest distance
//! wins; the first one found keeps equal-distance ties.
//!
//! The search is exponential in the worst case and meant for small graphs.

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::RouteGraph;
use crate::routing::RouteResult;

/// A constrained route together with the stop count it was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopsResult {
    pub stops: usize,
    #[serde(flatten)]
    pub route: RouteResult,
}

#[derive(Debug, Clone)]
struct Candidate {
    path: Vec<NodeIndex>,
    distance: u64,
    cost: u64,
}

/// Mutable search state. `visited` and `path` always describe the current
/// DFS branch and are restored on every return.
struct StopSearch<'g> {
    graph: &'g RouteGraph,
    destination: NodeIndex,
    visited: FixedBitSet,
    path: Vec<NodeIndex>,
    best: Option<Candidate>,
    expanded: u64,
}

impl<'g> StopSearch<'g> {
    fn new(graph: &'g RouteGraph, destination: NodeIndex) -> Self {
        Self {
            graph,
            destination,
            visited: FixedBitSet::with_capacity(graph.node_count()),
            path: Vec::new(),
            best: None,
            expanded: 0,
        }
    }

    fn explore(&mut self, current: NodeIndex, remaining: usize, distance: u64, cost: u64) {
        self.expanded += 1;
        self.visited.insert(current.index());
        self.path.push(current);

        if current == self.destination && remaining == 0 {
            if self.best.as_ref().is_none_or(|best| distance < best.distance) {
                self.best = Some(Candidate {
                    path: self.path.clone(),
                    distance,
                    cost,
                });
            }
        } else if remaining > 0 {
            let graph = self.graph;
            for route in graph.routes_from(current) {
                let next = route.target();
                if self.visited.contains(next.index()) {
                    continue;
                }
                self.explore(
                    next,
                    remaining - 1,
                    distance.saturating_add(route.weight().distance),
                    cost.saturating_add(route.weight().cost),
                );
            }
        }

        self.path.pop();
        self.visited.set(current.index(), false);
    }
}

/// Shortest route from `origin` to `destination` with exactly `stops`
/// intermediate airports and no airport visited twice.
///
/// Unknown codes, `origin == destination`, and stop counts the graph cannot
/// accommodate all yield "no route".
#[must_use]
#[instrument(skip(graph))]
pub fn routes_with_stops(
    graph: &RouteGraph,
    origin: &str,
    destination: &str,
    stops: usize,
) -> StopsResult {
    let none = || StopsResult {
        stops,
        route: RouteResult::none(origin, destination),
    };

    let (Some(from), Some(to)) = (graph.find_index(origin), graph.find_index(destination)) else {
        debug!("unknown airport code");
        return none();
    };
    if from == to || stops.saturating_add(2) > graph.node_count() {
        return none();
    }

    let mut search = StopSearch::new(graph, to);
    search.explore(from, stops + 1, 0, 0);
    debug!(
        expanded = search.expanded,
        found = search.best.is_some(),
        "stop-constrained search"
    );

    match search.best {
        Some(best) => StopsResult {
            stops,
            route: RouteResult::from_path(graph, &best.path, best.distance, best.cost),
        },
        None => none(),
    }
}
