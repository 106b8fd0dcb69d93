//! Undirected fare projection of the route graph.
//!
//! # Overview
//!
//! Spanning-tree analysis needs an undirected graph. [`FareGraph`] collapses
//! every pair of airports that has a route in either direction into one
//! undirected edge weighted by fare:
//!
//! | Routes present      | Edge weight                      |
//! |---------------------|----------------------------------|
//! | `u → v` and `v → u` | `min(cost(u → v), cost(v → u))`  |
//! | only `u → v`        | `cost(u → v)`                    |
//! | only `v → u`        | `cost(v → u)`                    |
//! | neither             | no edge                          |
//!
//! With parallel routes, `cost(u → v)` is the fare of the first `u → v`
//! route inserted.
//!
//! Pairs are discovered walking airports in index order and each airport's
//! routes in insertion order. A symmetric marker ensures the pair `{u, v}`
//! is projected once even when both `u → v` and `v → u` are encountered.
//! A self-route `u → u` yields an undirected self-loop.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashSet;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::store::{Airport, RouteGraph};

/// Undirected edge of the projection with endpoints ordered `a <= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareEdge {
    pub a: NodeIndex,
    pub b: NodeIndex,
    pub weight: u64,
}

/// One neighbour entry in a projection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareLink {
    pub code: String,
    pub weight: u64,
}

/// Adjacency of a single airport in the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionRow {
    pub code: String,
    pub links: Vec<FareLink>,
}

/// Undirected, fare-weighted graph derived from a [`RouteGraph`].
///
/// Node indices match the source graph.
#[derive(Debug, Clone, Default)]
pub struct FareGraph {
    pub graph: UnGraph<Airport, u64>,
}

impl FareGraph {
    /// Project `routes` into an undirected fare graph.
    #[must_use]
    #[instrument(skip(routes), fields(airports = routes.node_count(), routes = routes.edge_count()))]
    pub fn from_routes(routes: &RouteGraph) -> Self {
        let mut graph = UnGraph::with_capacity(routes.node_count(), routes.edge_count());
        for (_, airport) in routes.airports() {
            graph.add_node(airport.clone());
        }

        let mut projected: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        for u in routes.graph.node_indices() {
            for route in routes.routes_from(u) {
                let v = route.target();
                if !projected.insert(pair_key(u, v)) {
                    continue;
                }

                let forward = routes.first_route(u, v).map(|r| r.cost);
                let backward = routes.first_route(v, u).map(|r| r.cost);
                if let Some(weight) = merge_costs(forward, backward) {
                    graph.add_edge(u, v, weight);
                }
            }
        }

        debug!(edges = graph.edge_count(), "projected fare graph");
        Self { graph }
    }

    /// Return the number of airports.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return the code of `idx`, or `""` for an index outside the graph.
    #[must_use]
    pub fn code(&self, idx: NodeIndex) -> &str {
        self.graph.node_weight(idx).map_or("", |a| a.code.as_str())
    }

    /// Projected weight between `a` and `b`, in either order.
    #[must_use]
    pub fn weight(&self, a: NodeIndex, b: NodeIndex) -> Option<u64> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    /// Neighbours of `idx` with edge weights, in edge insertion order.
    #[must_use]
    pub fn neighbors(&self, idx: NodeIndex) -> Vec<(NodeIndex, u64)> {
        let mut edges: Vec<_> = self.graph.edges(idx).collect();
        edges.sort_unstable_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (other, *edge.weight())
            })
            .collect()
    }

    /// Every edge once, as seen from its lower-index endpoint.
    ///
    /// Order: lower endpoint ascending, then that endpoint's adjacency
    /// order. Self-loops are excluded.
    #[must_use]
    pub fn canonical_edges(&self) -> Vec<FareEdge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for a in self.graph.node_indices() {
            for (b, weight) in self.neighbors(a) {
                if a < b {
                    edges.push(FareEdge { a, b, weight });
                }
            }
        }
        edges
    }

    /// Adjacency listing for display, airports in index order.
    #[must_use]
    pub fn rows(&self) -> Vec<ProjectionRow> {
        self.graph
            .node_indices()
            .map(|idx| ProjectionRow {
                code: self.code(idx).to_string(),
                links: self
                    .neighbors(idx)
                    .into_iter()
                    .map(|(other, weight)| FareLink {
                        code: self.code(other).to_string(),
                        weight,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Combine the fares of the two directions of a pair.
#[must_use]
pub const fn merge_costs(forward: Option<u64>, backward: Option<u64>) -> Option<u64> {
    match (forward, backward) {
        (Some(f), Some(b)) => Some(if f < b { f } else { b }),
        (Some(cost), None) | (None, Some(cost)) => Some(cost),
        (None, None) => None,
    }
}

fn pair_key(u: NodeIndex, v: NodeIndex) -> (NodeIndex, NodeIndex) {
    if u <= v { (u, v) } else { (v, u) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
