//! Directed route graph built from route records.
//!
//! # Overview
//!
//! A [`RouteGraph`] owns every airport and every directed route between
//! them. An edge `A → B` means "there is a scheduled route from A to B" with
//! a travel distance (the routing metric) and a fare cost (carried along the
//! chosen path, never optimised on its own).
//!
//! ## Identity
//!
//! Airports are keyed by code. [`RouteGraph::resolve_index`] returns the
//! existing node for a code or creates a placeholder airport with an empty
//! city. The city is filled in later by [`RouteGraph::assign_city`], and
//! only while it is still empty, so the first city seen for a code wins.
//!
//! ## Parallel routes
//!
//! Two records with the same origin and destination become two distinct
//! edges. Nothing is de-duplicated.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use tracing::trace;

use crate::ingest::RouteRecord;

// ---------------------------------------------------------------------------
// Node and edge payloads
// ---------------------------------------------------------------------------

/// An airport node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    /// Unique airport code (e.g. `ABE`).
    pub code: String,
    /// Display city, e.g. `Allentown, PA`. Empty for placeholder airports.
    pub city: String,
}

impl Airport {
    /// An airport known only by its code.
    #[must_use]
    pub fn placeholder(code: &str) -> Self {
        Self {
            code: code.to_string(),
            city: String::new(),
        }
    }

    /// Region code of this airport (last two characters of the city).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        region_code(&self.city)
    }
}

/// Return the last two characters of `city`, or `None` if it is shorter.
///
/// `"Miami, FL"` → `Some("FL")`, `"FL"` → `Some("FL")`, `""` → `None`.
#[must_use]
pub fn region_code(city: &str) -> Option<&str> {
    let (start, _) = city.char_indices().rev().nth(1)?;
    Some(&city[start..])
}

/// A directed route between two airports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Travel distance; the metric minimised by path search.
    pub distance: u64,
    /// Fare cost; accumulated along whatever path distance selects.
    pub cost: u64,
}

// ---------------------------------------------------------------------------
// RouteGraph
// ---------------------------------------------------------------------------

/// Directed multigraph of airports and routes.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Directed graph: nodes = airports, edges = routes.
    pub graph: DiGraph<Airport, Route>,
    /// Mapping from airport code to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `code`, creating a placeholder airport on a miss.
    pub fn resolve_index(&mut self, code: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(code) {
            return idx;
        }

        let idx = self.graph.add_node(Airport::placeholder(code));
        self.node_map.insert(code.to_string(), idx);
        trace!(code, index = idx.index(), "created airport");
        idx
    }

    /// Set the city of `idx` unless one is already recorded.
    ///
    /// Returns `true` when the city was written.
    pub fn assign_city(&mut self, idx: NodeIndex, city: &str) -> bool {
        match self.graph.node_weight_mut(idx) {
            Some(airport) if airport.city.is_empty() && !city.is_empty() => {
                airport.city = city.to_string();
                true
            }
            _ => false,
        }
    }

    /// Append a directed route. Parallel routes are kept.
    pub fn add_route(
        &mut self,
        origin: NodeIndex,
        destination: NodeIndex,
        route: Route,
    ) -> EdgeIndex {
        self.graph.add_edge(origin, destination, route)
    }

    /// Apply one parsed record: resolve both codes, record first-seen
    /// cities, then add the route.
    pub fn insert_record(&mut self, record: &RouteRecord) -> EdgeIndex {
        let origin = self.resolve_index(&record.origin_code);
        let destination = self.resolve_index(&record.destination_code);
        self.assign_city(origin, &record.origin_city);
        self.assign_city(destination, &record.destination_city);
        self.add_route(
            origin,
            destination,
            Route {
                distance: record.distance,
                cost: record.cost,
            },
        )
    }

    /// Look up the `NodeIndex` for an airport code.
    #[must_use]
    pub fn find_index(&self, code: &str) -> Option<NodeIndex> {
        self.node_map.get(code).copied()
    }

    /// Return the airport stored at `idx`.
    #[must_use]
    pub fn airport(&self, idx: NodeIndex) -> Option<&Airport> {
        self.graph.node_weight(idx)
    }

    /// Return the code of `idx`, or `""` for an index outside the graph.
    #[must_use]
    pub fn code(&self, idx: NodeIndex) -> &str {
        self.graph.node_weight(idx).map_or("", |a| a.code.as_str())
    }

    /// Codes for a sequence of node indices.
    #[must_use]
    pub fn codes(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|&idx| self.code(idx).to_string()).collect()
    }

    /// All airports in index (discovery) order.
    pub fn airports(&self) -> impl Iterator<Item = (NodeIndex, &Airport)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Return the number of airports in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of routes in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing routes of `idx` in insertion order.
    #[must_use]
    pub fn routes_from(&self, idx: NodeIndex) -> Vec<EdgeReference<'_, Route>> {
        let mut routes: Vec<_> = self.graph.edges(idx).collect();
        routes.sort_unstable_by_key(|edge| edge.id());
        routes
    }

    /// The first route inserted from `from` to `to`, if any.
    #[must_use]
    pub fn first_route(&self, from: NodeIndex, to: NodeIndex) -> Option<&Route> {
        self.graph
            .edges(from)
            .filter(|edge| edge.target() == to)
            .min_by_key(|edge| edge.id())
            .map(|edge| edge.weight())
    }

    /// Number of routes arriving at `idx` (parallel routes counted).
    #[must_use]
    pub fn inbound_count(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Number of routes leaving `idx` (parallel routes counted).
    #[must_use]
    pub fn outbound_count(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
