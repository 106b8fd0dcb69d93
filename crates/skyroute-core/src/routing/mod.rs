//! Path queries over the directed route graph.
//!
//! - [`shortest`]: distance-optimal route between two airports (Dijkstra).
//! - [`region`]: the shortest route from one airport to every airport of a
//!   region, one independent search per target.
//! - [`stops`]: the shortest simple route with an exact number of
//!   intermediate stops (exhaustive backtracking).
//!
//! Every query returns a [`RouteResult`]. Unknown airports and unreachable
//! destinations produce a result with `found == false`; they are not errors.

pub mod region;
pub mod shortest;
pub mod stops;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::graph::RouteGraph;

pub use region::{airports_in_region, region_routes};
pub use shortest::{PathLabels, label_paths, route_between, shortest_route};
pub use stops::{StopsResult, routes_with_stops};

/// Outcome of a path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    /// Origin code as requested.
    pub origin: String,
    /// Destination code as requested.
    pub destination: String,
    /// `false` when an endpoint is unknown or no qualifying path exists.
    pub found: bool,
    /// Airport codes from origin to destination inclusive; empty if not found.
    pub path: Vec<String>,
    /// Sum of route distances along `path`.
    pub total_distance: u64,
    /// Sum of route fares along `path`.
    pub total_cost: u64,
}

impl RouteResult {
    /// The "no route" result.
    #[must_use]
    pub fn none(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            found: false,
            path: Vec::new(),
            total_distance: 0,
            total_cost: 0,
        }
    }

    pub(crate) fn from_path(
        graph: &RouteGraph,
        path: &[NodeIndex],
        total_distance: u64,
        total_cost: u64,
    ) -> Self {
        let codes = graph.codes(path);
        Self {
            origin: codes.first().cloned().unwrap_or_default(),
            destination: codes.last().cloned().unwrap_or_default(),
            found: true,
            path: codes,
            total_distance,
            total_cost,
        }
    }

    /// Number of routes flown.
    #[must_use]
    pub fn legs(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Number of intermediate airports.
    #[must_use]
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }
}
