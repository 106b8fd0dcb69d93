//! Minimum spanning trees over the fare projection.
//!
//! Two algorithms share one result type:
//!
//! - [`prim`]: grows a single tree from airport index 0.
//! - [`kruskal`]: merges the cheapest edges across a disjoint-set forest.
//!
//! On a connected projection both return `V - 1` edges with the same total
//! weight. Neither fails on a disconnected projection: the result is marked
//! incomplete and a warning is logged. Prim then covers only the component
//! of airport 0 while Kruskal returns a spanning forest.

pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::graph::FareGraph;

pub use disjoint_set::DisjointSet;
pub use kruskal::kruskal;
pub use prim::prim;

/// Spanning-tree algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

impl MstAlgorithm {
    /// Run this algorithm on `fares`.
    #[must_use]
    pub fn run(self, fares: &FareGraph) -> SpanningTree {
        match self {
            Self::Prim => prim(fares),
            Self::Kruskal => kruskal(fares),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prim => f.write_str("prim"),
            Self::Kruskal => f.write_str("kruskal"),
        }
    }
}

/// One tree edge, named by airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// Result of a spanning-tree computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub algorithm: MstAlgorithm,
    /// Tree edges in the order the algorithm emits them.
    pub edges: Vec<TreeEdge>,
    /// Sum of edge weights, saturating at `u64::MAX`.
    pub total_weight: u64,
    /// Airports in the projection.
    pub node_count: usize,
    /// `true` when the edges span every airport.
    pub complete: bool,
}

impl SpanningTree {
    pub(crate) fn from_edges(
        algorithm: MstAlgorithm,
        fares: &FareGraph,
        edges: Vec<TreeEdge>,
    ) -> Self {
        let node_count = fares.node_count();
        let total_weight = edges
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.weight));
        let complete = node_count <= 1 || edges.len() == node_count - 1;
        if !complete {
            warn!(
                %algorithm,
                airports = node_count,
                edges = edges.len(),
                "projection is disconnected; spanning tree is partial"
            );
        }
        Self {
            algorithm,
            edges,
            total_weight,
            node_count,
            complete,
        }
    }
}
