//! Prim's algorithm with linear-scan selection.
//!
//! Grows one tree from airport index 0. Each round includes the open airport
//! with the smallest finite key (lowest index on ties) and relaxes its
//! neighbours in edge insertion order, updating only on a strictly smaller
//! weight. O(V² + E).

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use tracing::{debug, instrument};

use crate::graph::FareGraph;
use crate::graph::select::lowest_open;
use crate::mst::{MstAlgorithm, SpanningTree, TreeEdge};

/// Minimum spanning tree of the component containing airport 0.
///
/// Edges are listed in index order of their child airport as
/// `(parent, child, weight)`.
#[must_use]
#[instrument(skip(fares), fields(airports = fares.node_count()))]
pub fn prim(fares: &FareGraph) -> SpanningTree {
    let n = fares.node_count();
    if n == 0 {
        return SpanningTree::from_edges(MstAlgorithm::Prim, fares, Vec::new());
    }

    let start = NodeIndex::new(0);
    let mut key: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    let mut included = FixedBitSet::with_capacity(n);
    key[start.index()] = Some(0);

    while let Some(u) = lowest_open(&key, &included) {
        included.insert(u.index());
        for (v, weight) in fares.neighbors(u) {
            if included.contains(v.index()) {
                continue;
            }
            if key[v.index()].is_none_or(|current| weight < current) {
                key[v.index()] = Some(weight);
                parent[v.index()] = Some(u);
            }
        }
    }

    let edges: Vec<TreeEdge> = fares
        .graph
        .node_indices()
        .filter(|&v| v != start)
        .filter_map(|v| {
            let from = parent[v.index()]?;
            let weight = key[v.index()]?;
            Some(TreeEdge {
                from: fares.code(from).to_string(),
                to: fares.code(v).to_string(),
                weight,
            })
        })
        .collect();

    debug!(edges = edges.len(), "prim finished");
    SpanningTree::from_edges(MstAlgorithm::Prim, fares, edges)
}
