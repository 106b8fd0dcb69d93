//! Kruskal's algorithm over the canonical edge list.

use tracing::{debug, instrument};

use crate::graph::FareGraph;
use crate::mst::{DisjointSet, MstAlgorithm, SpanningTree, TreeEdge};

/// Minimum spanning forest of the projection.
///
/// Each undirected edge is considered once from its lower-index endpoint
/// and edges are sorted stably by weight, so equal weights keep discovery
/// order. Accepted edges are listed in acceptance order. Self-loops are
/// never considered.
#[must_use]
#[instrument(skip(fares), fields(airports = fares.node_count(), edges = fares.edge_count()))]
pub fn kruskal(fares: &FareGraph) -> SpanningTree {
    let n = fares.node_count();
    let target = n.saturating_sub(1);

    let mut candidates = fares.canonical_edges();
    candidates.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSet::new(n);
    let mut edges: Vec<TreeEdge> = Vec::with_capacity(target);
    for edge in candidates {
        if edges.len() == target {
            break;
        }
        if sets.union(edge.a, edge.b) {
            edges.push(TreeEdge {
                from: fares.code(edge.a).to_string(),
                to: fares.code(edge.b).to_string(),
                weight: edge.weight,
            });
        }
    }

    debug!(
        edges = edges.len(),
        components = sets.num_components(),
        "kruskal finished"
    );
    SpanningTree::from_edges(MstAlgorithm::Kruskal, fares, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Route, RouteGraph};

    fn project(routes: &[(&str, &str, u64)]) -> FareGraph {
        let mut graph = RouteGraph::new();
        for &(from, to, cost) in routes {
            let a = graph.resolve_index(from);
            let b = graph.resolve_index(to);
            graph.add_route(a, b, Route { distance: 1, cost });
        }
        FareGraph::from_routes(&graph)
    }

    fn pairs(tree: &SpanningTree) -> Vec<(&str, &str, u64)> {
        tree.edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str(), e.weight))
            .collect()
    }

    #[test]
    fn triangle_accepts_in_weight_order() {
        let fares = project(&[("A", "B", 10), ("B", "C", 3), ("A", "C", 4)]);
        let tree = kruskal(&fares);
        assert!(tree.complete);
        assert_eq!(tree.total_weight, 7);
        assert_eq!(pairs(&tree), vec![("B", "C", 3), ("A", "C", 4)]);
    }

    #[test]
    fn disconnected_returns_forest() {
        let fares = project(&[("A", "B", 2), ("C", "D", 1)]);
        let tree = kruskal(&fares);
        assert!(!tree.complete);
        assert_eq!(tree.total_weight, 3);
        assert_eq!(pairs(&tree), vec![("C", "D", 1), ("A", "B", 2)]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let fares = project(&[("A", "A", 0), ("A", "B", 5)]);
        let tree = kruskal(&fares);
        assert_eq!(pairs(&tree), vec![("A", "B", 5)]);
        assert!(tree.complete);
    }

    #[test]
    fn equal_weights_keep_discovery_order() {
        let fares = project(&[("A", "B", 1), ("B", "C", 1), ("A", "C", 1)]);
        let tree = kruskal(&fares);
        assert_eq!(pairs(&tree), vec![("A", "B", 1), ("A", "C", 1)]);
    }
}
