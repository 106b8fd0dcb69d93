//! Shortest routes from one airport into a region.

use petgraph::graph::NodeIndex;
use tracing::{debug, instrument};

use crate::graph::{RouteGraph, region_code};
use crate::routing::RouteResult;
use crate::routing::shortest::route_between;

/// Airports whose region equals `region`, in index order.
#[must_use]
pub fn airports_in_region(graph: &RouteGraph, region: &str) -> Vec<NodeIndex> {
    graph
        .airports()
        .filter(|(_, airport)| airport.region() == Some(region))
        .map(|(idx, _)| idx)
        .collect()
}

/// One shortest-route result per airport in the region of `region`.
///
/// `region` may be a bare code (`"FL"`) or a city (`"Miami, FL"`); only its
/// last two characters are compared. Each target gets its own search. An
/// unknown origin yields a "no route" entry for every target; an empty
/// region yields an empty list.
#[must_use]
#[instrument(skip(graph))]
pub fn region_routes(graph: &RouteGraph, origin: &str, region: &str) -> Vec<RouteResult> {
    let Some(region) = region_code(region) else {
        debug!("region argument shorter than two characters");
        return Vec::new();
    };

    let targets = airports_in_region(graph, region);
    let from = graph.find_index(origin);
    let results: Vec<RouteResult> = targets
        .iter()
        .map(|&to| match from {
            Some(from) => route_between(graph, from, to),
            None => RouteResult::none(origin, graph.code(to)),
        })
        .collect();

    debug!(
        targets = results.len(),
        reachable = results.iter().filter(|r| r.found).count(),
        "region routes"
    );
    results
}
