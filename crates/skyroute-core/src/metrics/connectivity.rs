//! Per-airport connection counts.
//!
//! # Overview
//!
//! Degree counting over the directed route graph. Parallel routes count
//! once each. The ranking is a stable sort by total, so airports with equal
//! totals keep their discovery order.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::RouteGraph;

// ---------------------------------------------------------------------------
// Connection counts
// ---------------------------------------------------------------------------

/// Route counts for one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionCount {
    /// Airport code.
    pub code: String,
    /// Routes arriving at this airport.
    pub inbound: usize,
    /// Routes leaving this airport.
    pub outbound: usize,
    /// `inbound + outbound`.
    pub total: usize,
}

/// Connection counts for every airport, in index order.
#[must_use]
pub fn connection_counts(graph: &RouteGraph) -> Vec<ConnectionCount> {
    graph
        .airports()
        .map(|(idx, airport)| {
            let inbound = graph.inbound_count(idx);
            let outbound = graph.outbound_count(idx);
            ConnectionCount {
                code: airport.code.clone(),
                inbound,
                outbound,
                total: inbound + outbound,
            }
        })
        .collect()
}

/// Connection counts sorted by `total`, most connected first.
#[must_use]
#[instrument(skip(graph), fields(airports = graph.node_count()))]
pub fn connectivity_ranking(graph: &RouteGraph) -> Vec<ConnectionCount> {
    let mut counts = connection_counts(graph);
    counts.sort_by(|a, b| b.total.cmp(&a.total));
    debug!(
        top = counts.first().map(|c| c.code.as_str()),
        "ranked airports by connections"
    );
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
