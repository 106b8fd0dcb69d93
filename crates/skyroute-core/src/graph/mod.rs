//! Route network graphs.
//!
//! # Overview
//!
//! Two graphs are involved in every analysis:
//!
//! ```text
//! RouteRecord stream
//!        ↓  store::RouteGraph::insert_record()
//! RouteGraph (DiGraph<Airport, Route>, parallel routes kept)
//!        ↓  projection::FareGraph::from_routes()
//! FareGraph (UnGraph<Airport, u64>, one edge per airport pair)
//! ```
//!
//! Both graphs share node indices: airport `i` in the [`RouteGraph`] is
//! airport `i` in the [`FareGraph`]. Nodes are never removed, so a
//! `NodeIndex` stays valid for the lifetime of the graph and can index the
//! working arrays of every algorithm.
//!
//! ## Edge order
//!
//! petgraph walks adjacency lists newest-first. Every algorithm here
//! depends on insertion order for tie-breaking, so adjacency is always read
//! through [`RouteGraph::routes_from`] / [`FareGraph::neighbors`], which
//! sort by `EdgeIndex`.

pub mod projection;
pub mod select;
pub mod store;

pub use projection::{FareEdge, FareGraph, FareLink, ProjectionRow};
pub use store::{Airport, Route, RouteGraph, region_code};
