#![forbid(unsafe_code)]
//! skyroute-core library.
//!
//! Routing and connectivity analytics over a directed, weighted airport
//! network.
//!
//! ## Pipeline
//!
//! ```text
//! route file
//!        ↓  ingest::load_routes()
//! RouteGraph (DiGraph<Airport, Route>)
//!        ├─ routing::shortest_route / region_routes / routes_with_stops
//!        ├─ metrics::connectivity_ranking
//!        ↓  graph::projection::FareGraph::from_routes()
//! FareGraph (UnGraph<Airport, u64>)
//!        └─ mst::prim / mst::kruskal
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums inside the library, `anyhow::Result`
//!   where I/O is involved. Unknown airports and unreachable destinations are
//!   never errors; queries return a "no route" [`routing::RouteResult`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod metrics;
pub mod mst;
pub mod routing;

pub use graph::{Airport, FareGraph, Route, RouteGraph};
pub use routing::RouteResult;
