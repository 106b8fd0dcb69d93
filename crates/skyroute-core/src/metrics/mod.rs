//! Graph metrics over the directed route graph.

pub mod connectivity;

pub use connectivity::{ConnectionCount, connection_counts, connectivity_ranking};
