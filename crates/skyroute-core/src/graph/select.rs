//! Linear-scan selection shared by Dijkstra and Prim.
//!
//! Both algorithms repeatedly pick the open node with the smallest finite
//! key. The scan walks indices in ascending order and only replaces its
//! candidate on a strict improvement, so exact ties go to the lowest index.
//! Results of the routing and spanning-tree queries depend on this rule.

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

/// Return the node with the smallest key that is not in `closed`.
///
/// `None` keys are infinite and never selected. Returns `None` when every
/// remaining node has an infinite key.
#[must_use]
pub fn lowest_open(keys: &[Option<u64>], closed: &FixedBitSet) -> Option<NodeIndex> {
    let mut best: Option<(usize, u64)> = None;
    for (idx, key) in keys.iter().enumerate() {
        let Some(key) = *key else { continue };
        if closed.contains(idx) {
            continue;
        }
        if best.is_none_or(|(_, current)| key < current) {
            best = Some((idx, key));
        }
    }
    best.map(|(idx, _)| NodeIndex::new(idx))
}
