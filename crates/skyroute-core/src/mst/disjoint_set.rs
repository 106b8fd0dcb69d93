//! Disjoint-set forest over node indices.
//!
//! Path compression plus union by rank; near-constant amortized `find`.

use petgraph::graph::NodeIndex;

/// Disjoint sets of `0..n`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of disjoint sets.
    #[must_use]
    pub const fn num_components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `node`.
    pub fn find(&mut self, node: NodeIndex) -> usize {
        let mut root = node.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node.index();
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` if already joined.
    pub fn union(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` share a set.
    pub fn connected(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        self.find(a) == self.find(b)
    }
}
