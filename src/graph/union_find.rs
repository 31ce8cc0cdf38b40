// src/graph/union_find.rs

use crate::errors::{Result, SchedError};

/// Weighted quick-union over dense vertex indices, with path compression.
///
/// `parent[i]` is the parent of vertex `i`; a root is its own parent.
/// `size[root]` is the number of vertices in that root's tree. The two
/// arrays grow in lock-step, with the same padding rule as
/// [`crate::graph::DirectedGraph`]: adding vertex `i` implicitly adds every
/// vertex below it, each as a singleton root of size 1.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.size.len()
    }

    /// Ensure vertex `i` exists, padding every missing index below it as a
    /// fresh singleton. Idempotent.
    pub fn add_vertex(&mut self, i: usize) {
        while !self.has(i) {
            self.parent.push(self.parent.len());
            self.size.push(1);
        }
    }

    /// Merge the components containing `j` and `k`, creating either vertex
    /// as needed.
    ///
    /// The root of the smaller tree is attached under the root of the larger
    /// tree. On equal sizes the first argument's root stays root.
    pub fn connect(&mut self, j: usize, k: usize) {
        self.add_vertex(j);
        self.add_vertex(k);
        // Both vertices exist, so root() cannot fail.
        let root_j = self.root_unchecked(j);
        let root_k = self.root_unchecked(k);
        if root_j == root_k {
            return;
        }
        let (smaller, larger) = if self.size[root_j] < self.size[root_k] {
            (root_j, root_k)
        } else {
            (root_k, root_j)
        };
        self.parent[smaller] = larger;
        self.size[larger] += self.size[smaller];
    }

    /// Whether `j` and `k` are in the same component.
    ///
    /// Returns `false` if either vertex has not been added. Takes `&mut self`
    /// because root lookups compress paths as they walk.
    pub fn connected(&mut self, j: usize, k: usize) -> bool {
        if !self.has(j) || !self.has(k) {
            return false;
        }
        self.root_unchecked(j) == self.root_unchecked(k)
    }

    /// Representative vertex of the component containing `i`.
    ///
    /// While walking to the root, every visited vertex is repointed to its
    /// grandparent. This halves the path rather than compressing it fully to
    /// the root; repeated lookups still flatten the tree to amortized
    /// near-constant cost, and the roots chosen stay identical to the
    /// uncompressed walk.
    pub fn root(&mut self, i: usize) -> Result<usize> {
        if !self.has(i) {
            return Err(SchedError::OutOfRange {
                index: i,
                len: self.vertex_count(),
            });
        }
        Ok(self.root_unchecked(i))
    }

    fn root_unchecked(&mut self, mut i: usize) -> usize {
        while i != self.parent[i] {
            let grandparent = self.parent[self.parent[i]];
            self.parent[i] = grandparent;
            i = grandparent;
        }
        i
    }

    fn has(&self, i: usize) -> bool {
        i < self.size.len()
    }
}
