// src/graph/digraph.rs

use std::collections::BTreeSet;

/// Directed graph over dense vertex indices `0..n`.
///
/// `adjacency[i]` is the set of vertices `i` points to. Growth is total:
/// adding vertex `i` implicitly adds every vertex below `i`, so the structure
/// never contains sparse holes. Vertices and edges are only ever added.
///
/// Adjacency sets are `BTreeSet`s so that neighbor iteration is in ascending
/// index order; traversals over the same graph therefore visit vertices in
/// the same order on every call.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of vertices added so far.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|set| set.len()).sum()
    }

    /// Ensure vertex `i` exists, padding every missing index below it with an
    /// empty adjacency set. Idempotent.
    pub fn add_vertex(&mut self, i: usize) {
        while !self.has(i) {
            self.adjacency.push(BTreeSet::new());
        }
    }

    /// Add the directed edge `j -> k`, creating either vertex as needed.
    ///
    /// Adding the same edge twice is a no-op. Self-loops are allowed here;
    /// whether they make sense is the caller's concern.
    pub fn connect(&mut self, j: usize, k: usize) {
        self.add_vertex(j);
        self.add_vertex(k);
        self.adjacency[j].insert(k);
    }

    /// Whether `k` is a direct successor of `j`.
    ///
    /// Every present vertex is trivially connected to itself. Returns `false`
    /// if either vertex has not been added.
    pub fn connected(&self, j: usize, k: usize) -> bool {
        if !self.has(j) || !self.has(k) {
            return false;
        }
        if j == k {
            return true;
        }
        self.adjacency[j].contains(&k)
    }

    /// Direct successors of `i`, in ascending index order.
    ///
    /// Empty if `i` has not been added.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(i).into_iter().flatten().copied()
    }

    fn has(&self, i: usize) -> bool {
        i < self.adjacency.len()
    }
}
