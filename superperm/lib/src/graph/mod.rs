//! The shared permutation graph which every search walks over.

use permframe::{Alphabet, Perm};

mod build;

/// The pheromone level given to every [`Edge`] at construction
pub const INITIAL_PHEROMONE: f64 = 1.0;

index_vec::define_index_type! { pub struct NodeIdx = u32; }
index_vec::define_index_type! { pub struct EdgeIdx = u32; }
pub type NodeVec<T> = index_vec::IndexVec<NodeIdx, T>;
pub type EdgeVec<T> = index_vec::IndexVec<EdgeIdx, T>;

/// A directed arc between two permutations.  `distance` is the overlap distance from the `start`
/// permutation to the `end` permutation; `pheromone` is the only mutable state in a built
/// [`Graph`], and all mutation goes through [`Graph::apply_decay`] and [`Graph::reinforce`].
///
/// Equality and ordering consider `(start, end)` only - distance and pheromone are not part of
/// an `Edge`'s identity.
#[derive(Debug, Clone)]
pub struct Edge {
    pub start: NodeIdx,
    pub end: NodeIdx,
    pub distance: usize,
    pheromone: f64,
}

impl Edge {
    /// The current pheromone level of this `Edge`.  Always non-negative.
    #[inline]
    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.start, self.end) == (other.start, other.end)
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

/// A complete directed graph over every permutation of some [`Alphabet`], with overlap distances
/// as edge weights.  Edges are stored sorted by `(start, end)`, so the outgoing edges of any
/// node form a contiguous range which can be found by binary search.
///
/// After construction the topology is frozen: edges are never added or removed, and the only
/// mutation is of pheromone levels through [`Graph::apply_decay`]/[`Graph::reinforce`].
#[derive(Debug, Clone)]
pub struct Graph {
    alphabet: Alphabet,
    /// The permutations, in lexicographic order
    nodes: NodeVec<Perm>,
    /// All edges, sorted by `(start, end)`
    edges: EdgeVec<Edge>,
}

impl Graph {
    /// The [`Alphabet`] whose permutations this `Graph` spans.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The [`Perm`] identified by a [`NodeIdx`].
    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &Perm {
        &self.nodes[idx]
    }

    /// An [`Iterator`] over the nodes, in lexicographic order of their [`Perm`]s.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIdx, &Perm)> {
        self.nodes.iter_enumerated()
    }

    /// Looks up the [`NodeIdx`] of a [`Perm`] by binary search (the node table is sorted).
    pub fn node_idx(&self, perm: &Perm) -> Option<NodeIdx> {
        self.nodes.raw.binary_search(perm).ok().map(NodeIdx::new)
    }

    #[inline]
    pub fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIdx, &Edge)> {
        self.edges.iter_enumerated()
    }

    /// The contiguous range of edges leaving `node`, located with two binary searches in
    /// `O(log E)`.  Returns the [`EdgeIdx`] of the first edge along with the slice of edges, so
    /// callers can address individual edges as `first + i`.
    pub fn outgoing(&self, node: NodeIdx) -> (EdgeIdx, &[Edge]) {
        let start = self.edges.raw.partition_point(|e| e.start < node);
        let end = self.edges.raw.partition_point(|e| e.start <= node);
        (EdgeIdx::new(start), &self.edges.raw[start..end])
    }

    /* PHEROMONE UPDATE PROTOCOL.  These are the only ways to mutate a built `Graph`, and must
     * not be called while a tour-construction phase is reading it. */

    /// Evaporate pheromone on every edge: `pheromone *= (1 - rate)`.
    pub fn apply_decay(&mut self, rate: f64) {
        for edge in &mut self.edges {
            edge.pheromone *= 1.0 - rate;
        }
    }

    /// Add `amount` to the pheromone level of a single edge.
    pub fn reinforce(&mut self, edge: EdgeIdx, amount: f64) {
        self.edges[edge].pheromone += amount;
    }
}
