//! Code for building the complete permutation [`Graph`].

use std::time::Instant;

use permframe::{overlap_distance, Alphabet, Perm};

use super::{Edge, EdgeVec, Graph, NodeVec, INITIAL_PHEROMONE};

impl Graph {
    /// Build the graph of every permutation of an alphabet of `alphabet_size` symbols, with one
    /// edge for every ordered pair of distinct permutations.  If `proper_only` is set, edges
    /// with no overlap at all (i.e. `distance == alphabet_size`) are excluded; such edges can
    /// never be part of a good path, but excluding them means some tours may terminate before
    /// covering every node.
    ///
    /// Construction is `O((n!)^2)` in both time and space, which is the dominant cost of a
    /// search for `n >= 6`.
    pub fn build(alphabet_size: usize, proper_only: bool) -> crate::Result<Self> {
        let alphabet = Alphabet::new(alphabet_size)?;
        let build_start = Instant::now();

        // The perms come out in lexicographic order, so iterating pairs in order makes the edge
        // table sorted by `(start, end)` with no explicit sort.
        let nodes: NodeVec<Perm> = alphabet.perms().into();
        let mut edges = EdgeVec::with_capacity(nodes.len() * (nodes.len() - 1));
        for (i, p) in nodes.iter_enumerated() {
            for (j, q) in nodes.iter_enumerated() {
                if i == j {
                    continue;
                }
                let distance = overlap_distance(p, q);
                if proper_only && distance >= alphabet.size() {
                    continue;
                }
                edges.push(Edge {
                    start: i,
                    end: j,
                    distance,
                    pheromone: INITIAL_PHEROMONE,
                });
            }
        }
        debug_assert!(edges.raw.windows(2).all(|w| w[0] < w[1]));

        log::debug!(
            "Built graph of {} nodes and {} edges in {:.2?}",
            nodes.len(),
            edges.len(),
            build_start.elapsed()
        );
        Ok(Graph {
            alphabet,
            nodes,
            edges,
        })
    }
}
