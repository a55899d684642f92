//! A deterministic nearest-neighbour baseline search.

use bit_vec::BitVec;

use crate::graph::{Edge, Graph, NodeIdx};

use super::Tour;

/// Walks `graph` from `start`, always moving to the unvisited successor with the minimal edge
/// distance, until no unvisited successor remains.  Deterministic: the same graph and start node
/// always give the same [`Tour`].
///
/// Tie-break policy: the edge table is sorted by `(start, end)` with nodes in lexicographic
/// order and the scan keeps the *first* minimum, so the lexicographically smallest destination
/// wins ties.
///
/// On a complete graph the result visits every node; on a `proper_only` graph the walk can get
/// stuck early, which is reported through [`Tour::is_complete`] rather than as an error.
pub fn run_greedy(graph: &Graph, start: NodeIdx) -> Tour {
    let mut visited_set = BitVec::from_elem(graph.num_nodes(), false);
    let mut visited = Vec::with_capacity(graph.num_nodes());
    let mut distance = 0;

    let mut current = start;
    visited.push(current);
    visited_set.set(current.index(), true);

    loop {
        let (_, outgoing) = graph.outgoing(current);
        // Keep the first minimum (strict `<`), so ties go to the smallest destination
        let mut best: Option<&Edge> = None;
        for edge in outgoing {
            if visited_set[edge.end.index()] {
                continue;
            }
            if best.map_or(true, |b| edge.distance < b.distance) {
                best = Some(edge);
            }
        }
        match best {
            Some(edge) => {
                distance += edge.distance;
                current = edge.end;
                visited.push(current);
                visited_set.set(current.index(), true);
            }
            None => break,
        }
    }

    Tour { visited, distance }
}
