//! A single stochastic traveller, which builds one tour per colony epoch.

use bit_vec::BitVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::{EdgeIdx, Graph, NodeIdx};

use super::Tour;

/// The heuristic term of a zero-distance edge is capped at this constant instead of dividing by
/// zero.  Zero-distance edges can't actually occur between distinct permutations of equal
/// length, so this is purely a guard against pathological graphs.
const ZERO_DISTANCE_HEURISTIC: f64 = 1e6;

/// A stochastic tour-construction agent.  Each `Ant` owns its tour state and its own seeded
/// random generator (sharing one generator across agents would make concurrent construction
/// nondeterministic), and holds no reference to the [`Graph`] - the graph is passed into each
/// call, so all ants of a colony can share it read-only while touring.
#[derive(Debug, Clone)]
pub struct Ant {
    alpha: f64,
    beta: f64,
    rng: ChaCha8Rng,

    current: NodeIdx,
    /// The visited nodes, in order.  Never contains a duplicate.
    visited: Vec<NodeIdx>,
    /// Bitmap mirror of `visited`, for `O(1)` membership checks
    visited_set: BitVec,
    /// The traversed edges, in order
    edge_list: Vec<EdgeIdx>,
    /// Running sum of the traversed edges' distances
    tour_distance: usize,
}

impl Ant {
    /// Creates an `Ant` ready to tour `graph`, with its generator seeded from `seed`.
    pub fn new(graph: &Graph, alpha: f64, beta: f64, seed: u64) -> Self {
        let mut ant = Ant {
            alpha,
            beta,
            rng: ChaCha8Rng::seed_from_u64(seed),
            current: NodeIdx::new(0),
            visited: Vec::with_capacity(graph.num_nodes()),
            visited_set: BitVec::from_elem(graph.num_nodes(), false),
            edge_list: Vec::with_capacity(graph.num_nodes()),
            tour_distance: 0,
        };
        ant.reset(graph);
        ant
    }

    /// Starts a fresh tour from a uniformly random node.
    pub fn reset(&mut self, graph: &Graph) {
        let start = NodeIdx::new(self.rng.gen_range(0..graph.num_nodes()));
        self.reset_at(graph, start);
    }

    /// Starts a fresh tour from an explicitly chosen node.
    pub fn reset_at(&mut self, graph: &Graph, start: NodeIdx) {
        self.current = start;
        self.visited.clear();
        self.visited_set.clear();
        self.edge_list.clear();
        self.tour_distance = 0;

        debug_assert_eq!(self.visited_set.len(), graph.num_nodes());
        self.visited.push(start);
        self.visited_set.set(start.index(), true);
    }

    /// Repeatedly picks a pheromone- and distance-biased random edge to an unvisited node and
    /// traverses it, until no such edge exists.  This is the computational hot path of the whole
    /// search: one weighted draw per step, for up to `n! - 1` steps per epoch.
    ///
    /// The tour may end before covering every node (on filtered graphs); that's expected, and is
    /// scored through `tour_distance` rather than treated as an error.
    pub fn construct_tour(&mut self, graph: &Graph) {
        let mut candidates: Vec<EdgeIdx> = Vec::new();
        let mut weights: Vec<f64> = Vec::new();

        loop {
            let (first, outgoing) = graph.outgoing(self.current);
            candidates.clear();
            weights.clear();
            let mut total = 0.0;
            for (i, edge) in outgoing.iter().enumerate() {
                if self.visited_set[edge.end.index()] {
                    continue;
                }
                let heuristic = match edge.distance {
                    0 => ZERO_DISTANCE_HEURISTIC,
                    d => 1.0 / d as f64,
                };
                let weight = edge.pheromone().powf(self.alpha) * heuristic.powf(self.beta);
                candidates.push(first + i);
                weights.push(weight);
                total += weight;
            }
            if candidates.is_empty() {
                return; // Tour over (possibly before covering every node)
            }

            let edge_idx = candidates[self.roulette(&weights, total)];
            let edge = graph.edge(edge_idx);
            self.current = edge.end;
            self.visited.push(edge.end);
            self.visited_set.set(edge.end.index(), true);
            self.edge_list.push(edge_idx);
            self.tour_distance += edge.distance;
        }
    }

    /// Draws an index with probability proportional to its weight.
    fn roulette(&mut self, weights: &[f64], total: f64) -> usize {
        if total.is_infinite() {
            // A capped zero-distance heuristic has overflowed the sum; take the dominating edge
            let mut best = 0;
            for (i, &w) in weights.iter().enumerate() {
                if w > weights[best] {
                    best = i;
                }
            }
            return best;
        }
        if total <= 0.0 || total.is_nan() {
            // Every weight underflowed to zero (e.g. fully-evaporated pheromone): uniform draw
            return self.rng.gen_range(0..weights.len());
        }
        let mut threshold = self.rng.gen::<f64>() * total;
        for (i, w) in weights.iter().enumerate() {
            threshold -= w;
            if threshold <= 0.0 {
                return i;
            }
        }
        weights.len() - 1 // Floating-point round-off
    }

    /* TOUR ACCESSORS (read-only between `construct_tour` and the next `reset`) */

    pub fn tour_distance(&self) -> usize {
        self.tour_distance
    }

    pub fn visited(&self) -> &[NodeIdx] {
        &self.visited
    }

    pub fn edge_list(&self) -> &[EdgeIdx] {
        &self.edge_list
    }

    /// Snapshot the current tour as an owned [`Tour`].
    pub fn tour(&self) -> Tour {
        Tour {
            visited: self.visited.clone(),
            distance: self.tour_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use permframe::Perm;

    use crate::graph::Graph;

    use super::Ant;

    #[test]
    fn tour_invariants() {
        let graph = Graph::build(4, false).unwrap();
        for seed in 0..20 {
            let mut ant = Ant::new(&graph, 1.0, 2.0, seed);
            ant.construct_tour(&graph);

            // No duplicate visits
            let unique: HashSet<_> = ant.visited().iter().copied().collect();
            assert_eq!(unique.len(), ant.visited().len());
            // The graph is complete, so the tour must cover every node
            assert_eq!(ant.visited().len(), graph.num_nodes());
            // `tour_distance` is the exact sum of the traversed edges' distances
            let exp_distance: usize = ant
                .edge_list()
                .iter()
                .map(|&e| graph.edge(e).distance)
                .sum();
            assert_eq!(ant.tour_distance(), exp_distance);
            // Traversed edges actually connect the visited nodes, in order
            for (i, &edge_idx) in ant.edge_list().iter().enumerate() {
                let edge = graph.edge(edge_idx);
                assert_eq!(edge.start, ant.visited()[i]);
                assert_eq!(edge.end, ant.visited()[i + 1]);
            }
        }
    }

    #[test]
    fn same_seed_same_tour() {
        let graph = Graph::build(4, false).unwrap();
        let mut a = Ant::new(&graph, 1.0, 2.0, 42);
        let mut b = Ant::new(&graph, 1.0, 2.0, 42);
        a.construct_tour(&graph);
        b.construct_tour(&graph);
        assert_eq!(a.visited(), b.visited());
        assert_eq!(a.tour_distance(), b.tour_distance());
    }

    #[test]
    fn single_pheromone_trail_dominates() {
        // Zero the pheromone everywhere except one edge out of "123"; every ant starting there
        // must take that edge first
        let mut graph = Graph::build(3, false).unwrap();
        let start = graph.node_idx(&Perm::parse("123").unwrap()).unwrap();
        let (first, outgoing) = graph.outgoing(start);
        let chosen = first + (outgoing.len() - 1);

        graph.apply_decay(1.0);
        graph.reinforce(chosen, 1.0);

        for seed in 0..20 {
            let mut ant = Ant::new(&graph, 1.0, 2.0, seed);
            ant.reset_at(&graph, start);
            ant.construct_tour(&graph);
            assert_eq!(ant.edge_list()[0], chosen);
            assert_eq!(ant.visited()[1], graph.edge(chosen).end);
        }
    }

    #[test]
    fn reset_clears_tour_state() {
        let graph = Graph::build(3, false).unwrap();
        let mut ant = Ant::new(&graph, 1.0, 2.0, 7);
        ant.construct_tour(&graph);
        assert_eq!(ant.visited().len(), 6);

        ant.reset(&graph);
        assert_eq!(ant.visited().len(), 1);
        assert_eq!(ant.edge_list().len(), 0);
        assert_eq!(ant.tour_distance(), 0);
    }
}
