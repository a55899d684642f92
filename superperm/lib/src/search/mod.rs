//! Path-construction searches over the permutation [`Graph`]: a deterministic nearest-neighbour
//! baseline and an Ant Colony Optimisation metaheuristic.

use permframe::path_to_string;

use crate::graph::{Graph, NodeIdx};
use crate::{Parameters, Result};

mod ant;
mod colony;
mod greedy;

pub use ant::Ant;
pub use colony::Colony;
pub use greedy::run_greedy;

/// A (possibly incomplete) path through a [`Graph`], visiting each node at most once.  Whether a
/// `Tour` actually covers every node is a *soft* condition: the heuristics legitimately produce
/// partial coverage on filtered graphs, so completeness is surfaced here as data (see
/// [`Tour::is_complete`]) rather than as an error.
#[derive(Debug, Clone)]
pub struct Tour {
    /// The visited nodes, in order.  Guaranteed to contain no duplicates.
    pub visited: Vec<NodeIdx>,
    /// The exact sum of the traversed edges' distances
    pub distance: usize,
}

impl Tour {
    /// `true` if this `Tour` visits every node of `graph`.  Only a complete tour can collapse
    /// into a true superpermutation.
    pub fn is_complete(&self, graph: &Graph) -> bool {
        self.visited.len() == graph.num_nodes()
    }

    /// The visited permutations, in order.
    pub fn perms<'gr>(&'gr self, graph: &'gr Graph) -> impl Iterator<Item = &'gr permframe::Perm> {
        self.visited.iter().map(|&n| graph.node(n))
    }

    /// Collapse this `Tour` into a candidate superpermutation string by overlap-merging the
    /// visited permutations.  The result is only a true superpermutation if the tour is
    /// complete, which callers should check with [`permframe::is_superperm`].
    pub fn to_superperm(&self, graph: &Graph) -> String {
        let perms = self.perms(graph).cloned().collect::<Vec<_>>();
        path_to_string(&perms)
    }
}

/// Run a full Ant Colony Optimisation search over `graph`, returning the best [`Tour`] found
/// across all epochs.  Fails fast with [`Error::InvalidParameter`](crate::Error) before any work
/// happens if `params` is invalid.
///
/// The graph is borrowed mutably because the colony updates its pheromone levels between epochs;
/// the final pheromone state is left in place, so a subsequent run continues from the trails
/// this one laid down.
pub fn run_aco(graph: &mut Graph, params: &Parameters) -> Result<Tour> {
    Ok(Colony::new(graph, params.clone())?.run())
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    use super::Tour;

    #[test]
    fn tour_to_superperm() {
        let graph = Graph::build(3, false).unwrap();
        let perm_idx = |s: &str| {
            graph
                .node_idx(&permframe::Perm::parse(s).unwrap())
                .unwrap()
        };

        let tour = Tour {
            visited: ["123", "231", "312", "213", "132", "321"]
                .iter()
                .map(|s| perm_idx(s))
                .collect(),
            distance: 6,
        };
        assert!(tour.is_complete(&graph));
        assert_eq!(tour.to_superperm(&graph), "123121321");

        let partial = Tour {
            visited: vec![perm_idx("123"), perm_idx("231")],
            distance: 1,
        };
        assert!(!partial.is_complete(&graph));
        assert_eq!(partial.to_superperm(&graph), "1231");
    }
}
