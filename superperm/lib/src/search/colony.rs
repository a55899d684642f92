//! The colony controller: epochs of independent ants followed by a pheromone update.

use itertools::Itertools;

use crate::graph::Graph;
use crate::{Parameters, Result};

use super::{ant::Ant, Tour};

/// Added to the gap between an elite ant's distance and the global best when computing its
/// pheromone deposit, so an ant which *matches* the global best doesn't divide by zero.
const REINFORCE_EPSILON: f64 = 0.1;

/// A population of [`Ant`]s searching one shared [`Graph`].
///
/// Each epoch has two strictly ordered phases: first every ant independently constructs a tour
/// against the read-only graph, then the colony mutates the graph's pheromone levels (uniform
/// decay followed by elitist reinforcement).  Ants never interact with each other, and the
/// update phase never overlaps tour construction.
#[derive(Debug)]
pub struct Colony<'gr> {
    graph: &'gr mut Graph,
    params: Parameters,
    ants: Vec<Ant>,
    /// The best tour seen in any epoch so far.  Its distance is monotonically non-increasing
    /// over the life of the `Colony`.
    best: Option<Tour>,
}

impl<'gr> Colony<'gr> {
    /// Creates a `Colony` of `params.n_ants` ants over `graph`, failing fast if `params` is
    /// invalid.  Each ant gets its own random generator, seeded from `params.seed` (or OS
    /// entropy), so a seeded colony is fully reproducible.
    pub fn new(graph: &'gr mut Graph, params: Parameters) -> Result<Self> {
        params.validate()?;
        let master_seed = params.seed.unwrap_or_else(rand::random);
        let ants = (0..params.n_ants)
            .map(|i| {
                Ant::new(
                    &*graph,
                    params.alpha,
                    params.beta,
                    master_seed.wrapping_add(i as u64),
                )
            })
            .collect_vec();
        Ok(Colony {
            graph,
            params,
            ants,
            best: None,
        })
    }

    /// The distance of the best tour seen so far, if any epoch has run.
    pub fn best_distance(&self) -> Option<usize> {
        self.best.as_ref().map(|t| t.distance)
    }

    /// Runs the full set of epochs, returning the best [`Tour`] found.
    pub fn run(mut self) -> Tour {
        for epoch in 0..self.params.n_epochs {
            self.run_epoch();
            // `best` is always `Some` once an epoch has run
            if let Some(best) = self.best_distance() {
                log::debug!("Epoch {}: best tour distance {}", epoch, best);
            }
        }
        let best = self.best.expect("colony always runs at least one epoch");
        log::info!(
            "Colony finished after {} epochs: best tour visits {} nodes with distance {}",
            self.params.n_epochs,
            best.visited.len(),
            best.distance
        );
        best
    }

    /// Runs one epoch: every ant constructs a tour, the global best is updated, and the
    /// pheromone update is applied.
    pub fn run_epoch(&mut self) {
        // Phase 1: tour construction.  Ants only *read* the graph here, and each owns its
        // private tour state and generator, so this loop is safe to parallelise over ants.
        for ant in &mut self.ants {
            ant.reset(self.graph);
            ant.construct_tour(self.graph);
        }

        // Track the global best before reinforcing, so deposits are measured against the best
        // tour ever seen (including this epoch's)
        for ant in &self.ants {
            if self
                .best
                .as_ref()
                .map_or(true, |b| ant.tour_distance() < b.distance)
            {
                self.best = Some(ant.tour());
            }
        }

        // Phase 2: pheromone update.  Must fully complete before the next construction phase.
        self.update_pheromone();
    }

    /// Uniform decay over every edge, then elitist reinforcement: the best `elite_k` ants of
    /// this epoch each deposit `1 / (tour_distance - global_best + EPSILON)` on every edge they
    /// traversed.  Near-global-optimal tours are rewarded much more than merely-good ones.
    fn update_pheromone(&mut self) {
        self.graph.apply_decay(self.params.decay);

        let global_best = match &self.best {
            Some(best) => best.distance,
            None => return, // Unreachable: `best` is set before the update phase
        };
        let elite = (0..self.ants.len())
            .sorted_by_key(|&i| self.ants[i].tour_distance())
            .take(self.params.elite_k);
        for i in elite {
            let gap = self.ants[i].tour_distance() - global_best;
            let amount = 1.0 / (gap as f64 + REINFORCE_EPSILON);
            for &edge_idx in self.ants[i].edge_list() {
                self.graph.reinforce(edge_idx, amount);
            }
        }
    }
}
