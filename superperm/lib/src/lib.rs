//! A heuristic engine for finding short superpermutations: strings which contain every
//! permutation of an alphabet as a contiguous substring.
//!
//! The search is phrased as an approximate shortest-Hamiltonian-path problem.  Every permutation
//! of the alphabet becomes a node in a complete directed [`Graph`](graph::Graph), and the weight
//! of the edge `p -> q` is the number of symbols that must be appended to `p` before `q` appears
//! (the 'overlap distance').  A short path visiting every node therefore collapses into a short
//! superpermutation.
//!
//! Two path constructors are provided:
//!
//! - [`run_greedy`]: a deterministic nearest-neighbour walk, useful as a baseline;
//! - [`run_aco`]: an Ant Colony Optimisation metaheuristic, where a population of stochastic
//!   agents repeatedly builds tours biased by pheromone trails which are reinforced along the
//!   best tours of each epoch.
//!
//! Neither constructor guarantees an optimal (or even complete) path; the caller is expected to
//! feed the resulting string through [`permframe::is_superperm`] before trusting it.

#![deny(clippy::all)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

mod error;
pub mod graph;
mod parameters;
pub mod search;

pub use error::{Error, Result};
pub use parameters::Parameters;
pub use search::{run_aco, run_greedy, Tour};
