//! Crate for loading and running superperm's TOML search files.  The CLI binary is a very thin
//! wrapper around this: it parses the args and immediately calls [`run`].  Keeping the logic
//! here means benchmark harnesses can run searches in exactly the same way as the CLI itself.

#![deny(clippy::all)]

pub mod args;
mod input;

use std::{
    path::Path,
    time::{Duration, Instant},
};

use anyhow::Context;
use colored::Colorize;
use itertools::Itertools;
use log::LevelFilter;
use permframe::{missing_perms, recursive_superperm, Perm};
use superperm::{
    graph::{Graph, NodeIdx},
    run_aco, run_greedy,
};
use superperm_utils::{BigNumInt, PrettyDuration};

pub use input::{AcoSection, Method, SearchFile};

pub fn init_logging(filter: LevelFilter) {
    simple_logger::SimpleLogger::new()
        .with_level(filter)
        .without_timestamps()
        .init()
        .unwrap();
}

/// Read a [`SearchFile`], build its graph, run the requested search and check the result.
pub fn run(input_file: &Path) -> anyhow::Result<SearchResult> {
    let file = SearchFile::read_from_file(input_file)?;

    // Build the graph
    log::info!("Building graph for alphabet size {}", file.alphabet_size);
    let build_start = Instant::now();
    let mut graph = Graph::build(file.alphabet_size, file.proper_only)?;
    let build_time = build_start.elapsed();
    log::info!(
        "Graph has {} nodes and {} edges (built in {})",
        BigNumInt(graph.num_nodes()),
        BigNumInt(graph.num_edges()),
        PrettyDuration(build_time)
    );

    // Run the requested search
    let search_start = Instant::now();
    let tour = match file.method {
        Method::Greedy => run_greedy(&graph, greedy_start_node(&graph, &file)?),
        Method::Aco => run_aco(&mut graph, &file.aco.to_parameters())?,
    };
    let search_time = search_start.elapsed();
    log::info!("Search completed in {}", PrettyDuration(search_time));

    // Collapse the tour and check it against the alphabet (the acceptance criterion: the
    // heuristics themselves don't guarantee a complete path)
    let string = tour.to_superperm(&graph);
    let alphabet = graph.alphabet();
    Ok(SearchResult {
        alphabet_size: alphabet.size(),
        method: file.method,
        nodes_visited: tour.visited.len(),
        num_nodes: graph.num_nodes(),
        tour_distance: tour.distance,
        missing: missing_perms(alphabet, &string),
        baseline_len: recursive_superperm(alphabet).len(),
        string,
        build_time,
        search_time,
    })
}

fn greedy_start_node(graph: &Graph, file: &SearchFile) -> anyhow::Result<NodeIdx> {
    match &file.greedy_start {
        Some(s) => {
            let perm = Perm::parse(s)
                .with_context(|| format!("invalid `greedy_start` permutation {:?}", s))?;
            graph.node_idx(&perm).with_context(|| {
                format!("`greedy_start` permutation {:?} isn't a node of the graph", s)
            })
        }
        // Default to the lexicographically first permutation
        None => Ok(NodeIdx::new(0)),
    }
}

/// The outcome of a search, as printed to the user.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub alphabet_size: usize,
    pub method: Method,
    pub string: String,
    pub nodes_visited: usize,
    pub num_nodes: usize,
    pub tour_distance: usize,
    /// The permutations which don't appear in `string`.  Empty iff `string` is a true
    /// superpermutation.
    pub missing: Vec<Perm>,
    /// Length of the recursive-construction superpermutation for the same alphabet, as a
    /// quality baseline
    pub baseline_len: usize,
    pub build_time: Duration,
    pub search_time: Duration,
}

impl SearchResult {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn print(&self) {
        println!();
        println!(
            "Best string for n = {} ({:?} search, {} of {} nodes visited, tour distance {}):",
            self.alphabet_size,
            self.method,
            self.nodes_visited,
            self.num_nodes,
            self.tour_distance
        );
        println!("{}", self.string);
        if self.is_valid() {
            println!(
                "{}: length {} (recursive construction gives {})",
                "Valid superpermutation".bright_green(),
                self.string.len(),
                self.baseline_len
            );
        } else {
            println!(
                "{}: {} permutations missing, e.g. {}",
                "NOT a superpermutation".bright_red(),
                BigNumInt(self.missing.len()),
                self.missing.iter().take(5).join(", ")
            );
        }
        println!(
            "Graph built in {}; search ran in {}",
            PrettyDuration(self.build_time),
            PrettyDuration(self.search_time)
        );
    }
}
