//! Parsing of the TOML files which describe a search.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use superperm::Parameters;

/// The contents of a search file: which graph to build and which search to run over it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchFile {
    /// The `n` in 'superpermutation of `n` symbols'
    pub alphabet_size: usize,
    /// If set, edges with no overlap at all are excluded from the graph.  This shrinks the
    /// search space but means tours are no longer guaranteed to cover every permutation.
    #[serde(default)]
    pub proper_only: bool,
    /// Which search to run over the graph
    #[serde(default)]
    pub method: Method,
    /// Start permutation for the greedy search (defaults to the lexicographically first one).
    /// Ignored when `method = "aco"`.
    #[serde(default)]
    pub greedy_start: Option<String>,
    /// Parameters for the ant colony.  Ignored when `method = "greedy"`.
    #[serde(default)]
    pub aco: AcoSection,
}

impl SearchFile {
    pub fn read_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("couldn't read search file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("couldn't parse {:?}", path))
    }
}

/// The different search methods a file can request
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Deterministic nearest-neighbour baseline
    Greedy,
    /// Ant Colony Optimisation
    #[default]
    Aco,
}

/// The `[aco]` table of a search file.  Every field is optional; the defaults mirror
/// [`Parameters::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AcoSection {
    pub alpha: f64,
    pub beta: f64,
    pub decay: f64,
    pub ants: usize,
    pub epochs: usize,
    pub elite: usize,
    pub seed: Option<u64>,
}

impl AcoSection {
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            alpha: self.alpha,
            beta: self.beta,
            decay: self.decay,
            n_ants: self.ants,
            n_epochs: self.epochs,
            elite_k: self.elite,
            seed: self.seed,
        }
    }
}

impl Default for AcoSection {
    fn default() -> Self {
        let params = Parameters::default();
        AcoSection {
            alpha: params.alpha,
            beta: params.beta,
            decay: params.decay,
            ants: params.n_ants,
            epochs: params.n_epochs,
            elite: params.elite_k,
            seed: params.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Method, SearchFile};

    #[test]
    fn minimal_file() {
        let file: SearchFile = toml::from_str("alphabet_size = 4").unwrap();
        assert_eq!(file.alphabet_size, 4);
        assert!(!file.proper_only);
        assert_eq!(file.method, Method::Aco);
        assert!(file.aco.to_parameters().validate().is_ok());
    }

    #[test]
    fn full_file() {
        let file: SearchFile = toml::from_str(
            r#"
            alphabet_size = 5
            proper_only = true
            method = "greedy"
            greedy_start = "12345"

            [aco]
            alpha = 2.0
            beta = 3.0
            decay = 0.2
            ants = 25
            epochs = 500
            elite = 5
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(file.alphabet_size, 5);
        assert!(file.proper_only);
        assert_eq!(file.method, Method::Greedy);
        assert_eq!(file.greedy_start.as_deref(), Some("12345"));

        let params = file.aco.to_parameters();
        assert_eq!(params.alpha, 2.0);
        assert_eq!(params.n_ants, 25);
        assert_eq!(params.seed, Some(42));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<SearchFile>("alphabet_size = 3\nnum_legs = 6").is_err());
        assert!(toml::from_str::<SearchFile>("alphabet_size = 3\n[aco]\nrho = 0.5").is_err());
    }
}
