//! Parameters determining how a [`Colony`](crate::search::Colony) explores the graph.

use crate::{Error, Result};

/// Parameters for an Ant Colony Optimisation run.  Compare this to the
/// [`Graph`](crate::graph::Graph), which determines *what* is searched; `Parameters` determine
/// *how* the colony explores it.
///
/// All parameters are carried explicitly (there is no process-wide configuration), so several
/// colonies with different parameters can run against copies of the same graph.
#[derive(Debug, Clone)]
pub struct Parameters {
    /// Exponent controlling the influence of pheromone on edge choice.  Must be positive.
    pub alpha: f64,
    /// Exponent controlling the influence of heuristic information (inverse distance) on edge
    /// choice.  Must be positive.
    pub beta: f64,
    /// Fraction of pheromone evaporating each epoch.  Must be in `(0, 1]`.
    pub decay: f64,
    /// Number of ants constructing tours each epoch
    pub n_ants: usize,
    /// Number of epochs to run
    pub n_epochs: usize,
    /// Only the best `elite_k` ants of each epoch deposit pheromone
    pub elite_k: usize,
    /// Seed for the per-ant random generators.  Running twice with the same seed (and the same
    /// graph) gives identical results; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Parameters {
    /// Fail with [`Error::InvalidParameter`] if any parameter is outside its required domain.
    /// Called at the start of every colony run, before any work happens.
    pub fn validate(&self) -> Result<()> {
        if self.alpha <= 0.0 || !self.alpha.is_finite() {
            return Err(invalid("alpha", self.alpha, "positive and finite"));
        }
        if self.beta <= 0.0 || !self.beta.is_finite() {
            return Err(invalid("beta", self.beta, "positive and finite"));
        }
        if self.decay <= 0.0 || self.decay > 1.0 || self.decay.is_nan() {
            return Err(invalid("decay", self.decay, "in (0, 1]"));
        }
        if self.n_ants == 0 {
            return Err(invalid("n_ants", 0.0, "at least 1"));
        }
        if self.n_epochs == 0 {
            return Err(invalid("n_epochs", 0.0, "at least 1"));
        }
        if self.elite_k == 0 {
            return Err(invalid("elite_k", 0.0, "at least 1"));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            alpha: 1.0,
            beta: 2.0,
            decay: 0.1,
            n_ants: 50,
            n_epochs: 100,
            elite_k: 10,
            seed: None,
        }
    }
}

fn invalid(name: &'static str, value: f64, requirement: &'static str) -> Error {
    Error::InvalidParameter {
        name,
        value,
        requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::Parameters;
    use crate::Error;

    #[track_caller]
    fn check_invalid(params: Parameters, exp_name: &str) {
        match params.validate() {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, exp_name),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn invalid_parameters() {
        check_invalid(
            Parameters {
                alpha: 0.0,
                ..Default::default()
            },
            "alpha",
        );
        check_invalid(
            Parameters {
                beta: f64::NAN,
                ..Default::default()
            },
            "beta",
        );
        check_invalid(
            Parameters {
                decay: 0.0,
                ..Default::default()
            },
            "decay",
        );
        check_invalid(
            Parameters {
                decay: 1.5,
                ..Default::default()
            },
            "decay",
        );
        check_invalid(
            Parameters {
                n_ants: 0,
                ..Default::default()
            },
            "n_ants",
        );
        check_invalid(
            Parameters {
                n_epochs: 0,
                ..Default::default()
            },
            "n_epochs",
        );
        check_invalid(
            Parameters {
                elite_k: 0,
                ..Default::default()
            },
            "elite_k",
        );
    }

    #[test]
    fn decay_of_one_is_valid() {
        let params = Parameters {
            decay: 1.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
