//! Error types for the different ways that a superpermutation search can fail.

use std::fmt::{Display, Formatter};

use permframe::InvalidAlphabetSize;

/// Alias for `Result<T, superperm::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The different ways that a superpermutation search can fail.  Note that an *incomplete* tour
/// is deliberately not an error: the heuristics may legitimately produce partial coverage, which
/// is surfaced as data through [`Tour`](crate::Tour) and checked by the downstream validator.
#[derive(Debug)]
pub enum Error {
    /* GRAPH BUILD ERRORS */
    /// The requested alphabet size can't be represented
    InvalidAlphabetSize(InvalidAlphabetSize),

    /* PARAMETER ERRORS */
    /// Some colony parameter is outside its required domain (e.g. `decay` not in `(0, 1]`)
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidAlphabetSize(e) => write!(f, "{}", e),
            Error::InvalidParameter {
                name,
                value,
                requirement,
            } => write!(f, "parameter `{}` is {}, but must be {}", name, value, requirement),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidAlphabetSize> for Error {
    fn from(e: InvalidAlphabetSize) -> Self {
        Error::InvalidAlphabetSize(e)
    }
}
