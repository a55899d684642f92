//! A type-safe representation of an alphabet size (the `n` in "superpermutation of `n` symbols").

use std::fmt::{Display, Formatter};

use factorial::Factorial;
use itertools::Itertools;

use crate::{symbol::SYMBOL_NAMES, Perm, Symbol};

/// The set of the first `n` [`Symbol`]s, from which [`Perm`]utations are drawn.  An `Alphabet`
/// can only be constructed through [`Alphabet::new`], which enforces that the size is supported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphabet {
    num_symbols: u8,
}

impl Alphabet {
    /// The largest supported alphabet size.  This is the number of printable symbol names; in
    /// practice the `O((n!)^2)` cost of graph construction caps useful sizes at around 7.
    pub const MAX_SIZE: usize = SYMBOL_NAMES.len();

    /// Creates an `Alphabet` of `n` symbols, failing with [`InvalidAlphabetSize`] unless
    /// `1 <= n <= 35`.
    pub fn new(n: usize) -> Result<Self, InvalidAlphabetSize> {
        if (1..=Self::MAX_SIZE).contains(&n) {
            Ok(Alphabet {
                num_symbols: n as u8,
            })
        } else {
            Err(InvalidAlphabetSize(n))
        }
    }

    /// The number of [`Symbol`]s in this `Alphabet`.
    #[inline]
    pub fn size(self) -> usize {
        self.num_symbols as usize
    }

    /// An [`Iterator`] over the [`Symbol`]s of this `Alphabet`, in increasing order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        (0..self.num_symbols).map(Symbol::from_index)
    }

    /// The number of [`Perm`]utations of this `Alphabet` (i.e. `n!`), or `None` if that
    /// overflows a `usize`.
    pub fn num_perms(self) -> Option<usize> {
        self.size().checked_factorial()
    }

    /// Every [`Perm`]utation of this `Alphabet`, in lexicographic order.  This allocates all
    /// `n!` of them, so callers should keep `n` small.
    pub fn perms(self) -> Vec<Perm> {
        self.symbols()
            .permutations(self.size())
            .map(Perm::from_symbol_vec)
            .collect_vec()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.num_symbols)
    }
}

/// Error created when attempting to make an [`Alphabet`] of an unsupported size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidAlphabetSize(pub usize);

impl Display for InvalidAlphabetSize {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "alphabet size {} is outside the supported range 1..={}",
            self.0,
            Alphabet::MAX_SIZE
        )
    }
}

impl std::error::Error for InvalidAlphabetSize {}

#[cfg(test)]
mod tests {
    use super::{Alphabet, InvalidAlphabetSize};

    #[test]
    fn sizes() {
        assert_eq!(Alphabet::new(0), Err(InvalidAlphabetSize(0)));
        assert_eq!(Alphabet::new(36), Err(InvalidAlphabetSize(36)));
        assert_eq!(Alphabet::new(3).unwrap().size(), 3);
        assert_eq!(Alphabet::new(35).unwrap().size(), 35);
    }

    #[test]
    fn num_perms() {
        assert_eq!(Alphabet::new(1).unwrap().num_perms(), Some(1));
        assert_eq!(Alphabet::new(3).unwrap().num_perms(), Some(6));
        assert_eq!(Alphabet::new(7).unwrap().num_perms(), Some(5040));
        // 35! doesn't fit in a `usize`
        assert_eq!(Alphabet::new(35).unwrap().num_perms(), None);
    }

    #[test]
    fn perms_are_sorted_and_distinct() {
        let perms = Alphabet::new(4).unwrap().perms();
        assert_eq!(perms.len(), 24);
        assert!(perms.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(perms[0].to_string(), "1234");
        assert_eq!(perms[23].to_string(), "4321");
    }
}
