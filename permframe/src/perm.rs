//! An owned, immutable permutation.

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::Symbol;

/// An owned ordering of distinct [`Symbol`]s, used both as a graph-node identity and as a string
/// fragment.  `Perm`s are immutable once created; equality and ordering are lexicographic on the
/// symbol sequence.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Perm {
    /// The [`Symbol`]s in order.  Because of the 'valid permutation' invariant, this can't
    /// contain duplicates and can't be empty.
    symbols: Vec<Symbol>,
}

impl Perm {
    /// Parses a string of symbol names (e.g. `"1324"`) into a `Perm`, failing if any [`char`]
    /// isn't a valid symbol name or if a symbol repeats.
    pub fn parse(s: &str) -> Result<Self, InvalidPermError> {
        let symbols = s
            .chars()
            .map(|c| Symbol::from_name(c).ok_or(InvalidPermError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_symbols(symbols)
    }

    /// Creates a `Perm` from an [`Iterator`] of [`Symbol`]s, failing if the sequence is empty or
    /// contains a duplicate.
    pub fn from_symbols(
        symbols: impl IntoIterator<Item = Symbol>,
    ) -> Result<Self, InvalidPermError> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(InvalidPermError::NoSymbols);
        }
        for (i, s) in symbols.iter().enumerate() {
            if symbols[..i].contains(s) {
                return Err(InvalidPermError::DuplicateSymbol(*s));
            }
        }
        Ok(Perm { symbols })
    }

    /// Creates a `Perm` directly from a [`Vec`] of [`Symbol`]s which is already known to be
    /// valid (e.g. one generated by [`Alphabet::perms`](crate::Alphabet::perms)).
    pub(crate) fn from_symbol_vec(symbols: Vec<Symbol>) -> Self {
        debug_assert!(!symbols.is_empty());
        debug_assert!((1..symbols.len()).all(|i| !symbols[..i].contains(&symbols[i])));
        Perm { symbols }
    }

    /// The number of [`Symbol`]s in this `Perm`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// `Perm`s are never empty, so this always returns `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// A slice over the [`Symbol`]s of this `Perm`, in order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Display for Perm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for s in &self.symbols {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

impl Debug for Perm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Perm({})", self)
    }
}

impl FromStr for Perm {
    type Err = InvalidPermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The different ways a string can fail to be a [`Perm`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvalidPermError {
    /// A [`char`] isn't a valid [`Symbol`] name
    InvalidSymbol(char),
    /// The same [`Symbol`] appeared twice
    DuplicateSymbol(Symbol),
    /// The sequence was empty
    NoSymbols,
}

impl Display for InvalidPermError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            InvalidPermError::InvalidSymbol(c) => write!(f, "{:?} is not a valid symbol name", c),
            InvalidPermError::DuplicateSymbol(s) => write!(f, "symbol {} appears twice", s),
            InvalidPermError::NoSymbols => write!(f, "a permutation can't be empty"),
        }
    }
}

impl std::error::Error for InvalidPermError {}

#[cfg(test)]
mod tests {
    use super::{InvalidPermError, Perm};
    use crate::Symbol;

    #[test]
    fn parse_ok() {
        #[track_caller]
        fn check(inp_str: &str) {
            let perm = Perm::parse(inp_str).unwrap();
            assert_eq!(perm.to_string(), inp_str);
            assert_eq!(perm.len(), inp_str.len());
        }

        check("1");
        check("12");
        check("21");
        check("164589237");
        check("A1Z");
    }

    #[test]
    fn parse_err() {
        assert_eq!(Perm::parse(""), Err(InvalidPermError::NoSymbols));
        assert_eq!(
            Perm::parse("11"),
            Err(InvalidPermError::DuplicateSymbol(Symbol::from_index(0)))
        );
        assert_eq!(
            Perm::parse("124523"),
            Err(InvalidPermError::DuplicateSymbol(Symbol::from_index(1)))
        );
        assert_eq!(Perm::parse("12a"), Err(InvalidPermError::InvalidSymbol('a')));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut perms = ["213", "123", "321", "132"]
            .iter()
            .map(|s| Perm::parse(s).unwrap())
            .collect::<Vec<_>>();
        perms.sort();
        let sorted = perms.iter().map(Perm::to_string).collect::<Vec<_>>();
        assert_eq!(sorted, ["123", "132", "213", "321"]);
    }
}
