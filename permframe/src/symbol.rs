//! A type-safe representation of an alphabet symbol.

use std::fmt::{Debug, Display, Formatter};

/// A lookup string of the symbol names: the digits `1`-`9` followed by the upper-case letters.
/// `0` is deliberately left out so that the first nine symbols read as the numbers people expect
/// when they write out small superpermutations by hand.
pub(crate) const SYMBOL_NAMES: &str = "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A type-safe representation of a single symbol from an [`Alphabet`](crate::Alphabet), which
/// adds conversions to and from the commonly-used symbol names.  Each `Symbol` takes a single
/// byte in memory.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol {
    /// A zero-indexed number representing this `Symbol`.  The symbol displayed as `1` is always
    /// `Symbol { index: 0 }`, and the symbol displayed as `A` is `Symbol { index: 9 }`.
    index: u8,
}

impl Symbol {
    /// Creates a `Symbol` from a [`char`] containing a symbol name (e.g. `'4'` or `'B'`),
    /// returning `None` if the name isn't valid.  Lower case [`char`]s are not considered valid
    /// symbol names.
    pub fn from_name(c: char) -> Option<Symbol> {
        SYMBOL_NAMES
            .chars()
            .position(|x| x == c)
            .map(|v| Symbol::from_index(v as u8))
    }

    /// Creates a `Symbol` from a 0-indexed integer.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than the number of symbol names (i.e. the largest
    /// possible [`Alphabet`](crate::Alphabet)).
    #[inline]
    pub fn from_index(index: u8) -> Symbol {
        assert!(
            (index as usize) < SYMBOL_NAMES.len(),
            "`Symbol`s with index >= {} can't be created",
            SYMBOL_NAMES.len()
        );
        Symbol { index }
    }

    /// The 0-indexed number representing this `Symbol`.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// The [`char`] used to display this `Symbol`.
    pub fn name(self) -> char {
        // Unwrap is safe because of the `from_index` assertion
        SYMBOL_NAMES.chars().nth(self.index()).unwrap()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Symbol({})", self.name())
    }
}
