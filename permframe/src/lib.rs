//! Idiomatic Rust representations of the primitives used when hunting for superpermutations: a
//! type-safe [`Symbol`], a validated [`Alphabet`] and an immutable [`Perm`]utation, along with the
//! overlap maths (distance, merge, validity checking) that the search engines are built on.

#![deny(clippy::all)]

mod alphabet;
mod overlap;
mod perm;
mod symbol;

pub use alphabet::{Alphabet, InvalidAlphabetSize};
pub use overlap::{
    is_superperm, merge, missing_perms, overlap_distance, path_to_string, recursive_superperm,
};
pub use perm::{InvalidPermError, Perm};
pub use symbol::Symbol;
