//! The overlap maths underpinning superpermutation search: asymmetric overlap distance between
//! permutations, largest-overlap string merging, and validity checking of candidate strings.

use factorial::Factorial;

use crate::{Alphabet, Perm, Symbol};

/// The number of symbols that must be appended to `p` so that the resulting string contains `q`
/// as the next permutation, i.e. the smallest `i >= 0` such that the last `len - i` symbols of
/// `p` equal the first `len - i` symbols of `q`.  Always in `[0, len]`, with
/// `overlap_distance(p, p) == 0` and `len` meaning 'no overlap at all'.  Note that this is
/// asymmetric: `overlap_distance(p, q) != overlap_distance(q, p)` in general.
///
/// For example, `overlap_distance("123", "231") == 1` because appending `1` to `123` gives
/// `1231`, which ends with `231`.
///
/// # Panics
///
/// Panics if `p` and `q` have different lengths.
pub fn overlap_distance(p: &Perm, q: &Perm) -> usize {
    assert_eq!(p.len(), q.len(), "can't compare perms of different lengths");
    let (ps, qs) = (p.symbols(), q.symbols());
    (0..p.len())
        .find(|&i| ps[i..] == qs[..p.len() - i])
        .unwrap_or(p.len())
}

/// Concatenates two strings, collapsing the largest overlap between the end of `s1` and the
/// start of `s2`.  The result always starts with `s1` (minus nothing) and ends with `s2`, and
/// has length `s1.len() + s2.len() - overlap`.
pub fn merge(s1: &str, s2: &str) -> String {
    let smallest = s1.len().min(s2.len());
    for overlap in (1..=smallest).rev() {
        if s1.ends_with(&s2[..overlap]) {
            return format!("{}{}", s1, &s2[overlap..]);
        }
    }
    format!("{}{}", s1, s2)
}

/// Collapses a path of [`Perm`]utations into a single candidate superpermutation string by
/// repeatedly [`merge`]ing with the largest overlap.
pub fn path_to_string(path: &[Perm]) -> String {
    let mut string = String::new();
    for perm in path {
        string = merge(&string, &perm.to_string());
    }
    string
}

/// `true` if `s` contains every [`Perm`]utation of `alphabet` as a contiguous substring (i.e.
/// `s` is a superpermutation).  This is the downstream acceptance check for any path produced by
/// the search engines.
pub fn is_superperm(alphabet: Alphabet, s: &str) -> bool {
    missing_perms(alphabet, s).is_empty()
}

/// The [`Perm`]utations of `alphabet` which do *not* occur in `s`, useful for reporting exactly
/// how far off a candidate string is.
pub fn missing_perms(alphabet: Alphabet, s: &str) -> Vec<Perm> {
    alphabet
        .perms()
        .into_iter()
        .filter(|perm| !s.contains(&perm.to_string()))
        .collect()
}

/// The classic recursive construction of a superpermutation: take the superpermutation of
/// `n - 1` symbols and, for each permutation `P` appearing in it (in order), merge in
/// `P + new_symbol + P`.  The result has length `1! + 2! + ... + n!`, which is known to be
/// optimal for `n <= 5`.  Useful as a quality baseline for the heuristic searches.
pub fn recursive_superperm(alphabet: Alphabet) -> String {
    recursive(alphabet.size())
}

fn recursive(n: usize) -> String {
    if n == 1 {
        return Symbol::from_index(0).to_string();
    }
    let prev = recursive(n - 1);
    let new_symbol = Symbol::from_index((n - 1) as u8).name();
    let num_perms = (n - 1).factorial();

    let mut superperm = String::new();
    let mut visited = 0;
    let mut i = 0;
    // Walk over every window of `prev` which is a permutation, in order.  By induction `prev`
    // contains all `(n - 1)!` of them, so this always terminates.
    while visited < num_perms {
        let window = &prev[i..(i + n - 1).min(prev.len())];
        if is_perm_window(window, n - 1) {
            visited += 1;
            superperm = merge(&superperm, &format!("{}{}{}", window, new_symbol, window));
        }
        i += 1;
    }
    superperm
}

/// `true` if `window` is a permutation of the first `n` symbols.
fn is_perm_window(window: &str, n: usize) -> bool {
    if window.len() != n {
        return false;
    }
    let mut seen = 0u64;
    for c in window.chars() {
        match Symbol::from_name(c) {
            Some(s) if s.index() < n && seen & (1 << s.index()) == 0 => seen |= 1 << s.index(),
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    use super::*;

    fn perm(s: &str) -> Perm {
        Perm::parse(s).unwrap()
    }

    fn alphabet(n: usize) -> Alphabet {
        Alphabet::new(n).unwrap()
    }

    #[test]
    fn distance_examples() {
        #[track_caller]
        fn check(p: &str, q: &str, exp_distance: usize) {
            assert_eq!(overlap_distance(&perm(p), &perm(q)), exp_distance);
        }

        check("123", "123", 0);
        check("123", "231", 1);
        check("123", "312", 2);
        check("123", "321", 2);
        check("123", "132", 3); // No overlap at all
        check("1234", "2341", 1);
        check("12345", "34521", 2);
    }

    #[test]
    fn merge_examples() {
        assert_eq!(merge("123", "231"), "1231");
        assert_eq!(merge("1231", "312"), "12312");
        assert_eq!(merge("123", "132"), "123132");
        assert_eq!(merge("", "123"), "123");
        assert_eq!(merge("121", "121"), "121");
    }

    #[test]
    fn path_to_string_example() {
        let path = ["123", "231", "312", "213", "132", "321"]
            .iter()
            .map(|s| perm(s))
            .collect::<Vec<_>>();
        assert_eq!(path_to_string(&path), "123121321");
    }

    #[test]
    fn superperm_check() {
        assert!(is_superperm(alphabet(3), "123121321"));
        assert!(!is_superperm(alphabet(3), "123121"));
        assert_eq!(
            missing_perms(alphabet(3), "123121")
                .iter()
                .map(Perm::to_string)
                .collect::<Vec<_>>(),
            ["132", "213", "321"]
        );
    }

    #[test]
    fn recursive_construction() {
        // Lengths are 1! + 2! + ... + n!
        for (n, exp_len) in [(1, 1), (2, 3), (3, 9), (4, 33), (5, 153)] {
            let s = recursive_superperm(alphabet(n));
            assert_eq!(s.len(), exp_len);
            assert!(is_superperm(alphabet(n), &s));
        }
        assert_eq!(recursive_superperm(alphabet(2)), "121");
        assert_eq!(recursive_superperm(alphabet(3)), "123121321");
    }

    /// A pair of equal-length random [`Perm`]s, for the distance/merge laws
    #[derive(Debug, Clone)]
    struct PermPair(Perm, Perm);

    impl Arbitrary for PermPair {
        fn arbitrary(g: &mut Gen) -> Self {
            let n = *g.choose(&[1usize, 2, 3, 4, 5, 6]).unwrap();
            PermPair(random_perm(g, n), random_perm(g, n))
        }
    }

    fn random_perm(g: &mut Gen, n: usize) -> Perm {
        let mut pool: Vec<Symbol> = alphabet(n).symbols().collect();
        let mut symbols = Vec::with_capacity(n);
        while !pool.is_empty() {
            let indices = (0..pool.len()).collect::<Vec<_>>();
            symbols.push(pool.remove(*g.choose(&indices).unwrap()));
        }
        Perm::from_symbols(symbols).unwrap()
    }

    #[quickcheck]
    fn distance_within_bounds(pair: PermPair) -> bool {
        let d = overlap_distance(&pair.0, &pair.1);
        d <= pair.0.len() && (overlap_distance(&pair.0, &pair.0) == 0)
    }

    #[quickcheck]
    fn distance_zero_iff_equal(pair: PermPair) -> bool {
        (overlap_distance(&pair.0, &pair.1) == 0) == (pair.0 == pair.1)
    }

    #[quickcheck]
    fn merge_length_law(pair: PermPair) -> bool {
        let (s1, s2) = (pair.0.to_string(), pair.1.to_string());
        let merged = merge(&s1, &s2);
        let overlap = pair.0.len() - overlap_distance(&pair.0, &pair.1);
        merged.len() == s1.len() + s2.len() - overlap
            && merged.starts_with(&s1[..s1.len() - overlap])
            && merged.ends_with(&s2)
    }
}
