//! Cartesian products, permutations and combinations of a sequence's elements.
//!
//! All of these run over positions first ([`crate::index`]), keep the tuples their
//! [`Structure`] admits, and only then look up the elements. The output size grows explosively
//! with `power` (see [`Structure::count`]); these are meant for small inputs.
use std::marker::PhantomData;

use log::{debug, warn};

use crate::{
    container::{Container, Sequence},
    index::{IndexTuples, product_indices},
    project::project,
    structure::Structure,
};

///Above this many raw index tuples a warning is logged before enumerating.
pub const LARGE_PRODUCT: usize = 1 << 24;

fn warn_if_large(structure: Structure, n: usize, power: usize) {
    match Structure::Product.count(n, power) {
        Ok(total) if total <= LARGE_PRODUCT => (),
        Ok(total) => warn!(
            "Enumerating {structure} of length {power} over {n} elements walks {total} index tuples"
        ),
        Err(e) => warn!("Enumerating {structure} of length {power} over {n} elements: {e}"),
    }
}

///Every tuple of length `power` from `xs` that `structure` admits, in mixed-radix order.
///
///```
///use seqgen::{Structure, enumerate};
///
///let xs: Vec<String> = enumerate(Structure::Permutations, 2, "ABC");
///assert_eq!(xs, ["AB", "AC", "BA", "BC", "CA", "CB"]);
///```
pub fn enumerate<S, Out>(structure: Structure, power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
{
    let elements: Vec<S::Item> = xs.convert();
    let n = elements.len();
    let expected = structure.count(n, power).ok();
    debug!("Enumerating {structure} of length {power} over {n} elements ({expected:?} tuples)");
    warn_if_large(structure, n, power);

    let mut out = Vec::with_capacity(expected.unwrap_or_default());
    out.extend(
        product_indices(n, power)
            .into_iter()
            .filter(|t| structure.admits(t))
            .map(|t| project(&t, &elements)),
    );
    out
}

///`product(2, "AB") == ["AA", "AB", "BA", "BB"]`
pub fn product<S, Out>(power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
{
    enumerate(Structure::Product, power, xs)
}

///`permutations(2, "ABC") == ["AB", "AC", "BA", "BC", "CA", "CB"]`
pub fn permutations<S, Out>(power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
{
    enumerate(Structure::Permutations, power, xs)
}

///`combinations(2, "ABC") == ["AB", "AC", "BC"]`
pub fn combinations<S, Out>(power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
{
    enumerate(Structure::Combinations, power, xs)
}

///`combinations_with_replacement(2, "AB") == ["AA", "AB", "BB"]`
pub fn combinations_with_replacement<S, Out>(power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
{
    enumerate(Structure::CombinationsWithReplacement, power, xs)
}

///[`enumerate`] with filtering and projection spread over rayon's thread pool.
///
///The output is identical to [`enumerate`], order included.
#[cfg(feature = "rayon")]
pub fn par_enumerate<S, Out>(structure: Structure, power: usize, xs: &S) -> Vec<Out>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Send + Sync,
    Out: Container<S::Item> + Send,
{
    use rayon::prelude::*;

    let elements: Vec<S::Item> = xs.convert();
    let n = elements.len();
    debug!("Enumerating {structure} of length {power} over {n} elements in parallel");
    warn_if_large(structure, n, power);

    product_indices(n, power)
        .into_par_iter()
        .filter(|t| structure.admits(t))
        .map(|t| project(&t, &elements))
        .collect()
}

///Lazily enumerate a [`Structure`] over a sequence.
///
///Yields exactly what [`enumerate`] returns, in the same order, without holding the whole index
///space in memory.
///
///```
///use seqgen::{Enumeration, Structure};
///
///let mut e: Enumeration<char, String> = Enumeration::new(Structure::Combinations, 2, "ABCD");
///assert_eq!(e.next().as_deref(), Some("AB"));
///assert_eq!(e.count(), 5);
///```
#[derive(Debug, Clone)]
pub struct Enumeration<T, Out = Vec<T>> {
    structure: Structure,
    tuples: IndexTuples,
    elements: Vec<T>,
    out: PhantomData<fn() -> Out>,
}

impl<T: Clone, Out: Container<T>> Enumeration<T, Out> {
    pub fn new<S>(structure: Structure, power: usize, xs: &S) -> Self
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let elements: Vec<T> = xs.convert();
        Enumeration {
            structure,
            tuples: IndexTuples::new(elements.len(), power),
            elements,
            out: PhantomData,
        }
    }

    #[must_use]
    pub fn structure(&self) -> Structure {
        self.structure
    }
}

impl<T: Clone, Out: Container<T>> Iterator for Enumeration<T, Out> {
    type Item = Out;

    fn next(&mut self) -> Option<Self::Item> {
        let structure = self.structure;
        let t = self.tuples.find(|t| structure.admits(t))?;
        Some(project(&t, &self.elements))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn two_letters() {
        let xs: Vec<String> = product(2, "AB");
        assert_eq!(xs, ["AA", "AB", "BA", "BB"]);
        let xs: Vec<String> = permutations(2, "AB");
        assert_eq!(xs, ["AB", "BA"]);
        let xs: Vec<String> = combinations(2, "AB");
        assert_eq!(xs, ["AB"]);
        let xs: Vec<String> = combinations_with_replacement(2, "AB");
        assert_eq!(xs, ["AA", "AB", "BB"]);
    }

    #[test]
    fn four_letters() {
        let xs: Vec<String> = product(2, "ABCD");
        assert_eq!(
            xs,
            [
                "AA", "AB", "AC", "AD", "BA", "BB", "BC", "BD", "CA", "CB", "CC", "CD", "DA",
                "DB", "DC", "DD"
            ]
        );
        let xs: Vec<String> = permutations(2, "ABCD");
        assert_eq!(
            xs,
            ["AB", "AC", "AD", "BA", "BC", "BD", "CA", "CB", "CD", "DA", "DB", "DC"]
        );
        let xs: Vec<String> = combinations(2, "ABCD");
        assert_eq!(xs, ["AB", "AC", "AD", "BC", "BD", "CD"]);
        let xs: Vec<String> = combinations_with_replacement(2, "ABCD");
        assert_eq!(
            xs,
            ["AA", "AB", "AC", "AD", "BB", "BC", "BD", "CC", "CD", "DD"]
        );
    }

    #[test]
    fn element_and_container_kinds() {
        let xs: Vec<Vec<i32>> = combinations(2, &vec![10, 20, 30]);
        assert_eq!(xs, vec![vec![10, 20], vec![10, 30], vec![20, 30]]);

        let xs: Vec<Vec<char>> = permutations(1, "xy");
        assert_eq!(xs, vec![vec!['x'], vec!['y']]);

        let d = VecDeque::from(vec![1, 2]);
        let xs: Vec<VecDeque<i32>> = product(2, &d);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[1], VecDeque::from(vec![1, 2]));
    }

    #[test]
    fn positions_not_values() {
        // unsorted input keeps source order
        let xs: Vec<String> = combinations(2, "CAB");
        assert_eq!(xs, ["CA", "CB", "AB"]);

        // equal elements at different positions still count as distinct
        let xs: Vec<String> = permutations(2, "AA");
        assert_eq!(xs, ["AA", "AA"]);
    }

    #[test]
    fn edge_cases() {
        for s in Structure::ALL {
            let xs: Vec<String> = enumerate(s, 0, "ABC");
            assert_eq!(xs, [""], "{s}");
            let xs: Vec<String> = enumerate(s, 0, "");
            assert_eq!(xs, [""], "{s}");
            let xs: Vec<String> = enumerate(s, 2, "");
            assert!(xs.is_empty(), "{s}");
        }
        let xs: Vec<String> = permutations(4, "ABC");
        assert!(xs.is_empty());
        let xs: Vec<String> = combinations(4, "ABC");
        assert!(xs.is_empty());
        let xs: Vec<String> = combinations_with_replacement(4, "A");
        assert_eq!(xs, ["AAAA"]);
    }

    #[test]
    fn lazy_matches_eager() {
        for s in Structure::ALL {
            for power in 0..4 {
                let eager: Vec<String> = enumerate(s, power, "ABCD");
                let lazy: Vec<String> =
                    Enumeration::<char, String>::new(s, power, "ABCD").collect();
                assert_eq!(eager, lazy, "{s} of length {power}");
            }
        }
        let e: Enumeration<i32> = Enumeration::new(Structure::Permutations, 2, &[1, 2, 3]);
        assert_eq!(e.structure(), Structure::Permutations);
        assert_eq!(e.count(), 6);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        for s in Structure::ALL {
            let seq: Vec<Vec<u8>> = enumerate(s, 3, &[1u8, 2, 3, 4, 5]);
            let par: Vec<Vec<u8>> = par_enumerate(s, 3, &[1u8, 2, 3, 4, 5]);
            assert_eq!(seq, par, "{s}");
        }
    }
}
