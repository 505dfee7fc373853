//! Index space: every tuple of positions `[0, n)` of a given length.
//!
//! Nothing in here ever looks at an element; the tuples are positions into whatever sequence the
//! caller projects them onto afterwards (see [`crate::project`]).
use itertools::repeat_n;
use log::trace;

///An ordered run of positions, one per slot.
pub type IndexTuple = Vec<usize>;

///All index tuples of length `power` over `[0, n)`, with the last slot varying fastest.
///
///Starts from the singletons and appends every index to every tuple `power - 1` times, so the
///result has `n^power` tuples. Both time and memory grow as `power * n^power`; reach for
///[`IndexTuples`] if the tuples don't all need to be alive at once.
///
///`power == 0` gives a single empty tuple (for any `n`), and `n == 0` with `power >= 1` gives
///nothing.
#[must_use]
pub fn product_indices(n: usize, power: usize) -> Vec<IndexTuple> {
    if power == 0 {
        return vec![vec![]];
    }

    let mut acc: Vec<IndexTuple> = (0..n)
        .map(|i| {
            let mut t = Vec::with_capacity(power);
            t.push(i);
            t
        })
        .collect();

    for length in 2..=power {
        trace!(
            "Expanding {} index tuples to length {length} over {n} indices",
            acc.len()
        );
        let mut next = Vec::with_capacity(acc.len().saturating_mul(n));
        for a in acc {
            for (mut t, i) in repeat_n(a, n).zip(0..n) {
                t.push(i);
                next.push(t);
            }
        }
        acc = next;
    }
    acc
}

///Lazy version of [`product_indices`]: same tuples, same order, one at a time.
///
///Works like an odometer over `power` digits in base `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTuples {
    coord: IndexTuple,
    done: bool,
    n: usize,
}

impl IndexTuples {
    #[must_use]
    pub fn new(n: usize, power: usize) -> Self {
        Self {
            coord: vec![0; power],
            done: n == 0 && power > 0,
            n,
        }
    }

    #[must_use]
    pub fn power(&self) -> usize {
        self.coord.len()
    }

    ///Size of the index universe.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Iterator for IndexTuples {
    type Item = IndexTuple;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let out = self.coord.clone();

        // least significant digit at the end
        let mut i = self.coord.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            self.coord[i] += 1;
            if self.coord[i] < self.n {
                break;
            }
            self.coord[i] = 0;
        }

        Some(out)
    }
}

impl std::iter::FusedIterator for IndexTuples {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_radix_order() {
        assert_eq!(
            product_indices(2, 2),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
        assert_eq!(
            product_indices(3, 2),
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
                vec![2, 0],
                vec![2, 1],
                vec![2, 2],
            ]
        );
        assert_eq!(product_indices(3, 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(product_indices(0, 0), vec![Vec::<usize>::new()]);
        assert_eq!(product_indices(4, 0), vec![Vec::<usize>::new()]);
        assert!(product_indices(0, 1).is_empty());
        assert!(product_indices(0, 3).is_empty());
        assert_eq!(product_indices(1, 3), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn lazy_matches_eager() {
        for n in 0..4 {
            for power in 0..4 {
                let lazy: Vec<_> = IndexTuples::new(n, power).collect();
                assert_eq!(lazy, product_indices(n, power), "n={n} power={power}");
            }
        }
    }

    #[test]
    fn lazy_is_fused() {
        let mut tuples = IndexTuples::new(2, 1);
        assert_eq!(tuples.power(), 1);
        assert_eq!(tuples.n(), 2);
        assert_eq!(tuples.next(), Some(vec![0]));
        assert_eq!(tuples.next(), Some(vec![1]));
        assert_eq!(tuples.next(), None);
        assert_eq!(tuples.next(), None);
    }
}
