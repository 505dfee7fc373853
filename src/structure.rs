//! The four combinatorial structures, each a filter over the full product of index space.
use std::{fmt::Display, str::FromStr};

use ahash::HashSet;
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

///Which tuples of the Cartesian power are kept.
///
///The ordering predicates compare positions, not element values, so combinations of an unsorted
///sequence come out in source order rather than sorted by value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    ///Every tuple: positions may repeat and come in any order.
    #[default]
    Product,
    ///Ordered tuples without repeats.
    Permutations,
    ///Unordered selections without repeats (strictly increasing positions).
    Combinations,
    ///Unordered selections with repeats (non-decreasing positions).
    CombinationsWithReplacement,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::Product,
        Structure::Permutations,
        Structure::Combinations,
        Structure::CombinationsWithReplacement,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Structure::Product => "product",
            Structure::Permutations => "permutations",
            Structure::Combinations => "combinations",
            Structure::CombinationsWithReplacement => "combinations_with_replacement",
        }
    }

    ///Whether `indices` belongs to this structure.
    #[must_use]
    pub fn admits(self, indices: &[usize]) -> bool {
        match self {
            Structure::Product => true,
            Structure::Permutations => all_distinct(indices),
            Structure::Combinations => strictly_increasing(indices),
            Structure::CombinationsWithReplacement => non_decreasing(indices),
        }
    }

    ///How many tuples of length `power` over `n` elements this structure has.
    ///
    /// - product: `n^power`
    /// - permutations: `n!/(n-power)!`, or 0 when `power > n`
    /// - combinations: `C(n, power)`, or 0 when `power > n`
    /// - combinations with replacement: `C(n + power - 1, power)`
    ///
    ///`power == 0` always counts the single empty tuple.
    pub fn count(self, n: usize, power: usize) -> Result<usize, GenerateError> {
        let overflow = GenerateError::Overflow {
            structure: self,
            n,
            power,
        };
        if power == 0 {
            return Ok(1);
        }
        match self {
            Structure::Product => match n {
                0 | 1 => Ok(n),
                _ => u32::try_from(power)
                    .ok()
                    .and_then(|p| n.checked_pow(p))
                    .ok_or(overflow),
            },
            Structure::Permutations => {
                if power > n {
                    return Ok(0);
                }
                (n - power + 1..=n)
                    .try_fold(1usize, |acc, x| acc.checked_mul(x))
                    .ok_or(overflow)
            }
            Structure::Combinations => {
                if power > n {
                    return Ok(0);
                }
                binomial(n, power).ok_or(overflow)
            }
            Structure::CombinationsWithReplacement => {
                if n == 0 {
                    return Ok(0);
                }
                (n - 1)
                    .checked_add(power)
                    .and_then(|top| binomial(top, power))
                    .ok_or(overflow)
            }
        }
    }
}

fn binomial(n: usize, k: usize) -> Option<usize> {
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc is C(n, i) here, so the division is exact
        acc = acc.checked_mul(n - i)? / (i + 1);
    }
    usize::try_from(acc).ok()
}

impl Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Structure {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Structure::ALL
            .into_iter()
            .find(|x| x.name() == s.trim())
            .ok_or_else(|| GenerateError::UnknownStructure(s.to_string()))
    }
}

///No position appears twice.
#[must_use]
pub fn all_distinct(indices: &[usize]) -> bool {
    if indices.len() < 2 {
        return true;
    }
    let mut seen: HashSet<usize> = HashSet::default();
    seen.reserve(indices.len());
    indices.iter().all(|i| seen.insert(*i))
}

#[must_use]
pub fn strictly_increasing(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
}

#[must_use]
pub fn non_decreasing(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] <= w[1])
}
