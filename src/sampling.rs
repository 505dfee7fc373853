//! Draw a single random tuple of a [`Structure`] without enumerating the others.
use rand::{Rng, seq::index};

use crate::{
    container::{Container, Sequence},
    error::GenerateError,
    index::IndexTuple,
    project::project,
    structure::Structure,
};

///A uniformly random index tuple of `structure` over `[0, n)`.
///
///Permutations come out in random order, both kinds of combination come out sorted, exactly as
///they would appear in the enumeration.
pub fn sample_indices<R: Rng + ?Sized>(
    structure: Structure,
    n: usize,
    power: usize,
    rng: &mut R,
) -> Result<IndexTuple, GenerateError> {
    if power == 0 {
        return Ok(vec![]);
    }
    if n == 0 {
        return Err(GenerateError::EmptyInput { structure, power });
    }
    let too_long = GenerateError::PowerExceedsLength {
        structure,
        n,
        power,
    };

    match structure {
        Structure::Product => Ok((0..power).map(|_| rng.random_range(0..n)).collect()),
        Structure::Permutations => {
            if power > n {
                return Err(too_long);
            }
            Ok(index::sample(rng, n, power).into_vec())
        }
        Structure::Combinations => {
            if power > n {
                return Err(too_long);
            }
            let mut t = index::sample(rng, n, power).into_vec();
            t.sort_unstable();
            Ok(t)
        }
        Structure::CombinationsWithReplacement => {
            // stars and bars: a combination over n + power - 1 positions, shifted down by rank
            let stretched = n
                .checked_add(power - 1)
                .ok_or(GenerateError::Overflow {
                    structure,
                    n,
                    power,
                })?;
            let mut t = index::sample(rng, stretched, power).into_vec();
            t.sort_unstable();
            Ok(t.into_iter().enumerate().map(|(rank, i)| i - rank).collect())
        }
    }
}

///A uniformly random tuple of `structure` from the elements of `xs`.
///
///```
///use rand::SeedableRng;
///use seqgen::{Structure, sampling::sample};
///
///let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///let s: String = sample(Structure::Permutations, 3, "ABCDE", &mut rng)?;
///assert_eq!(s.len(), 3);
///# Ok::<(), seqgen::GenerateError>(())
///```
pub fn sample<S, Out, R>(
    structure: Structure,
    power: usize,
    xs: &S,
    rng: &mut R,
) -> Result<Out, GenerateError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    Out: Container<S::Item>,
    R: Rng + ?Sized,
{
    let elements: Vec<S::Item> = xs.convert();
    let indices = sample_indices(structure, elements.len(), power, rng)?;
    Ok(project(&indices, &elements))
}
