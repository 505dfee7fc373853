//! Generate sequences from other sequences.
//!
//! The main entry points enumerate every tuple of a given length ("power") drawn from a
//! sequence's elements, as a full Cartesian product, as permutations, as combinations, or as
//! combinations with replacement:
//!
//!```
//!use seqgen::{combinations_with_replacement, product};
//!
//!let xs: Vec<String> = product(2, "AB");
//!assert_eq!(xs, ["AA", "AB", "BA", "BB"]);
//!
//!let xs: Vec<Vec<u8>> = combinations_with_replacement(2, &[1, 2]);
//!assert_eq!(xs, [vec![1, 1], vec![1, 2], vec![2, 2]]);
//!```
//!
//! Enumeration works on positions and only looks elements up at the end, so any element type
//! works and the output container can differ from the input one. Alongside these live a few
//! simpler generators ([`generate`], [`repeat`], [`infixes`], [`fill_left`], ...) built on the
//! same [`Sequence`]/[`Container`] pair.
pub mod container;
pub mod enumerate;
mod error;
pub mod generate;
pub mod index;
pub mod project;
#[cfg(feature = "sampling")]
pub mod sampling;
pub mod structure;

pub use container::{Container, Sequence};
#[cfg(feature = "rayon")]
pub use enumerate::par_enumerate;
pub use enumerate::{
    Enumeration, combinations, combinations_with_replacement, enumerate, permutations, product,
};
pub use error::GenerateError;
pub use generate::{
    fill_left, fill_right, generate, generate_by_idx, infixes, repeat, replicate, try_infixes,
};
pub use structure::Structure;
