use thiserror::Error;

use crate::structure::Structure;

///Errors from the checked entry points of the crate.
///
///The plain entry points treat these conditions as programming errors and panic (or return an
///empty result, where that is the natural answer).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    ///Windows of length zero were requested.
    #[error("Infix length must be greater than zero")]
    ZeroInfixLength,
    ///The number of tuples doesn't fit in a `usize`.
    #[error("Counting {structure} of length {power} over {n} elements overflows")]
    Overflow {
        structure: Structure,
        n: usize,
        power: usize,
    },
    ///The structure admits no tuple of this length.
    #[error("Can't draw {structure} of length {power} from only {n} elements!")]
    PowerExceedsLength {
        structure: Structure,
        n: usize,
        power: usize,
    },
    ///Nothing to draw from.
    #[error("Can't draw {structure} of length {power} from an empty sequence!")]
    EmptyInput { structure: Structure, power: usize },
    #[error("Unknown structure \"{0}\"")]
    UnknownStructure(String),
}
