use thiserror::Error;

use crate::genome::ReproductionMode;

/// Error returned when an alphabet cannot be used for sequence generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Fewer than two distinct symbols were supplied.
    #[error("Alphabet needs at least 2 symbols, got {0}")]
    TooFewSymbols(usize),

    /// The same symbol was listed more than once.
    #[error("Duplicate symbol in alphabet: '{0}'")]
    DuplicateSymbol(char),
}

/// Errors that can occur when configuring mutation chances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    /// A chance was outside `[0.0, 1.0)` (or NaN).
    #[error("Invalid {0} chance: {1} (must be in [0.0, 1.0))")]
    InvalidChance(&'static str, f64),
}

/// Errors that can occur while building essential genes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneError {
    /// Genes must contain at least one symbol.
    #[error("Gene length must be at least 1")]
    ZeroLength,

    /// At least one essential gene is required.
    #[error("Essential gene count must be at least 1")]
    ZeroCount,

    /// The alphabet cannot produce this many distinct genes of this length.
    #[error("Cannot draw {count} distinct genes of length {length} from {symbols} symbols")]
    TooManyGenes {
        count: usize,
        length: usize,
        symbols: usize,
    },

    /// An explicit gene uses a symbol outside the alphabet.
    #[error("Gene '{gene}' uses symbol '{symbol}' which is not in the alphabet")]
    UnknownSymbol { gene: String, symbol: char },

    /// An explicit gene does not have the configured length.
    #[error("Gene '{gene}' has length {actual}, expected {expected}")]
    LengthMismatch {
        gene: String,
        expected: usize,
        actual: usize,
    },

    /// The same explicit gene was listed twice.
    #[error("Duplicate gene: '{0}'")]
    Duplicate(String),
}

/// Errors that can occur when generating a strand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    /// The requested length cannot hold every gene side by side.
    #[error("Strand length {length} is too short for {required} symbols of essential genes")]
    TooShort { length: usize, required: usize },
}

/// Errors that can occur when assembling an organism from strands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganismError {
    /// The number of strands does not match the reproduction mode.
    #[error("{mode} organism requires {expected} strand(s), got {actual}")]
    ModeMismatch {
        mode: ReproductionMode,
        expected: usize,
        actual: usize,
    },
}

/// Invalid simulation setup. Raised at construction time, never mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),

    #[error("Invalid mutation: {0}")]
    Mutation(#[from] MutationError),

    #[error("Invalid genes: {0}")]
    Gene(#[from] GeneError),

    #[error("Invalid strand: {0}")]
    Strand(#[from] StrandError),

    #[error("Invalid organism: {0}")]
    Organism(#[from] OrganismError),

    /// A count parameter was zero.
    #[error("{0} must be at least 1")]
    NonPositive(&'static str),

    /// The population cap is below the starting population.
    #[error("Maximum population {max} is smaller than initial population {initial}")]
    PopulationCap { initial: usize, max: usize },

    /// The unused ratio target was outside `[0.0, 1.0)` (or NaN).
    #[error("Invalid unused ratio: {0} (must be in [0.0, 1.0))")]
    UnusedRatio(f64),

    /// Gene mass or padded strand length does not fit in a `usize`.
    #[error("Strand length overflows the addressable size")]
    LengthOverflow,
}
