//! Evolution module providing mutation, recombination, and selection.
//!
//! - **Mutation**: per-position insertion, deletion and substitution while copying
//! - **Recombination**: multi-point crossover between two strands
//! - **Selection**: gene-count fitness and survival checks

pub mod mutation;
pub mod recombination;
pub mod selection;

pub use mutation::MutationRates;
pub use selection::{median, GeneFitness};
