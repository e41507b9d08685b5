//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use genepool_sim::prelude::*;
//!
//! let mut pool = GenePoolBuilder::new().gene_length(4).seed(1).build().unwrap();
//! let first = pool.advance();
//! assert!(first.is_some() || pool.state() == SimulationState::Extinct);
//! ```

pub use crate::base::{Alphabet, Gene, GeneSet, Strand};
pub use crate::errors::{self, ConfigurationError};
pub use crate::evolution::{GeneFitness, MutationRates};
pub use crate::genome::{Organism, ReproductionMode};
pub use crate::simulation::{
    Configuration, GenePool, GenePoolBuilder, GenerationSnapshot, GenerationStats,
    Population, SimulationState, StatsSeries,
};
