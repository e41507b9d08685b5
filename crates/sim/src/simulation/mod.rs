//! Simulation engine and population management.
//!
//! The most commonly used simulation types are re-exported here:
//!
//! - `GenePool`: the driver that steps generations and keeps the history.
//! - `GenePoolBuilder`: fluent builder with defaults and validation.
//! - `Configuration`: serializable description of a whole run.
//! - `GenerationSnapshot` / `GenerationStats`: one generation's record.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod generation;
pub mod population;

pub use builder::GenePoolBuilder;
pub use configs::{
    Configuration, EvolutionConfig, ExecutionConfig, InitializationConfig, ReproductionStrategy,
    StrandLength,
};
pub use engine::{GenePool, SimulationState};
pub use generation::{GenerationSnapshot, GenerationStats, StatsSeries};
pub use population::Population;
