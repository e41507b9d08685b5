//! Builder pattern for creating gene pools.
//!
//! Provides a fluent API for configuring a run with sensible defaults.
//! Nothing is checked until [`GenePoolBuilder::build`], which validates the
//! assembled [`Configuration`] in one place.

use crate::base::Alphabet;
use crate::errors::ConfigurationError;
use crate::evolution::MutationRates;
use crate::genome::ReproductionMode;
use crate::simulation::{
    Configuration, EvolutionConfig, ExecutionConfig, GenePool, InitializationConfig,
    ReproductionStrategy, StrandLength,
};

/// Builder for constructing [`GenePool`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use genepool_sim::simulation::GenePoolBuilder;
///
/// let mut pool = GenePoolBuilder::new()
///     .initial_population(5)
///     .max_population(20)
///     .generations(10)
///     .gene_length(4)
///     .gene_count(2)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// pool.run_to_completion();
/// assert!(pool.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct GenePoolBuilder {
    initial_population: usize,
    max_population: usize,
    generations: usize,
    seed: Option<u64>,

    alphabet: Alphabet,
    gene_length: usize,
    gene_count: usize,
    genes: Option<Vec<String>>,
    strand_length: StrandLength,

    // (insert, delete, substitute), validated in build()
    mutation: (f64, f64, f64),
    mode: ReproductionMode,
    strategy: ReproductionStrategy,
}

impl Default for GenePoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GenePoolBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            initial_population: 10,
            max_population: 100,
            generations: 100,
            seed: None,
            alphabet: Alphabet::dna(),
            gene_length: 10,
            gene_count: 3,
            genes: None,
            strand_length: StrandLength::UnusedRatio(0.5),
            mutation: (0.0, 0.0, 0.0),
            mode: ReproductionMode::Asexual,
            strategy: ReproductionStrategy::Doubling,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: Configuration) -> Self {
        let Configuration {
            execution,
            evolution,
            initialization,
        } = config;
        Self {
            initial_population: execution.initial_population,
            max_population: execution.max_population,
            generations: execution.generations,
            seed: execution.seed,
            alphabet: initialization.alphabet,
            gene_length: initialization.gene_length,
            gene_count: initialization.gene_count,
            genes: initialization.genes,
            strand_length: initialization.strand_length,
            mutation: (
                evolution.mutation.insert_chance(),
                evolution.mutation.delete_chance(),
                evolution.mutation.substitute_chance(),
            ),
            mode: evolution.mode,
            strategy: evolution.strategy,
        }
    }

    /// Set the number of organisms in generation 0 (default: 10).
    pub fn initial_population(mut self, size: usize) -> Self {
        self.initial_population = size;
        self
    }

    /// Set the population cap (default: 100).
    pub fn max_population(mut self, size: usize) -> Self {
        self.max_population = size;
        self
    }

    /// Set the number of generations to run (default: 100).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the symbol alphabet (default: `A,T,C,G`).
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the essential gene length (default: 10).
    pub fn gene_length(mut self, length: usize) -> Self {
        self.gene_length = length;
        self
    }

    /// Set the number of random essential genes (default: 3).
    pub fn gene_count(mut self, count: usize) -> Self {
        self.gene_count = count;
        self
    }

    /// Use these essential genes instead of random ones.
    pub fn genes<S: Into<String>>(mut self, genes: impl IntoIterator<Item = S>) -> Self {
        self.genes = Some(genes.into_iter().map(Into::into).collect());
        self
    }

    /// Size strands so that about `ratio` of them is unused (default: 0.5).
    pub fn unused_ratio(mut self, ratio: f64) -> Self {
        self.strand_length = StrandLength::UnusedRatio(ratio);
        self
    }

    /// Use a fixed strand length.
    pub fn strand_length(mut self, length: usize) -> Self {
        self.strand_length = StrandLength::Explicit(length);
        self
    }

    /// Set the per-position mutation chances (default: none).
    pub fn mutation(mut self, insert: f64, delete: f64, substitute: f64) -> Self {
        self.mutation = (insert, delete, substitute);
        self
    }

    /// Set the reproduction mode (default: asexual).
    pub fn mode(mut self, mode: ReproductionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(ReproductionMode::Sexual)`.
    pub fn sexual(self) -> Self {
        self.mode(ReproductionMode::Sexual)
    }

    /// Set the reproduction strategy (default: doubling).
    pub fn strategy(mut self, strategy: ReproductionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Assemble and validate the configuration without starting a run.
    pub fn configuration(&self) -> Result<Configuration, ConfigurationError> {
        let (insert, delete, substitute) = self.mutation;
        let config = Configuration {
            execution: ExecutionConfig {
                initial_population: self.initial_population,
                max_population: self.max_population,
                generations: self.generations,
                seed: self.seed,
            },
            evolution: EvolutionConfig {
                mutation: MutationRates::new(insert, delete, substitute)?,
                mode: self.mode,
                strategy: self.strategy,
            },
            initialization: InitializationConfig {
                alphabet: self.alphabet.clone(),
                gene_length: self.gene_length,
                gene_count: self.gene_count,
                strand_length: self.strand_length,
                genes: self.genes.clone(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the gene pool.
    pub fn build(self) -> Result<GenePool, ConfigurationError> {
        GenePool::new(self.configuration()?)
    }
}
