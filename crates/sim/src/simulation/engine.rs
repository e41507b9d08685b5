//! The generation loop.
//!
//! [`GenePool`] owns the population, the essential genes and the run
//! history. Each call to [`GenePool::advance`] performs one generation:
//! reproduce, mutate, drop non-viable children, rank by fitness and cap the
//! population.

use std::sync::Arc;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::base::GeneSet;
use crate::errors::ConfigurationError;
use crate::evolution::selection;
use crate::simulation::{
    Configuration, GenerationSnapshot, GenerationStats, Population, StatsSeries,
};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    /// No child survived the last generation.
    Extinct,
    /// The configured generation limit was reached.
    Completed,
}

/// Evolution driver.
#[derive(Debug)]
pub struct GenePool {
    config: Configuration,
    genes: GeneSet,
    population: Population,
    generation: usize,
    state: SimulationState,
    history: Vec<Arc<GenerationSnapshot>>,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl GenePool {
    /// Validate `config`, draw the essential genes and the initial
    /// population, and record generation 0.
    pub fn new(config: Configuration) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut rng = if let Some(seed) = config.execution.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let init = &config.initialization;
        let genes = init.gene_set(&mut rng)?;
        let strand_length = init.resolve_strand_length()?;
        let population = Population::generate(
            config.execution.initial_population,
            config.evolution.mode,
            strand_length,
            genes.as_slice(),
            &init.alphabet,
            &mut rng,
        )?;

        let initial = GenerationSnapshot::new(0, population.organisms().to_vec(), genes.as_slice());
        debug!(
            "Generation 0: {} organisms, strand length {}",
            population.size(),
            strand_length
        );

        Ok(Self {
            config,
            genes,
            population,
            generation: 0,
            state: SimulationState::Running,
            history: vec![Arc::new(initial)],
            rng,
        })
    }

    /// Run one generation.
    ///
    /// Returns the new snapshot, or `None` if the run had already finished
    /// or the population went extinct during this step.
    pub fn advance(&mut self) -> Option<Arc<GenerationSnapshot>> {
        if self.state != SimulationState::Running {
            return None;
        }

        self.generation += 1;
        let children = self.population.reproduce(
            &self.config.evolution,
            &self.config.initialization.alphabet,
            &mut self.rng,
        );
        let produced = children.len();

        let survivors = selection::rank_survivors(
            children,
            self.genes.as_slice(),
            self.config.execution.max_population,
        );

        if survivors.is_empty() {
            self.population = Population::default();
            self.state = SimulationState::Extinct;
            info!(
                "Population extinct at generation {} ({} children, none viable)",
                self.generation, produced
            );
            return None;
        }

        let snapshot = Arc::new(GenerationSnapshot::new(
            self.generation,
            survivors.clone(),
            self.genes.as_slice(),
        ));
        self.population = Population::new(survivors);
        self.history.push(Arc::clone(&snapshot));

        let stats = snapshot.stats();
        debug!(
            "Generation {}: {} of {} children kept, total fitness {}, median {}",
            self.generation,
            stats.population_size,
            produced,
            stats.total_fitness,
            stats.median_fitness
        );

        if self.generation >= self.config.execution.generations {
            self.state = SimulationState::Completed;
            info!("Simulation completed after {} generations", self.generation);
        }

        Some(snapshot)
    }

    /// Advance until the run is extinct or complete.
    pub fn run_to_completion(&mut self) {
        while !self.is_complete() {
            self.advance();
        }
    }

    /// `true` once the run is extinct or complete.
    pub fn is_complete(&self) -> bool {
        self.state != SimulationState::Running
    }

    /// Current generation over the generation limit.
    pub fn progress(&self) -> f64 {
        self.generation as f64 / self.config.execution.generations as f64
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the current population. Empty after extinction.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn genes(&self) -> &GeneSet {
        &self.genes
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Every recorded snapshot, starting with generation 0.
    pub fn history(&self) -> &[Arc<GenerationSnapshot>] {
        &self.history
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Arc<GenerationSnapshot> {
        // History always holds the generation 0 snapshot.
        &self.history[self.history.len() - 1]
    }

    /// Statistics of every recorded generation, in order.
    pub fn stats(&self) -> impl Iterator<Item = &GenerationStats> {
        self.history.iter().map(|snapshot| snapshot.stats())
    }

    /// The history as one column per statistic.
    pub fn stats_series(&self) -> StatsSeries {
        self.stats().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Alphabet;
    use crate::evolution::MutationRates;
    use crate::genome::ReproductionMode;
    use crate::simulation::{
        EvolutionConfig, ExecutionConfig, InitializationConfig, ReproductionStrategy,
        StrandLength,
    };

    fn config(mutation: MutationRates, mode: ReproductionMode) -> Configuration {
        Configuration {
            execution: ExecutionConfig {
                initial_population: 5,
                max_population: 20,
                generations: 10,
                seed: Some(42),
            },
            evolution: EvolutionConfig {
                mutation,
                mode,
                strategy: ReproductionStrategy::Doubling,
            },
            initialization: InitializationConfig {
                alphabet: Alphabet::dna(),
                gene_length: 4,
                gene_count: 2,
                strand_length: StrandLength::UnusedRatio(0.5),
                genes: None,
            },
        }
    }

    #[test]
    fn test_new_records_generation_zero() {
        let pool = GenePool::new(config(MutationRates::none(), ReproductionMode::Asexual)).unwrap();

        assert_eq!(pool.generation(), 0);
        assert_eq!(pool.state(), SimulationState::Running);
        assert_eq!(pool.genes().len(), 2);
        assert_eq!(pool.history().len(), 1);
        assert_eq!(pool.latest().generation(), 0);
        assert_eq!(pool.latest().stats().population_size, 5);
        assert_eq!(pool.progress(), 0.0);
        assert!(!pool.is_complete());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut cfg = config(MutationRates::none(), ReproductionMode::Asexual);
        cfg.execution.max_population = 1;
        assert!(matches!(
            GenePool::new(cfg),
            Err(ConfigurationError::PopulationCap { .. })
        ));
    }

    #[test]
    fn test_advance_grows_then_caps() {
        let mut pool =
            GenePool::new(config(MutationRates::none(), ReproductionMode::Asexual)).unwrap();

        let snapshot = pool.advance().unwrap();
        assert_eq!(snapshot.generation(), 1);
        assert_eq!(snapshot.stats().population_size, 10);

        let snapshot = pool.advance().unwrap();
        assert_eq!(snapshot.stats().population_size, 20);

        let snapshot = pool.advance().unwrap();
        assert_eq!(snapshot.stats().population_size, 20);
        assert_eq!(pool.history().len(), 4);
        assert!((pool.progress() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_advance_sorts_by_fitness() {
        let mut pool = GenePool::new(config(
            MutationRates::uniform(0.02).unwrap(),
            ReproductionMode::Sexual,
        ))
        .unwrap();

        while let Some(snapshot) = pool.advance() {
            let genes = pool.genes().as_slice();
            let fitness: Vec<usize> = snapshot
                .population()
                .iter()
                .map(|org| org.fitness(genes))
                .collect();
            assert!(fitness.windows(2).all(|w| w[0] >= w[1]));
            assert!(snapshot.population().iter().all(|org| org.survives(genes)));
        }
    }

    #[test]
    fn test_completes_at_generation_limit() {
        let mut pool =
            GenePool::new(config(MutationRates::none(), ReproductionMode::Asexual)).unwrap();
        pool.run_to_completion();

        assert_eq!(pool.state(), SimulationState::Completed);
        assert_eq!(pool.generation(), 10);
        assert_eq!(pool.progress(), 1.0);
        assert_eq!(pool.history().len(), 11);
        assert_eq!(pool.latest().generation(), 10);

        // Finished runs ignore further advances
        assert!(pool.advance().is_none());
        assert_eq!(pool.generation(), 10);
        assert_eq!(pool.history().len(), 11);
    }

    #[test]
    fn test_extinction() {
        let mut cfg = config(
            MutationRates::new(0.0, 0.99, 0.0).unwrap(),
            ReproductionMode::Asexual,
        );
        cfg.execution.seed = Some(3);
        let mut pool = GenePool::new(cfg).unwrap();

        assert!(pool.advance().is_none());
        assert_eq!(pool.state(), SimulationState::Extinct);
        assert!(pool.is_complete());
        assert_eq!(pool.generation(), 1);
        assert!(pool.population().is_empty());
        assert_eq!(pool.history().len(), 1);
        assert!(pool.advance().is_none());
    }

    #[test]
    fn test_stats_series_matches_history() {
        let mut pool =
            GenePool::new(config(MutationRates::none(), ReproductionMode::Asexual)).unwrap();
        pool.run_to_completion();

        let series = pool.stats_series();
        assert_eq!(series.len(), pool.history().len());
        assert_eq!(series.generation, (0..=10).collect::<Vec<_>>());
        assert_eq!(series.population_size[1], 10);
    }

    #[test]
    fn test_sexual_series_bounded_by_doubling() {
        let mut pool =
            GenePool::new(config(MutationRates::none(), ReproductionMode::Sexual)).unwrap();
        pool.advance();

        assert_eq!(pool.generation(), 1);
        assert!(pool.population().size() <= 10);
        assert_eq!(pool.stats_series().population_size[0], 5);
    }
}
