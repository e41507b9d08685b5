//! Per-generation snapshots and their summary statistics.

use serde::{Deserialize, Serialize};

use crate::base::Gene;
use crate::evolution::median;
use crate::genome::Organism;

/// Summary statistics of one generation's population.
///
/// Every field is zero for an empty population.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub population_size: usize,
    pub total_fitness: usize,
    pub average_fitness: f64,
    pub median_fitness: f64,
    /// Mean over organisms of each organism's mean strand length
    pub average_length: f64,
    /// Sum of every strand's length
    pub total_length: usize,
    pub average_unused_ratio: f64,
}

impl GenerationStats {
    /// Compute statistics for `organisms` scored against `genes`.
    pub fn compute(generation: usize, organisms: &[Organism], genes: &[Gene]) -> Self {
        let population_size = organisms.len();
        if population_size == 0 {
            return Self {
                generation,
                ..Self::default()
            };
        }

        let fitness: Vec<usize> = organisms.iter().map(|org| org.fitness(genes)).collect();
        let total_fitness: usize = fitness.iter().sum();
        let total_length: usize = organisms.iter().map(Organism::total_length).sum();
        let length_sum: f64 = organisms.iter().map(Organism::average_length).sum();
        let unused_sum: f64 = organisms
            .iter()
            .map(|org| org.average_unused_ratio(genes))
            .sum();

        let n = population_size as f64;
        Self {
            generation,
            population_size,
            total_fitness,
            average_fitness: total_fitness as f64 / n,
            median_fitness: median(&fitness),
            average_length: length_sum / n,
            total_length,
            average_unused_ratio: unused_sum / n,
        }
    }
}

/// Immutable record of one generation: its index, population and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSnapshot {
    generation: usize,
    population: Vec<Organism>,
    stats: GenerationStats,
}

impl GenerationSnapshot {
    /// Record `population` as generation `generation`. Statistics are
    /// computed once, here.
    pub fn new(generation: usize, population: Vec<Organism>, genes: &[Gene]) -> Self {
        let stats = GenerationStats::compute(generation, &population, genes);
        Self {
            generation,
            population,
            stats,
        }
    }

    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The organisms, fitness-descending after generation 0.
    #[inline]
    pub fn population(&self) -> &[Organism] {
        &self.population
    }

    #[inline]
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }
}

/// A run's statistics as one column per field, ready for charting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSeries {
    pub generation: Vec<usize>,
    pub population_size: Vec<usize>,
    pub total_fitness: Vec<usize>,
    pub average_fitness: Vec<f64>,
    pub median_fitness: Vec<f64>,
    pub average_length: Vec<f64>,
    pub total_length: Vec<usize>,
    pub average_unused_ratio: Vec<f64>,
}

impl StatsSeries {
    /// Number of generations recorded.
    pub fn len(&self) -> usize {
        self.generation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation.is_empty()
    }

    /// Append one generation's row.
    pub fn push(&mut self, stats: &GenerationStats) {
        self.generation.push(stats.generation);
        self.population_size.push(stats.population_size);
        self.total_fitness.push(stats.total_fitness);
        self.average_fitness.push(stats.average_fitness);
        self.median_fitness.push(stats.median_fitness);
        self.average_length.push(stats.average_length);
        self.total_length.push(stats.total_length);
        self.average_unused_ratio.push(stats.average_unused_ratio);
    }
}

impl<'a> FromIterator<&'a GenerationStats> for StatsSeries {
    fn from_iter<I: IntoIterator<Item = &'a GenerationStats>>(iter: I) -> Self {
        let mut series = Self::default();
        for stats in iter {
            series.push(stats);
        }
        series
    }
}
