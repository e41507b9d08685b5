//! Survival and fitness under essential-gene selection.
//!
//! An organism is viable only while it still carries every essential gene.
//! Among viable organisms, fitness is the number of gene copies it holds:
//! redundant copies buffer against the next round of mutation.

use rayon::prelude::*;

use crate::base::{Gene, Strand};
use crate::genome::Organism;

/// Anything that can be scored against a set of essential genes.
///
/// `score` must be a pure function of the candidate and the genes so that
/// scoring can run in parallel without changing results.
pub trait GeneFitness {
    /// Fitness score: total essential gene occurrences.
    fn score(&self, genes: &[Gene]) -> usize;

    /// Whether the candidate carries every essential gene.
    fn is_viable(&self, genes: &[Gene]) -> bool;
}

impl GeneFitness for Strand {
    fn score(&self, genes: &[Gene]) -> usize {
        self.fitness(genes)
    }

    fn is_viable(&self, genes: &[Gene]) -> bool {
        self.contains_all(genes)
    }
}

impl GeneFitness for Organism {
    fn score(&self, genes: &[Gene]) -> usize {
        self.fitness(genes)
    }

    fn is_viable(&self, genes: &[Gene]) -> bool {
        self.survives(genes)
    }
}

/// Keep the viable candidates, ordered by descending fitness and capped at
/// `max_survivors`.
///
/// Candidates with equal fitness keep their incoming relative order, so the
/// result is fully determined by the input order.
pub fn rank_survivors<T>(candidates: Vec<T>, genes: &[Gene], max_survivors: usize) -> Vec<T>
where
    T: GeneFitness + Send,
{
    let mut scored: Vec<(usize, T)> = candidates
        .into_par_iter()
        .filter(|candidate| candidate.is_viable(genes))
        .map(|candidate| (candidate.score(genes), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(max_survivors);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Median of integer scores.
///
/// Even-length input averages the two middle values; empty input returns `0.0`.
pub fn median(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}
