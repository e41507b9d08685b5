//! Population management and reproduction.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::base::{Alphabet, Gene};
use crate::errors::StrandError;
use crate::evolution::MutationRates;
use crate::genome::{Organism, ReproductionMode};
use crate::simulation::{EvolutionConfig, ReproductionStrategy};

/// The organisms alive in one generation, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    organisms: Vec<Organism>,
}

impl Population {
    /// Create a population from organisms.
    pub fn new(organisms: Vec<Organism>) -> Self {
        Self { organisms }
    }

    /// Generate `size` fresh organisms, each carrying every gene.
    pub fn generate<R: Rng + ?Sized>(
        size: usize,
        mode: ReproductionMode,
        strand_length: usize,
        genes: &[Gene],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, StrandError> {
        let organisms = (0..size)
            .map(|_| Organism::generate(mode, strand_length, genes, alphabet, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { organisms })
    }

    /// Get the number of organisms in the population.
    pub fn size(&self) -> usize {
        self.organisms.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Get all organisms as a slice.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Get a specific organism by index.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Organism> {
        self.organisms.iter()
    }

    /// Take the organisms out of the population.
    pub fn into_organisms(self) -> Vec<Organism> {
        self.organisms
    }

    /// Produce the next generation's unselected children.
    ///
    /// One seed per child is drawn from `rng` in order, then every child is
    /// built in parallel on its own generator. The children come back in
    /// seed order, so the result depends only on `rng` and never on how the
    /// work was scheduled.
    pub fn reproduce<R: Rng + ?Sized>(
        &self,
        evolution: &EvolutionConfig,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Vec<Organism> {
        if self.organisms.is_empty() {
            return Vec::new();
        }

        let child_count = evolution.strategy.child_count(self.size());
        let seeds: Vec<u64> = (0..child_count).map(|_| rng.random()).collect();

        seeds
            .into_par_iter()
            .enumerate()
            .map(|(index, seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let first = match evolution.strategy {
                    ReproductionStrategy::Doubling => self.random_parent(&mut local_rng),
                    ReproductionStrategy::FixedBrood {
                        children_per_parent,
                    } => &self.organisms[index / children_per_parent],
                };
                self.child_of(
                    first,
                    evolution.mode,
                    &evolution.mutation,
                    alphabet,
                    &mut local_rng,
                )
            })
            .collect()
    }

    fn random_parent<R: Rng + ?Sized>(&self, rng: &mut R) -> &Organism {
        &self.organisms[rng.random_range(0..self.organisms.len())]
    }

    /// One child of `parent`. A sexual child takes its second gamete from a
    /// mate drawn uniformly with replacement.
    fn child_of<R: Rng + ?Sized>(
        &self,
        parent: &Organism,
        mode: ReproductionMode,
        rates: &MutationRates,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Organism {
        let first = parent.gamete(rng).mutate(rates, alphabet, rng);
        match mode {
            ReproductionMode::Asexual => Organism::asexual(first),
            ReproductionMode::Sexual => {
                let mate = self.random_parent(rng);
                let second = mate.gamete(rng).mutate(rates, alphabet, rng);
                Organism::sexual(first, second)
            }
        }
    }
}

impl From<Vec<Organism>> for Population {
    fn from(organisms: Vec<Organism>) -> Self {
        Self::new(organisms)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Organism;
    type IntoIter = std::slice::Iter<'a, Organism>;

    fn into_iter(self) -> Self::IntoIter {
        self.organisms.iter()
    }
}
