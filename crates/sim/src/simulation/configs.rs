//! Simulation configuration.
//!
//! A [`Configuration`] fully describes a run. It serializes to JSON so a run
//! can be reproduced from a file: with a seed set, the same configuration
//! always yields the same history.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Alphabet, GeneSet};
use crate::errors::{ConfigurationError, GeneError, StrandError};
use crate::evolution::MutationRates;
use crate::genome::ReproductionMode;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub evolution: EvolutionConfig,
    pub initialization: InitializationConfig,
}

/// Population bounds and run length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Organisms in generation 0
    pub initial_population: usize,
    /// Cap applied after every selection step
    pub max_population: usize,
    /// Generation at which the run completes
    pub generations: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// How children are produced each generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub mutation: MutationRates,
    pub mode: ReproductionMode,
    #[serde(default)]
    pub strategy: ReproductionStrategy,
}

/// How many children a generation produces and how parents are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReproductionStrategy {
    /// `2 × population` children, each from parents drawn uniformly with
    /// replacement.
    #[default]
    Doubling,
    /// Every member parents `children_per_parent` children. In sexual mode
    /// each child's second parent is drawn uniformly with replacement.
    FixedBrood { children_per_parent: usize },
}

impl ReproductionStrategy {
    /// Number of children produced from a population of `population` members.
    pub fn child_count(&self, population: usize) -> usize {
        match *self {
            Self::Doubling => population.saturating_mul(2),
            Self::FixedBrood {
                children_per_parent,
            } => population.saturating_mul(children_per_parent),
        }
    }
}

/// How long a freshly generated strand is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrandLength {
    /// Pad the genes so roughly this fraction of the strand is unused:
    /// `ceil(gene_mass / (1 - ratio))`.
    UnusedRatio(f64),
    /// A fixed length, at least the gene mass.
    Explicit(usize),
}

impl Default for StrandLength {
    fn default() -> Self {
        Self::UnusedRatio(0.5)
    }
}

impl StrandLength {
    /// Resolve to a concrete length for genes totalling `gene_mass` symbols.
    ///
    /// # Errors
    /// Returns `ConfigurationError::UnusedRatio` for a ratio outside
    /// `[0.0, 1.0)`, `ConfigurationError::LengthOverflow` when the padded
    /// length does not fit in a `usize`, and `StrandError::TooShort` for an
    /// explicit length below the gene mass.
    pub fn resolve(&self, gene_mass: usize) -> Result<usize, ConfigurationError> {
        match *self {
            Self::UnusedRatio(ratio) => {
                if !(0.0..1.0).contains(&ratio) {
                    return Err(ConfigurationError::UnusedRatio(ratio));
                }
                let length = (gene_mass as f64 / (1.0 - ratio)).ceil();
                if length >= usize::MAX as f64 {
                    return Err(ConfigurationError::LengthOverflow);
                }
                Ok(length as usize)
            }
            Self::Explicit(length) => {
                if length < gene_mass {
                    return Err(StrandError::TooShort {
                        length,
                        required: gene_mass,
                    }
                    .into());
                }
                Ok(length)
            }
        }
    }
}

/// What the essential genes and the initial strands look like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializationConfig {
    pub alphabet: Alphabet,
    pub gene_length: usize,
    /// Number of random genes. Ignored when `genes` is set.
    pub gene_count: usize,
    #[serde(default)]
    pub strand_length: StrandLength,
    /// Explicit essential genes instead of random ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genes: Option<Vec<String>>,
}

impl InitializationConfig {
    /// Produce the essential genes: the explicit list if one is configured,
    /// otherwise `gene_count` distinct random genes.
    pub fn gene_set<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneSet, GeneError> {
        match &self.genes {
            Some(genes) => {
                GeneSet::from_strings(genes.as_slice(), self.gene_length, &self.alphabet)
            }
            None => GeneSet::generate(self.gene_count, self.gene_length, &self.alphabet, rng),
        }
    }

    /// Number of essential genes this configuration produces.
    pub fn effective_gene_count(&self) -> usize {
        self.genes.as_ref().map_or(self.gene_count, Vec::len)
    }

    /// Strand length for the configured genes.
    pub fn resolve_strand_length(&self) -> Result<usize, ConfigurationError> {
        let gene_mass = self
            .gene_length
            .checked_mul(self.effective_gene_count())
            .ok_or(ConfigurationError::LengthOverflow)?;
        self.strand_length.resolve(gene_mass)
    }
}

impl Configuration {
    /// Check every parameter. Called by [`GenePool::new`](super::GenePool::new),
    /// so a pool that was constructed never fails mid-run.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let exec = &self.execution;
        if exec.initial_population == 0 {
            return Err(ConfigurationError::NonPositive("initial_population"));
        }
        if exec.generations == 0 {
            return Err(ConfigurationError::NonPositive("generations"));
        }
        if exec.max_population < exec.initial_population {
            return Err(ConfigurationError::PopulationCap {
                initial: exec.initial_population,
                max: exec.max_population,
            });
        }

        if let ReproductionStrategy::FixedBrood {
            children_per_parent: 0,
        } = self.evolution.strategy
        {
            return Err(ConfigurationError::NonPositive("children_per_parent"));
        }

        let init = &self.initialization;
        if init.gene_length == 0 {
            return Err(GeneError::ZeroLength.into());
        }
        if init.effective_gene_count() == 0 {
            return Err(GeneError::ZeroCount.into());
        }
        match &init.genes {
            Some(genes) => {
                GeneSet::from_strings(genes.as_slice(), init.gene_length, &init.alphabet)?;
            }
            None => check_gene_space(init)?,
        }
        init.resolve_strand_length()?;

        Ok(())
    }
}

fn check_gene_space(init: &InitializationConfig) -> Result<(), GeneError> {
    let possible = u32::try_from(init.gene_length)
        .ok()
        .and_then(|exp| init.alphabet.len().checked_pow(exp));
    match possible {
        Some(possible) if possible < init.gene_count => Err(GeneError::TooManyGenes {
            count: init.gene_count,
            length: init.gene_length,
            symbols: init.alphabet.len(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn config() -> Configuration {
        Configuration {
            execution: ExecutionConfig {
                initial_population: 5,
                max_population: 20,
                generations: 10,
                seed: Some(7),
            },
            evolution: EvolutionConfig {
                mutation: MutationRates::none(),
                mode: ReproductionMode::Asexual,
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
    fn test_valid_config() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn test_strand_length_resolve() {
        assert_eq!(StrandLength::UnusedRatio(0.5).resolve(8), Ok(16));
        assert_eq!(StrandLength::UnusedRatio(0.0).resolve(8), Ok(8));
        // 10 / 0.3 = 33.33...
        assert_eq!(StrandLength::UnusedRatio(0.7).resolve(10), Ok(34));
        assert_eq!(StrandLength::Explicit(12).resolve(8), Ok(12));
    }

    #[test]
    fn test_strand_length_invalid() {
        assert_eq!(
            StrandLength::UnusedRatio(1.0).resolve(8),
            Err(ConfigurationError::UnusedRatio(1.0))
        );
        assert!(StrandLength::UnusedRatio(f64::NAN).resolve(8).is_err());
        assert_eq!(
            StrandLength::Explicit(7).resolve(8),
            Err(ConfigurationError::Strand(StrandError::TooShort {
                length: 7,
                required: 8
            }))
        );
    }

    #[test]
    fn test_strand_length_overflow() {
        assert_eq!(
            StrandLength::UnusedRatio(0.9).resolve(usize::MAX / 2),
            Err(ConfigurationError::LengthOverflow)
        );

        let mut cfg = config();
        cfg.initialization.gene_length = usize::MAX / 2 + 1;
        cfg.initialization.gene_count = 2;
        assert_eq!(
            cfg.initialization.resolve_strand_length(),
            Err(ConfigurationError::LengthOverflow)
        );
        assert_eq!(cfg.validate(), Err(ConfigurationError::LengthOverflow));
    }

    #[test]
    fn test_non_positive_counts() {
        let mut cfg = config();
        cfg.execution.initial_population = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::NonPositive("initial_population"))
        );

        let mut cfg = config();
        cfg.execution.generations = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::NonPositive("generations"))
        );

        let mut cfg = config();
        cfg.initialization.gene_count = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::Gene(GeneError::ZeroCount))
        );

        let mut cfg = config();
        cfg.initialization.gene_length = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::Gene(GeneError::ZeroLength))
        );

        let mut cfg = config();
        cfg.evolution.strategy = ReproductionStrategy::FixedBrood {
            children_per_parent: 0,
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::NonPositive("children_per_parent"))
        );
    }

    #[test]
    fn test_population_cap() {
        let mut cfg = config();
        cfg.execution.max_population = 4;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::PopulationCap { initial: 5, max: 4 })
        );
    }

    #[test]
    fn test_too_many_genes() {
        let mut cfg = config();
        cfg.initialization.alphabet = Alphabet::new(vec!['0', '1']).unwrap();
        cfg.initialization.gene_length = 2;
        cfg.initialization.gene_count = 5;
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::Gene(GeneError::TooManyGenes {
                count: 5,
                length: 2,
                symbols: 2
            }))
        );
    }

    #[test]
    fn test_explicit_genes() {
        let mut cfg = config();
        cfg.initialization.genes = Some(vec!["ATCG".into(), "GGCC".into(), "TTTT".into()]);
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.initialization.effective_gene_count(), 3);
        assert_eq!(cfg.initialization.resolve_strand_length(), Ok(24));

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let genes = cfg.initialization.gene_set(&mut rng).unwrap();
        assert_eq!(genes.as_slice()[1].to_string(), "GGCC");

        cfg.initialization.genes = Some(vec!["ATCX".into()]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::Gene(GeneError::UnknownSymbol { .. }))
        ));
    }

    #[test]
    fn test_child_count() {
        assert_eq!(ReproductionStrategy::Doubling.child_count(7), 14);
        let brood = ReproductionStrategy::FixedBrood {
            children_per_parent: 3,
        };
        assert_eq!(brood.child_count(7), 21);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let mut cfg = config();
        cfg.evolution.mutation = MutationRates::new(0.01, 0.02, 0.03).unwrap();
        cfg.evolution.strategy = ReproductionStrategy::FixedBrood {
            children_per_parent: 2,
        };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains(r#""kind": "fixed_brood""#));
        assert!(json.contains(r#""unused_ratio": 0.5"#));

        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_config_json_defaults() {
        let json = r#"{
            "execution": {"initial_population": 3, "max_population": 9, "generations": 4},
            "evolution": {
                "mutation": {"insert_chance": 0.0, "delete_chance": 0.0, "substitute_chance": 0.0},
                "mode": "sexual"
            },
            "initialization": {"alphabet": ["A", "T"], "gene_length": 3, "gene_count": 2}
        }"#;
        let cfg: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.execution.seed, None);
        assert_eq!(cfg.evolution.strategy, ReproductionStrategy::Doubling);
        assert_eq!(cfg.initialization.strand_length, StrandLength::UnusedRatio(0.5));
        assert_eq!(cfg.validate(), Ok(()));
    }
}
