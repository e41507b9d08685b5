use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Alphabet, Gene, Strand};
use crate::errors::{OrganismError, StrandError};
use crate::evolution::recombination;

/// How an organism carries and passes on its strands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReproductionMode {
    /// One strand, copied whole into each gamete.
    #[default]
    Asexual,
    /// Two strands, recombined into each gamete.
    Sexual,
}

impl ReproductionMode {
    /// Number of strands an organism of this mode carries.
    pub const fn strand_count(self) -> usize {
        match self {
            Self::Asexual => 1,
            Self::Sexual => 2,
        }
    }
}

impl fmt::Display for ReproductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asexual => write!(f, "asexual"),
            Self::Sexual => write!(f, "sexual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Strands {
    Single(Strand),
    Pair(Strand, Strand),
}

/// A reproductive unit: one strand (asexual) or two strands (sexual).
///
/// The mode is fixed when the organism is created. Strands are owned by the
/// organism but share their storage, so cloning an organism is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    strands: Strands,
}

impl Organism {
    /// Generate a fresh organism whose strand(s) each embed every gene.
    ///
    /// A sexual organism gets two independently generated strands under
    /// the same length policy.
    pub fn generate<R: Rng + ?Sized>(
        mode: ReproductionMode,
        strand_length: usize,
        genes: &[Gene],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, StrandError> {
        let first = Strand::generate(strand_length, genes, alphabet, rng)?;
        let strands = match mode {
            ReproductionMode::Asexual => Strands::Single(first),
            ReproductionMode::Sexual => {
                let second = Strand::generate(strand_length, genes, alphabet, rng)?;
                Strands::Pair(first, second)
            }
        };
        Ok(Self { strands })
    }

    /// An asexual organism carrying `strand`.
    pub fn asexual(strand: Strand) -> Self {
        Self {
            strands: Strands::Single(strand),
        }
    }

    /// A sexual organism carrying `strand1` and `strand2`.
    pub fn sexual(strand1: Strand, strand2: Strand) -> Self {
        Self {
            strands: Strands::Pair(strand1, strand2),
        }
    }

    /// Assemble an organism from existing strands without regenerating them.
    ///
    /// # Errors
    /// Returns `OrganismError::ModeMismatch` if an asexual organism is given a
    /// second strand or a sexual organism is missing one.
    pub fn reconstruct(
        strand1: Strand,
        strand2: Option<Strand>,
        mode: ReproductionMode,
    ) -> Result<Self, OrganismError> {
        match (mode, strand2) {
            (ReproductionMode::Asexual, None) => Ok(Self::asexual(strand1)),
            (ReproductionMode::Sexual, Some(strand2)) => Ok(Self::sexual(strand1, strand2)),
            (mode, strand2) => Err(OrganismError::ModeMismatch {
                mode,
                expected: mode.strand_count(),
                actual: 1 + usize::from(strand2.is_some()),
            }),
        }
    }

    /// The organism's reproduction mode.
    pub fn mode(&self) -> ReproductionMode {
        match self.strands {
            Strands::Single(_) => ReproductionMode::Asexual,
            Strands::Pair(..) => ReproductionMode::Sexual,
        }
    }

    /// Borrow the first (or only) strand.
    #[inline]
    pub fn strand1(&self) -> &Strand {
        match &self.strands {
            Strands::Single(s) | Strands::Pair(s, _) => s,
        }
    }

    /// Borrow the second strand, if the organism is sexual.
    #[inline]
    pub fn strand2(&self) -> Option<&Strand> {
        match &self.strands {
            Strands::Single(_) => None,
            Strands::Pair(_, s) => Some(s),
        }
    }

    /// Iterate over the organism's strands in order.
    pub fn strands(&self) -> impl Iterator<Item = &Strand> {
        std::iter::once(self.strand1()).chain(self.strand2())
    }

    /// Produce one gamete.
    ///
    /// Asexual organisms hand out a copy of their strand; sexual organisms
    /// recombine their two strands.
    pub fn gamete<R: Rng + ?Sized>(&self, rng: &mut R) -> Strand {
        match &self.strands {
            Strands::Single(strand) => strand.clone(),
            Strands::Pair(s1, s2) => {
                Strand::from(recombination::recombine(s1.as_slice(), s2.as_slice(), rng))
            }
        }
    }

    /// Total essential gene occurrences across all strands.
    pub fn fitness(&self, genes: &[Gene]) -> usize {
        self.strands().map(|strand| strand.fitness(genes)).sum()
    }

    /// Whether every gene is present.
    ///
    /// A sexual organism may carry its genes split across both strands.
    pub fn survives(&self, genes: &[Gene]) -> bool {
        match &self.strands {
            Strands::Single(strand) => strand.contains_all(genes),
            Strands::Pair(s1, s2) => genes
                .iter()
                .all(|gene| s1.contains(gene) || s2.contains(gene)),
        }
    }

    /// Mean strand length.
    pub fn average_length(&self) -> f64 {
        self.total_length() as f64 / self.mode().strand_count() as f64
    }

    /// Summed strand length.
    pub fn total_length(&self) -> usize {
        self.strands().map(Strand::len).sum()
    }

    /// Mean unused ratio over the strands.
    pub fn average_unused_ratio(&self, genes: &[Gene]) -> f64 {
        let total: f64 = self.strands().map(|strand| strand.unused_ratio(genes)).sum();
        total / self.mode().strand_count() as f64
    }
}
