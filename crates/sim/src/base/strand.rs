use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{gene, Alphabet, Gene};
use crate::errors::StrandError;
use crate::evolution::MutationRates;

/// One immutable DNA strand.
///
/// The symbols live in an `Arc<[char]>`: cloning a strand is cheap and never
/// copies the sequence, and every operation that changes content returns a
/// new `Strand`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strand(Arc<[char]>);

impl Strand {
    /// Generate a random strand of `length` symbols that embeds every gene.
    ///
    /// The genes are shuffled, then placed left to right at random,
    /// non-overlapping offsets. Each start is drawn so that the genes still
    /// waiting to be placed keep enough room after it. All remaining
    /// positions are filled with random symbols from `alphabet`.
    ///
    /// # Errors
    /// Returns `StrandError::TooShort` if `length` is less than the summed
    /// length of `genes`.
    pub fn generate<R: Rng + ?Sized>(
        length: usize,
        genes: &[Gene],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, StrandError> {
        let required = gene::total_length(genes);
        if length < required {
            return Err(StrandError::TooShort { length, required });
        }

        let mut order: Vec<&Gene> = genes.iter().collect();
        order.shuffle(rng);

        let mut symbols = Vec::with_capacity(length);
        let mut reserved = required;
        for gene in order {
            reserved -= gene.len();
            let cursor = symbols.len();
            let latest = length - reserved - gene.len();
            let start = rng.random_range(cursor..=latest);

            while symbols.len() < start {
                symbols.push(alphabet.random_symbol(rng));
            }
            symbols.extend_from_slice(gene.as_slice());
        }
        while symbols.len() < length {
            symbols.push(alphabet.random_symbol(rng));
        }

        Ok(Self(symbols.into()))
    }

    /// Wrap an existing symbol sequence verbatim. No gene checks are made.
    pub fn from_sequence(sequence: impl Into<Arc<[char]>>) -> Self {
        Self(sequence.into())
    }

    /// Number of symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the strand has no symbols.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the symbols.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Return a mutated copy of this strand. `self` is never modified.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        rates: &MutationRates,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Self {
        Self(rates.mutate_sequence(&self.0, alphabet, rng).into())
    }

    /// `n` exact copies sharing this strand's storage.
    pub fn exact_copies(&self, n: usize) -> Vec<Self> {
        vec![self.clone(); n]
    }

    /// `n` independently mutated copies.
    pub fn mutated_copies<R: Rng + ?Sized>(
        &self,
        n: usize,
        rates: &MutationRates,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Vec<Self> {
        (0..n).map(|_| self.mutate(rates, alphabet, rng)).collect()
    }

    /// Return `true` if `gene` occurs anywhere as a contiguous run.
    pub fn contains(&self, gene: &Gene) -> bool {
        find(&self.0, gene.as_slice(), 0).is_some()
    }

    /// Return `true` if every gene occurs at least once.
    pub fn contains_all(&self, genes: &[Gene]) -> bool {
        genes.iter().all(|gene| self.contains(gene))
    }

    /// Count non-overlapping occurrences of `gene`, scanning left to right
    /// and resuming just past the end of each match.
    pub fn count_occurrences(&self, gene: &Gene) -> usize {
        matches(&self.0, gene.as_slice()).count()
    }

    /// Total occurrences of all genes: the strand's fitness score.
    pub fn fitness(&self, genes: &[Gene]) -> usize {
        genes.iter().map(|gene| self.count_occurrences(gene)).sum()
    }

    /// Fraction of positions not covered by any gene match.
    ///
    /// Matches are found with the same scan as `count_occurrences`; positions
    /// covered by several genes count once. An empty strand returns `1.0`.
    pub fn unused_ratio(&self, genes: &[Gene]) -> f64 {
        if self.0.is_empty() {
            return 1.0;
        }

        let mut used = vec![false; self.0.len()];
        for gene in genes {
            for start in matches(&self.0, gene.as_slice()) {
                used[start..start + gene.len()].fill(true);
            }
        }

        let unused = used.iter().filter(|&&covered| !covered).count();
        unused as f64 / self.0.len() as f64
    }
}

impl From<Vec<char>> for Strand {
    fn from(sequence: Vec<char>) -> Self {
        Self(sequence.into())
    }
}

impl From<&str> for Strand {
    fn from(s: &str) -> Self {
        Self(s.chars().collect::<Vec<_>>().into())
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0.iter() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Position of the first match of `needle` at or after `from`.
fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

/// Start positions of non-overlapping matches, left to right.
fn matches<'a>(haystack: &'a [char], needle: &'a [char]) -> impl Iterator<Item = usize> + 'a {
    let mut next = 0;
    std::iter::from_fn(move || {
        let start = find(haystack, needle, next)?;
        next = start + needle.len();
        Some(start)
    })
}
