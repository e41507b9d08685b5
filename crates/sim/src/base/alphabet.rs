use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AlphabetError;

/// An ordered set of symbols from which strands and genes are drawn.
///
/// The symbols are stored in an `Arc<[char]>` so an `Alphabet` can be cloned
/// into every configuration and worker cheaply. Construction rejects
/// alphabets with fewer than two symbols or with duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet(Arc<[char]>);

impl Alphabet {
    /// Create an alphabet from a list of symbols.
    ///
    /// ```rust
    /// # use genepool_sim::base::Alphabet;
    /// let alphabet = Alphabet::new(vec!['A', 'T', 'C', 'G']).unwrap();
    /// assert_eq!(alphabet.len(), 4);
    /// assert!(Alphabet::new(vec!['A']).is_err());
    /// ```
    pub fn new(symbols: Vec<char>) -> Result<Self, AlphabetError> {
        if symbols.len() < 2 {
            return Err(AlphabetError::TooFewSymbols(symbols.len()));
        }
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(&symbol) {
                return Err(AlphabetError::DuplicateSymbol(symbol));
            }
        }
        Ok(Self(symbols.into()))
    }

    /// The four DNA bases in the order `A, T, C, G`.
    pub fn dna() -> Self {
        Self(Arc::from(['A', 'T', 'C', 'G']))
    }

    /// Number of symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    /// Return `true` if `symbol` belongs to this alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.0.contains(&symbol)
    }

    /// Draw one symbol uniformly at random.
    #[inline]
    pub fn random_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.0[rng.random_range(0..self.0.len())]
    }

    /// Draw `length` independent random symbols.
    pub fn random_sequence<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Vec<char> {
        (0..length).map(|_| self.random_symbol(rng)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.0.to_vec()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    /// Parse a comma separated symbol list such as `"A, T, C, G"`.
    ///
    /// Whitespace around entries is ignored and empty entries are skipped.
    /// An entry of several characters contributes each of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .flat_map(str::chars)
            .collect();
        Self::new(symbols)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
