use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Alphabet;
use crate::errors::GeneError;

/// A fixed, non-empty run of symbols that every organism must carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Gene(Arc<[char]>);

impl Gene {
    /// Create a gene from its symbols. Empty genes are rejected.
    pub fn new(symbols: Vec<char>) -> Result<Self, GeneError> {
        if symbols.is_empty() {
            return Err(GeneError::ZeroLength);
        }
        Ok(Self(symbols.into()))
    }

    /// Number of symbols in the gene.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; genes are never empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl TryFrom<String> for Gene {
    type Error = GeneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s.chars().collect())
    }
}

impl From<Gene> for String {
    fn from(gene: Gene) -> Self {
        gene.to_string()
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0.iter() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// The essential genes of one simulation: distinct and all of one length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Gene>", try_from = "Vec<Gene>")]
pub struct GeneSet {
    genes: Vec<Gene>,
}

impl GeneSet {
    /// Draw `count` distinct random genes of `length` symbols.
    ///
    /// Duplicates are redrawn, so the alphabet must be able to produce at
    /// least `count` different genes of this length.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        length: usize,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, GeneError> {
        check_capacity(count, length, alphabet)?;

        let mut seen = HashSet::with_capacity(count);
        let mut genes = Vec::with_capacity(count);
        while genes.len() < count {
            let symbols = alphabet.random_sequence(length, rng);
            if seen.insert(symbols.clone()) {
                genes.push(Gene::new(symbols)?);
            }
        }

        Ok(Self { genes })
    }

    /// Build a gene set from explicit strings, checking each against the
    /// alphabet and the expected length.
    pub fn from_strings<S: AsRef<str>>(
        genes: &[S],
        length: usize,
        alphabet: &Alphabet,
    ) -> Result<Self, GeneError> {
        if genes.is_empty() {
            return Err(GeneError::ZeroCount);
        }

        let mut parsed: Vec<Gene> = Vec::with_capacity(genes.len());
        for raw in genes {
            let raw = raw.as_ref();
            let symbols: Vec<char> = raw.chars().collect();
            if let Some(&symbol) = symbols.iter().find(|&&c| !alphabet.contains(c)) {
                return Err(GeneError::UnknownSymbol {
                    gene: raw.to_string(),
                    symbol,
                });
            }
            if symbols.len() != length {
                return Err(GeneError::LengthMismatch {
                    gene: raw.to_string(),
                    expected: length,
                    actual: symbols.len(),
                });
            }
            let gene = Gene::new(symbols)?;
            if parsed.contains(&gene) {
                return Err(GeneError::Duplicate(raw.to_string()));
            }
            parsed.push(gene);
        }

        Ok(Self { genes: parsed })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Gene] {
        &self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    /// Sum of all gene lengths: the minimum length of a viable strand.
    pub fn total_length(&self) -> usize {
        total_length(&self.genes)
    }
}

impl TryFrom<Vec<Gene>> for GeneSet {
    type Error = GeneError;

    /// Accepts a non-empty list of distinct genes sharing one length.
    fn try_from(genes: Vec<Gene>) -> Result<Self, Self::Error> {
        let Some(first) = genes.first() else {
            return Err(GeneError::ZeroCount);
        };
        let length = first.len();
        for (i, gene) in genes.iter().enumerate() {
            if gene.len() != length {
                return Err(GeneError::LengthMismatch {
                    gene: gene.to_string(),
                    expected: length,
                    actual: gene.len(),
                });
            }
            if genes[..i].contains(gene) {
                return Err(GeneError::Duplicate(gene.to_string()));
            }
        }
        Ok(Self { genes })
    }
}

impl From<GeneSet> for Vec<Gene> {
    fn from(set: GeneSet) -> Self {
        set.genes
    }
}

impl<'a> IntoIterator for &'a GeneSet {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

/// Sum of the lengths of `genes`.
pub fn total_length(genes: &[Gene]) -> usize {
    genes.iter().map(Gene::len).sum()
}

fn check_capacity(count: usize, length: usize, alphabet: &Alphabet) -> Result<(), GeneError> {
    if length == 0 {
        return Err(GeneError::ZeroLength);
    }
    if count == 0 {
        return Err(GeneError::ZeroCount);
    }

    // `None` means the number of possible genes overflowed, i.e. plenty.
    let possible = u32::try_from(length)
        .ok()
        .and_then(|exp| alphabet.len().checked_pow(exp));
    match possible {
        Some(possible) if possible < count => Err(GeneError::TooManyGenes {
            count,
            length,
            symbols: alphabet.len(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_gene_new() {
        let gene = Gene::new(vec!['A', 'C']).unwrap();
        assert_eq!(gene.len(), 2);
        assert_eq!(gene.to_string(), "AC");
        assert_eq!(Gene::new(vec![]), Err(GeneError::ZeroLength));
    }

    #[test]
    fn test_generate_distinct_genes() {
        let alphabet = Alphabet::dna();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let genes = GeneSet::generate(10, 6, &alphabet, &mut rng).unwrap();
        assert_eq!(genes.len(), 10);
        assert_eq!(genes.total_length(), 60);

        let unique: HashSet<_> = genes.iter().collect();
        assert_eq!(unique.len(), 10);
        for gene in &genes {
            assert_eq!(gene.len(), 6);
            assert!(gene.as_slice().iter().all(|&c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_generate_exhausts_small_space() {
        // Exactly 4 genes of length 2 exist over {0, 1}
        let alphabet = Alphabet::new(vec!['0', '1']).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);

        let genes = GeneSet::generate(4, 2, &alphabet, &mut rng).unwrap();
        assert_eq!(genes.len(), 4);

        let err = GeneSet::generate(5, 2, &alphabet, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GeneError::TooManyGenes {
                count: 5,
                length: 2,
                symbols: 2
            }
        );
    }

    #[test]
    fn test_generate_rejects_zero_values() {
        let alphabet = Alphabet::dna();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert_eq!(
            GeneSet::generate(0, 4, &alphabet, &mut rng),
            Err(GeneError::ZeroCount)
        );
        assert_eq!(
            GeneSet::generate(2, 0, &alphabet, &mut rng),
            Err(GeneError::ZeroLength)
        );
    }

    #[test]
    fn test_generate_long_genes_do_not_overflow() {
        let alphabet = Alphabet::dna();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let genes = GeneSet::generate(2, 100, &alphabet, &mut rng).unwrap();
        assert_eq!(genes.total_length(), 200);
    }

    #[test]
    fn test_from_strings() {
        let alphabet = Alphabet::dna();
        let genes = GeneSet::from_strings(&["ATCG", "GGCC"], 4, &alphabet).unwrap();
        assert_eq!(genes.len(), 2);
        assert_eq!(genes.as_slice()[1].to_string(), "GGCC");
    }

    #[test]
    fn test_from_strings_validation() {
        let alphabet = Alphabet::dna();

        assert!(matches!(
            GeneSet::from_strings(&["ATXG"], 4, &alphabet),
            Err(GeneError::UnknownSymbol { symbol: 'X', .. })
        ));
        assert!(matches!(
            GeneSet::from_strings(&["ATC"], 4, &alphabet),
            Err(GeneError::LengthMismatch { actual: 3, .. })
        ));
        assert_eq!(
            GeneSet::from_strings(&["ATCG", "ATCG"], 4, &alphabet),
            Err(GeneError::Duplicate("ATCG".to_string()))
        );
        assert_eq!(
            GeneSet::from_strings::<&str>(&[], 4, &alphabet),
            Err(GeneError::ZeroCount)
        );
    }

    #[test]
    fn test_gene_serializes_as_string() {
        let gene = Gene::new(vec!['G', 'A']).unwrap();
        assert_eq!(serde_json::to_string(&gene).unwrap(), r#""GA""#);
        let back: Gene = serde_json::from_str(r#""GA""#).unwrap();
        assert_eq!(back, gene);
    }

    #[test]
    fn test_gene_set_deserialize_validates() {
        let alphabet = Alphabet::dna();
        let genes = GeneSet::from_strings(&["ATCG", "GGCC"], 4, &alphabet).unwrap();
        let json = serde_json::to_string(&genes).unwrap();
        assert_eq!(json, r#"["ATCG","GGCC"]"#);
        let back: GeneSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, genes);

        assert!(serde_json::from_str::<GeneSet>("[]").is_err());
        assert!(serde_json::from_str::<GeneSet>(r#"["ATCG","GG"]"#).is_err());
        assert!(serde_json::from_str::<GeneSet>(r#"["ATCG","ATCG"]"#).is_err());
        assert_eq!(
            GeneSet::try_from(vec![
                Gene::new(vec!['A', 'C']).unwrap(),
                Gene::new(vec!['A']).unwrap()
            ]),
            Err(GeneError::LengthMismatch {
                gene: "A".into(),
                expected: 2,
                actual: 1
            })
        );
    }
}
