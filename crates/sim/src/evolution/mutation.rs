//! Point mutations applied while copying a strand.
//!
//! Copying walks the parent sequence once, left to right. Every position gets
//! one chance of an insertion before it, one chance of being deleted, and (if
//! it survives) one chance of being substituted by a random symbol. A final
//! insertion chance follows the last position. Insertions never compound:
//! an inserted symbol is not itself revisited.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::Alphabet;
pub use crate::errors::MutationError;

/// Per-position chances of insertion, deletion and substitution.
///
/// Each chance lies in `[0.0, 1.0)`; the three are drawn independently,
/// except that a deleted position skips its substitution draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRates")]
pub struct MutationRates {
    insert_chance: f64,
    delete_chance: f64,
    substitute_chance: f64,
}

impl MutationRates {
    /// Create validated mutation chances.
    ///
    /// # Errors
    /// Returns `MutationError::InvalidChance` if any chance is NaN or
    /// outside `[0.0, 1.0)`.
    pub fn new(
        insert_chance: f64,
        delete_chance: f64,
        substitute_chance: f64,
    ) -> Result<Self, MutationError> {
        check_chance("insert", insert_chance)?;
        check_chance("delete", delete_chance)?;
        check_chance("substitute", substitute_chance)?;

        Ok(Self {
            insert_chance,
            delete_chance,
            substitute_chance,
        })
    }

    /// No mutation at all: copies are exact.
    pub fn none() -> Self {
        Self {
            insert_chance: 0.0,
            delete_chance: 0.0,
            substitute_chance: 0.0,
        }
    }

    /// Same chance for all three kinds of mutation.
    pub fn uniform(chance: f64) -> Result<Self, MutationError> {
        Self::new(chance, chance, chance)
    }

    #[inline]
    pub fn insert_chance(&self) -> f64 {
        self.insert_chance
    }

    #[inline]
    pub fn delete_chance(&self) -> f64 {
        self.delete_chance
    }

    #[inline]
    pub fn substitute_chance(&self) -> f64 {
        self.substitute_chance
    }

    /// Return `true` if every chance is zero.
    pub fn is_none(&self) -> bool {
        self.insert_chance == 0.0 && self.delete_chance == 0.0 && self.substitute_chance == 0.0
    }

    /// Produce a mutated copy of `sequence`. The input is left untouched.
    pub fn mutate_sequence<R: Rng + ?Sized>(
        &self,
        sequence: &[char],
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Vec<char> {
        let mut mutated = Vec::with_capacity(sequence.len() + 1);

        for &symbol in sequence {
            if rng.random::<f64>() < self.insert_chance {
                mutated.push(alphabet.random_symbol(rng));
            }

            if rng.random::<f64>() < self.delete_chance {
                continue;
            }

            if rng.random::<f64>() < self.substitute_chance {
                mutated.push(alphabet.random_symbol(rng));
            } else {
                mutated.push(symbol);
            }
        }

        if rng.random::<f64>() < self.insert_chance {
            mutated.push(alphabet.random_symbol(rng));
        }

        mutated
    }
}

impl Default for MutationRates {
    fn default() -> Self {
        Self::none()
    }
}

/// Unchecked mirror of `MutationRates` so deserialization goes through `new`.
#[derive(Deserialize)]
struct RawRates {
    insert_chance: f64,
    delete_chance: f64,
    substitute_chance: f64,
}

impl TryFrom<RawRates> for MutationRates {
    type Error = MutationError;

    fn try_from(raw: RawRates) -> Result<Self, Self::Error> {
        Self::new(raw.insert_chance, raw.delete_chance, raw.substitute_chance)
    }
}

#[inline]
fn check_chance(name: &'static str, chance: f64) -> Result<(), MutationError> {
    if (0.0..1.0).contains(&chance) {
        Ok(())
    } else {
        Err(MutationError::InvalidChance(name, chance))
    }
}
