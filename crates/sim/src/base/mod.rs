//! Base types for sequence representation.
//!
//! This module provides the alphabet symbols are drawn from, the essential
//! genes an organism must carry, and the immutable `Strand` built from them.

mod alphabet;
pub mod gene;
mod strand;

pub use alphabet::Alphabet;
pub use gene::{Gene, GeneSet};
pub use strand::Strand;
