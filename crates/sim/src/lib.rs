//! # Gene pool simulation
//!
//! The `genepool_sim` crate evolves populations of symbolic DNA strands.
//! Organisms must keep a set of essential genes intact while their strands
//! are copied with insertions, deletions and substitutions; survivors are
//! ranked by how many gene copies they carry.
//!
//! Modules follow the data flow: `base` (alphabet, genes, strands),
//! `evolution` (mutation, recombination, selection), `genome` (organisms)
//! and `simulation` (configuration and the generation loop).

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Alphabet, Gene, GeneSet, Strand};
