//! Organisms and the strands they carry.

mod organism;

pub use organism::{Organism, ReproductionMode};
