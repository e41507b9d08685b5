//! Shared default values for simulation configuration.
//! Used by the clap arguments of every command.

pub const CONFIG_FILE: &str = "genepool.json";

pub const ALPHABET: &str = "A,T,C,G";
pub const GENE_LENGTH: usize = 10;
pub const GENE_COUNT: usize = 3;
pub const UNUSED_RATIO: f64 = 0.5;

pub const INITIAL_POPULATION: usize = 10;
pub const MAX_POPULATION: usize = 100;
pub const GENERATIONS: usize = 100;

// Evolution
pub const INSERT_CHANCE: f64 = 0.01;
pub const DELETE_CHANCE: f64 = 0.01;
pub const SUBSTITUTE_CHANCE: f64 = 0.01;

pub const EXPORT_FORMAT: &str = "csv";
