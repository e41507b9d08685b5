use clap::{Args, ValueEnum};
use genepool_sim::base::Alphabet;
use genepool_sim::genome::ReproductionMode;
use genepool_sim::simulation::{GenePoolBuilder, ReproductionStrategy};
use std::path::PathBuf;

use crate::defaults;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// One strand per organism, copied to offspring
    Asexual,
    /// Two strands per organism, recombined into gametes
    Sexual,
}

impl From<ModeArg> for ReproductionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Asexual => ReproductionMode::Asexual,
            ModeArg::Sexual => ReproductionMode::Sexual,
        }
    }
}

/// Essential gene parameters, shared by `genes` and the simulation commands.
#[derive(Args, Debug, Clone)]
pub struct GeneArgs {
    /// Symbols strands are built from, comma separated
    #[arg(short, long, default_value = defaults::ALPHABET)]
    pub alphabet: Alphabet,

    /// Length of each essential gene
    #[arg(short = 'l', long, default_value_t = defaults::GENE_LENGTH)]
    pub gene_length: usize,

    /// Number of random essential genes
    #[arg(short = 'k', long, default_value_t = defaults::GENE_COUNT)]
    pub gene_count: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    #[command(flatten)]
    pub genes: GeneArgs,

    /// Explicit essential genes, comma separated (overrides --gene-count)
    #[arg(long = "genes", value_delimiter = ',')]
    pub explicit_genes: Option<Vec<String>>,

    /// Target fraction of each new strand not covered by genes
    #[arg(long, default_value_t = defaults::UNUSED_RATIO)]
    pub unused_ratio: f64,

    /// Fixed strand length (instead of --unused-ratio)
    #[arg(long, conflicts_with = "unused_ratio")]
    pub strand_length: Option<usize>,

    /// Organisms in generation 0
    #[arg(short = 'n', long, default_value_t = defaults::INITIAL_POPULATION)]
    pub initial_population: usize,

    /// Population cap after each selection step
    #[arg(short = 'm', long, default_value_t = defaults::MAX_POPULATION)]
    pub max_population: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Insertion chance (per position per copy)
    #[arg(long, default_value_t = defaults::INSERT_CHANCE)]
    pub insert_chance: f64,

    /// Deletion chance (per position per copy)
    #[arg(long, default_value_t = defaults::DELETE_CHANCE)]
    pub delete_chance: f64,

    /// Substitution chance (per position per copy)
    #[arg(long, default_value_t = defaults::SUBSTITUTE_CHANCE)]
    pub substitute_chance: f64,

    /// Reproduction mode
    #[arg(long, value_enum, default_value_t = ModeArg::Asexual)]
    pub mode: ModeArg,

    /// Give every organism this many children instead of doubling the
    /// population each generation
    #[arg(long)]
    pub children_per_parent: Option<usize>,
}

impl SimulationArgs {
    /// A builder carrying every argument. Validation happens when it is built.
    pub fn builder(&self) -> GenePoolBuilder {
        let mut builder = GenePoolBuilder::new()
            .alphabet(self.genes.alphabet.clone())
            .gene_length(self.genes.gene_length)
            .gene_count(self.genes.gene_count)
            .initial_population(self.initial_population)
            .max_population(self.max_population)
            .generations(self.generations)
            .mutation(self.insert_chance, self.delete_chance, self.substitute_chance)
            .mode(self.mode.into());

        builder = match self.strand_length {
            Some(length) => builder.strand_length(length),
            None => builder.unused_ratio(self.unused_ratio),
        };
        if let Some(genes) = &self.explicit_genes {
            builder = builder.genes(genes.iter().cloned());
        }
        if let Some(children_per_parent) = self.children_per_parent {
            builder = builder.strategy(ReproductionStrategy::FixedBrood {
                children_per_parent,
            });
        }
        if let Some(seed) = self.genes.seed {
            builder = builder.seed(seed);
        }
        builder
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Output configuration file
    #[arg(short, long, default_value = defaults::CONFIG_FILE)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Load the configuration from a JSON file written by `init`
    ///
    /// Simulation flags are ignored when a file is given, except --seed,
    /// which overrides the stored seed.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write per-generation statistics to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (csv, json, series)
    #[arg(short, long, default_value = defaults::EXPORT_FORMAT)]
    pub format: String,

    /// Print every Nth generation in the summary table
    #[arg(long, default_value_t = 1)]
    pub every: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
