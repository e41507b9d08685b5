use anyhow::{Context, Result};
use genepool_sim::base::GeneSet;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::args::GeneArgs;
use crate::printing;

pub fn print_genes(args: &GeneArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    };

    let genes = GeneSet::generate(args.gene_count, args.gene_length, &args.alphabet, &mut rng)
        .context("Failed to generate essential genes")?;

    printing::print_genes(&genes);
    println!(
        "\n  {} genes × {} symbols from [{}]",
        genes.len(),
        args.gene_length,
        args.alphabet
    );
    Ok(())
}
