use genepool_sim::base::GeneSet;
use genepool_sim::simulation::{
    Configuration, GenePool, GenerationStats, ReproductionStrategy, SimulationState, StrandLength,
};

pub fn print_parameters(config: &Configuration) {
    let exec = &config.execution;
    let init = &config.initialization;
    let evolution = &config.evolution;

    println!("\n📋 Simulation Configuration");
    println!(
        "  • Initial Population: {} [-n, --initial-population]",
        exec.initial_population
    );
    println!(
        "  • Max Population: {} [-m, --max-population]",
        exec.max_population
    );
    println!("  • Generations: {} [-g, --generations]", exec.generations);
    if let Some(seed) = exec.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Genes & Strands");
    println!("  • Alphabet: {} [-a, --alphabet]", init.alphabet);
    println!("  • Gene Length: {} [-l, --gene-length]", init.gene_length);
    match &init.genes {
        Some(genes) => println!("  • Genes: {} [--genes]", genes.join(", ")),
        None => println!("  • Gene Count: {} [-k, --gene-count]", init.gene_count),
    }
    match init.strand_length {
        StrandLength::UnusedRatio(ratio) => {
            println!("  • Unused Ratio: {ratio:.2} [--unused-ratio]")
        }
        StrandLength::Explicit(length) => println!("  • Strand Length: {length} [--strand-length]"),
    }
    if let Ok(length) = init.resolve_strand_length() {
        println!("  • Initial Strand Length: {length}");
    }

    println!("\n⚡ Mutation Parameters");
    println!(
        "  • Insertion: {:.4} [--insert-chance]",
        evolution.mutation.insert_chance()
    );
    println!(
        "  • Deletion: {:.4} [--delete-chance]",
        evolution.mutation.delete_chance()
    );
    println!(
        "  • Substitution: {:.4} [--substitute-chance]",
        evolution.mutation.substitute_chance()
    );

    println!("\n🔀 Reproduction");
    println!("  • Mode: {} [--mode]", evolution.mode);
    match evolution.strategy {
        ReproductionStrategy::Doubling => println!("  • Strategy: doubling (2 children per member)"),
        ReproductionStrategy::FixedBrood {
            children_per_parent,
        } => println!("  • Strategy: fixed brood of {children_per_parent} [--children-per-parent]"),
    }
    println!();
}

pub fn print_genes(genes: &GeneSet) {
    println!("\n🧬 Essential Genes");
    for (i, gene) in genes.iter().enumerate() {
        println!("  {:>3}. {gene}", i + 1);
    }
}

pub fn print_stats_header() {
    println!(
        "{:>6} {:>8} {:>10} {:>10} {:>10} {:>10} {:>12} {:>8}",
        "gen", "size", "fit.total", "fit.mean", "fit.med", "len.mean", "len.total", "unused"
    );
}

pub fn print_stats_row(stats: &GenerationStats) {
    println!(
        "{:>6} {:>8} {:>10} {:>10.2} {:>10.1} {:>10.2} {:>12} {:>8.3}",
        stats.generation,
        stats.population_size,
        stats.total_fitness,
        stats.average_fitness,
        stats.median_fitness,
        stats.average_length,
        stats.total_length,
        stats.average_unused_ratio
    );
}

pub fn print_outcome(pool: &GenePool) {
    match pool.state() {
        SimulationState::Completed => {
            println!("\n✓ Simulation complete!");
            println!("  Final generation: {}", pool.generation());
            println!("  Final population: {}", pool.population().size());
        }
        SimulationState::Extinct => {
            println!("\n☠ Population extinct at generation {}", pool.generation());
        }
        SimulationState::Running => {
            println!("\n⏸ Stopped at generation {}", pool.generation());
        }
    }
}
