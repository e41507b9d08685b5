use anyhow::{Context, Result};
use genepool_sim::simulation::{Configuration, GenePool, GenerationStats};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::args::RunArgs;
use crate::export;
use crate::printing;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    println!("🧬 Genepool - Running Simulation");
    println!("============================================\n");

    let config = load_configuration(args)?;
    printing::print_parameters(&config);

    let total_generations = config.execution.generations;
    let mut pool = GenePool::new(config).context("Failed to initialize simulation")?;
    printing::print_genes(pool.genes());

    let pb = if args.no_progress {
        None
    } else {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    };

    while !pool.is_complete() {
        let snapshot = pool.advance();
        if let Some(pb) = &pb {
            pb.set_position(pool.generation() as u64);
            if let Some(snapshot) = &snapshot {
                pb.set_message(format!("size {}", snapshot.stats().population_size));
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let stats: Vec<GenerationStats> = pool.stats().copied().collect();

    println!();
    printing::print_stats_header();
    let every = args.every.max(1);
    for (i, row) in stats.iter().enumerate() {
        if i % every == 0 || i + 1 == stats.len() {
            printing::print_stats_row(row);
        }
    }

    printing::print_outcome(&pool);

    if let Some(path) = &args.output {
        export::write_stats(&stats, &args.format, path)
            .with_context(|| format!("Failed to export statistics to {}", path.display()))?;
        println!("✓ Statistics written: {}", path.display());
    }

    Ok(())
}

fn load_configuration(args: &RunArgs) -> Result<Configuration> {
    let Some(path) = &args.config else {
        return args
            .simulation
            .builder()
            .configuration()
            .context("Invalid simulation parameters");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut config: Configuration = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))?;
    info!("Loaded configuration from {}", path.display());

    if let Some(seed) = args.simulation.genes.seed {
        config.execution.seed = Some(seed);
    }
    Ok(config)
}
