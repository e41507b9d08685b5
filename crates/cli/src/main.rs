mod args;
mod commands;
pub mod defaults;
mod export;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{GeneArgs, InitArgs, RunArgs};
use commands::{genes, init, run};

/// Genepool: an essential-gene evolution simulator
///
/// Organisms carry DNA strands that must keep a set of essential genes
/// intact while being copied with insertions, deletions and substitutions.
/// Each generation keeps the viable children with the most gene copies.
#[derive(Parser, Debug)]
#[command(name = "genepool")]
#[command(author, version, about = "Simulates essential-gene selection on DNA strands", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw and print a set of essential genes.
    Genes(GeneArgs),

    /// Write a simulation configuration file.
    ///
    /// Sets up the parameters for a new experiment but does not run it yet.
    Init(Box<InitArgs>),

    /// Run a simulation to completion or extinction.
    ///
    /// Uses the flags given, or a configuration file from `init`.
    Run(Box<RunArgs>),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Genes(args) => genes::print_genes(&args)?,
        Commands::Init(args) => init::init_simulation(&args)?,
        Commands::Run(args) => run::run_simulation(&args)?,
    }

    Ok(())
}
