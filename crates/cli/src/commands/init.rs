use anyhow::{Context, Result};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_simulation(args: &InitArgs) -> Result<()> {
    println!("🧬 Genepool - Essential Gene Evolution Simulator");
    println!("============================================\n");

    let config = args
        .simulation
        .builder()
        .configuration()
        .context("Invalid simulation parameters")?;

    print_parameters(&config);

    let json = serde_json::to_string_pretty(&config)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("✓ Configuration written: {}", args.output.display());
    println!(
        "\n💡 Use 'genepool run --config {}' to start the simulation",
        args.output.display()
    );

    Ok(())
}
