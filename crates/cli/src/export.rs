use anyhow::Result;
use genepool_sim::simulation::{GenerationStats, StatsSeries};
use std::path::Path;

/// Render per-generation statistics.
///
/// `csv` and `json` give one row per generation, `series` gives one array
/// per statistic.
pub fn render_stats(stats: &[GenerationStats], format: &str) -> Result<String> {
    let content = match format {
        "csv" => {
            let mut csv = String::from(
                "generation,population_size,total_fitness,average_fitness,median_fitness,\
                 average_length,total_length,average_unused_ratio\n",
            );
            for s in stats {
                csv.push_str(&format!(
                    "{},{},{},{},{},{},{},{}\n",
                    s.generation,
                    s.population_size,
                    s.total_fitness,
                    s.average_fitness,
                    s.median_fitness,
                    s.average_length,
                    s.total_length,
                    s.average_unused_ratio
                ));
            }
            csv
        }
        "json" => serde_json::to_string_pretty(stats)?,
        "series" => {
            let series: StatsSeries = stats.iter().collect();
            serde_json::to_string_pretty(&series)?
        }
        _ => anyhow::bail!("Unknown format '{format}'. Use: csv, json, or series"),
    };
    Ok(content)
}

pub fn write_stats(stats: &[GenerationStats], format: &str, path: &Path) -> Result<()> {
    let content = render_stats(stats, format)?;
    std::fs::write(path, content)?;
    Ok(())
}
