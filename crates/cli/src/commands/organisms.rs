use anyhow::{Context, Result};
use replisome_sim::base::OrganismProfile;

use crate::args::OutputFormat;
use crate::printing::print_organism;

pub fn list_organisms(format: OutputFormat) -> Result<()> {
    let presets = OrganismProfile::presets();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&presets).context("Failed to serialize profiles")?;
            println!("{json}");
        }
        OutputFormat::Pretty => {
            println!("\n🧫 Built-in Organism Profiles");
            println!("{}", "=".repeat(50));
            for profile in &presets {
                print_organism(profile);
            }
            println!("\n💡 Use 'replisome run --organism <name>' to pick one");
        }
    }

    Ok(())
}
