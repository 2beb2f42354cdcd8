use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use replisome_sim::base::DnaSequence;
use replisome_sim::simulation::{OrganismSpec, ReplicationBuilder, ReplicationConfig};
use serde_json::json;
use tracing::info;

use crate::args::{OutputFormat, RunArgs};
use crate::commands::export::write_events;
use crate::defaults;
use crate::printing::{print_run_header, print_summary};

pub fn run_replication(args: &RunArgs) -> Result<()> {
    let pretty = args.format == OutputFormat::Pretty;
    if pretty {
        println!("🧬 Replisome - Running Replication");
        println!("============================================\n");
    }

    let config = load_config(args)?;
    let builder = ReplicationBuilder::from_config(&config).context("Invalid configuration")?;
    let (template, builder) = with_template(builder, args)?;
    let mut coordinator = builder.build().context("Failed to set up replication")?;

    if pretty {
        print_run_header(&config, &coordinator, &template);
    }

    coordinator
        .initialize_replication()
        .context("Failed to initialize replication")?;

    let pb = if args.progress {
        let pb = ProgressBar::new(coordinator.total_length().max(0) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} bp ({eta})",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let max_steps = coordinator.max_steps();
    let result = coordinator.complete_replication_with(max_steps, |state| {
        if let Some(pb) = &pb {
            pb.set_position(state.fork_position.max(0) as u64);
        }
    });
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let state = result.context("Replication failed")?;
    info!(steps = coordinator.steps_taken(), "run finished");

    let statistics = coordinator.statistics();
    match args.format {
        OutputFormat::Pretty => print_summary(&state, &statistics),
        OutputFormat::Json => {
            let report = json!({
                "organism": coordinator.organism(),
                "state": state,
                "statistics": statistics,
            });
            let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{text}");
        }
    }

    if let Some(path) = &args.events {
        write_events(path, coordinator.events())?;
        if pretty {
            println!("✓ {} events written to: {}", coordinator.events().len(), path.display());
        }
    }

    Ok(())
}

/// Configuration file or organism preset, with command line overrides applied.
fn load_config(args: &RunArgs) -> Result<ReplicationConfig> {
    let mut config = match &args.config {
        Some(path) => ReplicationConfig::from_file(path).with_context(|| {
            format!("Failed to load configuration from {}", path.display())
        })?,
        None => {
            let name = args.organism.as_deref().unwrap_or(defaults::ORGANISM);
            ReplicationConfig::new(OrganismSpec::Preset(name.to_string()))
        }
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    if let Some(step_size) = args.step_size {
        config.step_size = Some(step_size);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Attach the template chosen on the command line. Returns a short
/// description of where it came from.
fn with_template(
    builder: ReplicationBuilder,
    args: &RunArgs,
) -> Result<(String, ReplicationBuilder)> {
    if let Some(text) = &args.sequence {
        let sequence: DnaSequence = text.parse().context("Invalid --sequence")?;
        return Ok(("command line".to_string(), builder.sequence(&sequence)));
    }

    if let Some(path) = &args.fasta {
        let (id, sequence) = DnaSequence::read_fasta(path)
            .with_context(|| format!("Failed to read FASTA file {}", path.display()))?;
        let label = if id.is_empty() {
            path.display().to_string()
        } else {
            format!("{id} ({})", path.display())
        };
        return Ok((label, builder.sequence(&sequence)));
    }

    Ok((
        format!("random, {} bp", args.length),
        builder.sequence_length(args.length),
    ))
}
