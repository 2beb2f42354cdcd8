mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{OutputFormat, RunArgs};
use commands::{organisms, run};

/// Replisome: a DNA replication fork simulator
///
/// Simulates semi-discontinuous replication of a template: continuous
/// leading-strand synthesis and Okazaki fragments on the lagging strand.
#[derive(Parser, Debug)]
#[command(name = "replisome")]
#[command(author, version, about = "Simulates DNA replication at a single fork", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replicate a template and report the result.
    Run(Box<RunArgs>),

    /// List the built-in organism profiles.
    Organisms {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => defaults::LOG_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            run::run_replication(&args)?;
        }
        Commands::Organisms { format } => {
            organisms::list_organisms(format)?;
        }
    }

    Ok(())
}
