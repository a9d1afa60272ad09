use clap::{Parser, Subcommand};
use vcf_factory::{run_generate, run_remove};
use vcf_populate::{VcfPopulateArgs, VcfRemoveArgs};

#[derive(Parser)]
#[command(name = "vcf-factory")]
#[command(about = "Generate synthetic VCF files from a declarative schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a VCF file from a schema
    Generate {
        #[command(flatten)]
        args: VcfPopulateArgs,
    },

    /// Delete a generated VCF file
    Remove {
        #[command(flatten)]
        args: VcfRemoveArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            if let Some(metrics) = run_generate(&args)? {
                tracing::info!(
                    "Generated {:?}: {} rows in {:?}",
                    args.output,
                    metrics.rows_written,
                    metrics.total_duration
                );
            }
        }
        Commands::Remove { args } => run_remove(&args)?,
    }

    Ok(())
}
