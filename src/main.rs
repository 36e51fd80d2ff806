use anyhow::Result;
use clap::{Parser, Subcommand};
use hitgrid::compare;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hitgrid")]
#[command(version = "0.1.0")]
#[command(about = "Compare best hits of the same queries against two databases over a threshold grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each query's best hit as first, second, or equal per grid point
    Compare(compare::CompareArgs),
}

/// Installs the stderr subscriber. `HITGRID_LOG` takes precedence over `-v`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("HITGRID_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare(args) => {
            init_logging(args.verbose);
            compare::run(args)?;
        }
    }
    Ok(())
}
