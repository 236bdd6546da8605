use std::path::PathBuf;

use clap::{Parser, Subcommand};
use histmerge::merge;
use histmerge::{MergeError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.quiet)?;
    match cli.command {
        Command::Merge(args) => execute_merge(args, cli.quiet),
        Command::Integrate(args) => execute_integrate(args),
    }
}

fn execute_merge(args: MergeArgs, quiet: bool) -> Result<()> {
    merge::merge_to_file(&args.inputs, &args.output)?;
    if !quiet {
        println!("Combined result written to {}", args.output.display());
    }
    Ok(())
}

fn execute_integrate(args: IntegrateArgs) -> Result<()> {
    let total = merge::integrate(&args.inputs, args.lower, args.upper)?;
    println!("{total}");
    Ok(())
}

fn init_logging(quiet: bool) -> Result<()> {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| MergeError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Combine histogram text files by summing counts per energy bin."
)]
struct Cli {
    /// Lower the log level and suppress the confirmation message.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge histogram files into one combined output file.
    Merge(MergeArgs),
    /// Sum the merged counts inside an energy window.
    Integrate(IntegrateArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Input histogram files, one `<energy> <counts>` record per line.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file path, overwritten if it already exists.
    #[arg(long, short)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct IntegrateArgs {
    /// Input histogram files, one `<energy> <counts>` record per line.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Lower edge of the energy window (inclusive).
    #[arg(long)]
    lower: f64,

    /// Upper edge of the energy window (inclusive).
    #[arg(long)]
    upper: f64,
}
