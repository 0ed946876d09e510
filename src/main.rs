use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dataroom_reports::{ExportError, Result, export};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Export(args) => execute_export(args),
    }
}

fn execute_export(args: ExportArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ExportError::MissingInput(args.input));
    }

    export::json_to_excel(&args.input, &args.output)
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ExportError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export an assembled due-diligence project into an Excel report."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flatten an assembled project tree into a styled workbook.
    Export(ExportArgs),
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Assembled project tree (JSON).
    #[arg(long)]
    input: PathBuf,

    /// Destination workbook path.
    #[arg(long)]
    output: PathBuf,
}
