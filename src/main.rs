//! matrix-stats CLI: validate a 3×3 matrix and print its statistics.

use clap::{Parser, ValueEnum};
use matrix_stats::{build_sequential, compute, input, random, validate, COLS, ROWS};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "matrix-stats")]
#[command(about = "Per-column, per-row and overall statistics for a 3x3 matrix")]
#[command(version)]
struct Cli {
    /// Nine values in row-major order, separated by commas or spaces
    #[arg(long, conflicts_with = "seed", allow_hyphen_values = true)]
    values: Option<String>,

    /// Use a seeded random demo matrix instead of 0..9
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let values = match (&cli.values, cli.seed) {
        (Some(text), _) => input::parse_values(text)?,
        (None, Some(seed)) => random::demo_values(seed),
        (None, None) => build_sequential(ROWS, COLS)?
            .into_iter()
            .map(f64::from)
            .collect(),
    };
    info!("the array looks like: {values:?}");

    // Rejections are already logged by `validate`.
    if !validate(&values) {
        return Ok(());
    }

    let result = compute(&values)?;
    match cli.format {
        Format::Json if cli.pretty => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Json => println!("{}", serde_json::to_string(&result)?),
        Format::Text => print!("{result}"),
    }
    Ok(())
}
