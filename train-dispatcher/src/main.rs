use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use train_dispatcher::domain::StationName;
use train_dispatcher::loader;
use train_dispatcher::planner::{self, PlannerConfig};
use train_dispatcher::schedule::{self, Schedule};

/// Compute a turn-by-turn movement schedule for trains crossing a rail
/// network, one train per intermediate station per turn.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the network map file
    map: PathBuf,

    /// Station the trains depart from
    source: String,

    /// Station the trains must reach
    destination: String,

    /// Number of trains to move
    trains: usize,

    /// Stop enumerating after this many routes (unlimited when omitted)
    #[arg(long)]
    max_routes: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let started = Instant::now();

    match run(&args) {
        Ok(schedule) => {
            print!("{schedule}");
            eprintln!(
                "\n\x1b[100m Program executed in: \x1b[0m {:?}",
                started.elapsed()
            );
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("\x1b[41m ! Error ! \x1b[0m {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Schedule, String> {
    let source = StationName::parse(&args.source)
        .map_err(|error| format!("source station: {error}"))?;
    let destination = StationName::parse(&args.destination)
        .map_err(|error| format!("destination station: {error}"))?;

    let network = loader::load_network(&args.map)
        .map_err(|error| format!("error loading network map: {error}"))?;

    let config = PlannerConfig {
        max_routes: args.max_routes,
    };
    let plan = planner::plan(&network, &source, &destination, args.trains, &config)
        .map_err(|error| error.to_string())?;

    Ok(schedule::simulate(&plan))
}
