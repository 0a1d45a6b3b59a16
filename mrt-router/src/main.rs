use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mrt_router::cli::{self, Session};
use mrt_router::planner::{Router, TimeModel, TimingConfig};
use mrt_router::stations::{FuzzyResolver, load_stations};

/// Find the fastest MRT route for a given departure time.
///
/// Without --from and --to, starts an interactive session.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Station map CSV: code, name, opening date.
    #[arg(long, default_value = "StationMap.csv")]
    stations: PathBuf,

    /// JSON file overriding the default travel and transfer times.
    #[arg(long)]
    timings: Option<PathBuf>,

    /// Origin station name or code.
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination station name or code.
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Departure as "HH:MM DD/MM/YYYY", or "now".
    #[arg(long, default_value = "now")]
    at: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let network = match load_stations(&args.stations) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", args.stations.display());
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.timings {
        Some(path) => match TimingConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => TimingConfig::default(),
    };

    let router = Router::new(&network, TimeModel::new(config));
    let resolver = FuzzyResolver::new(&network);

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let now = chrono::Local::now().naive_local();
        let result = cli::parse_at(&args.at, now)
            .map_err(cli::CliError::from)
            .and_then(|at| cli::plan_once(&router, &resolver, from, to, at))
            .and_then(|route| Ok(cli::print_route(&mut io::stdout().lock(), &route)?));
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match Session::new(&router, &resolver, stdin.lock(), stdout.lock()).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
