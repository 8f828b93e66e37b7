use std::path::PathBuf;

use clap::Parser;

use knights_tour::config::{StartRange, TourConfig};
use knights_tour::core::square::{Square, SQUARE_COUNT};
use knights_tour::report::{run_all, summarize};
use knights_tour::topology::AdjacencyTable;

#[derive(Parser, Debug)]
#[command(
    name = "knights_tour",
    about = "Find open knight's tours on an 8x8 board, one search per start square"
)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search a single start square (algebraic like `a1`, or an index 0..63)
    #[arg(long, conflicts_with_all = ["from", "to", "all"])]
    start: Option<Square>,

    /// First start-square index (inclusive)
    #[arg(long)]
    from: Option<u8>,

    /// Last start-square index (exclusive)
    #[arg(long)]
    to: Option<u8>,

    /// Search every square of the board
    #[arg(long)]
    all: bool,

    /// Give up on a start square after this many completion checks
    #[arg(long)]
    max_steps: Option<u64>,

    /// Search start squares in parallel
    #[arg(long)]
    parallel: bool,

    /// Collect up to N tours per start square instead of stopping at the first
    #[arg(long)]
    enumerate: Option<usize>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,
}

fn build_config(args: &Args) -> Result<TourConfig, String> {
    let mut cfg = match &args.config {
        Some(path) => TourConfig::load(path).map_err(|e| e.to_string())?,
        None => TourConfig::default(),
    };

    if let Some(sq) = args.start {
        cfg.starts = StartRange::single(sq);
    } else if args.all {
        cfg.starts = StartRange::ALL;
    }
    if let Some(first) = args.from {
        cfg.starts.first = first;
    }
    if let Some(end) = args.to {
        cfg.starts.end = end;
    }
    if let Some(max_steps) = args.max_steps {
        cfg.limits.max_steps = Some(max_steps);
    }
    if args.parallel {
        cfg.parallel = true;
    }
    if args.enumerate.is_some() {
        cfg.enumerate = args.enumerate;
    }

    cfg.validate().map_err(|e| e.to_string())?;
    Ok(cfg)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let table = AdjacencyTable::shared();
    log::info!(
        "searching {} of {} start squares (parallel={}, max_steps={:?})",
        cfg.starts.len(),
        SQUARE_COUNT,
        cfg.parallel,
        cfg.limits.max_steps
    );

    let reports = run_all(&cfg, table);
    let summary = summarize(&reports);

    if args.json {
        let out = serde_json::json!({
            "config": cfg,
            "reports": reports,
            "summary": summary,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize reports: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for report in &reports {
            println!("{report}");
            println!();
        }
    }

    log::info!("{summary}");
}
