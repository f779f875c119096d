use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgGroup, Parser};
use hp_core::errors::{ErrorInfo, HpError};
use hp_lattice::Sequence;
use hp_mcmc::{RemcSearch, RunSummary, SearchConfig};

mod render;

#[derive(Parser, Debug)]
#[command(name = "hp-sim", about = "Replica-exchange Monte Carlo search in the 2D HP lattice model")]
#[command(group(ArgGroup::new("sequence").required(true).args(["aasequence", "hpsequence"])))]
struct Cli {
    /// Amino-acid sequence, reduced through the HP table.
    #[arg(long)]
    aasequence: Option<String>,
    /// Pre-reduced H/P sequence.
    #[arg(long)]
    hpsequence: Option<String>,
    /// Target energy; the search stops once a conformation reaches it.
    #[arg(long = "optimal_energy", allow_hyphen_values = true)]
    optimal_energy: i32,
    /// Number of temperature replicas.
    #[arg(long, default_value_t = 5)]
    replicas: usize,
    /// Temperature of the coldest replica.
    #[arg(long, default_value_t = 160)]
    tmin: u32,
    /// Upper end of the temperature range.
    #[arg(long, default_value_t = 220)]
    tmax: u32,
    /// Pull-move probability for interior residues.
    #[arg(long, default_value_t = 0.5)]
    rho: f64,
    /// Metropolis steps per replica per round.
    #[arg(long, default_value_t = 500)]
    iterations: usize,
    /// Cap on outer rounds before the search gives up.
    #[arg(long, default_value_t = 1_000)]
    max_rounds: usize,
    /// Master seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the JSON run summary to this path.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(reached_target) => {
            if !reached_target {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(if err.is_validation() { 2 } else { 1 });
        }
    }
}

fn execute(cli: &Cli) -> Result<bool, HpError> {
    let sequence = parse_sequence(cli)?;
    let config = build_config(cli);
    let max_rounds = config.max_rounds;

    let mut search = RemcSearch::new(config, sequence.clone())?;
    while !search.reached_target() && search.rounds_completed() < max_rounds {
        let report = search.round()?;
        for replica in &report.replicas {
            println!("replica {} energy {}", replica.replica, replica.energy);
        }
        println!(
            "energy best {} target energy {}",
            report.best_energy, cli.optimal_energy
        );
        for exchange in report.exchanges.iter().filter(|e| e.accepted) {
            println!(
                "exchange between {} and {} successful",
                exchange.lower, exchange.upper
            );
        }
    }

    let summary = search.summary();
    println!("FINAL ENERGY {}", summary.best_energy);
    print!("{}", render::render(&sequence, &summary.best.positions));

    if let Some(path) = &cli.summary {
        write_summary(path, &summary)?;
    }
    Ok(summary.reached_target)
}

fn parse_sequence(cli: &Cli) -> Result<Sequence, HpError> {
    match (&cli.aasequence, &cli.hpsequence) {
        (Some(letters), None) => Sequence::from_amino_acids(letters),
        (None, Some(letters)) => Sequence::from_hp(letters),
        // clap's argument group admits exactly one of the two flags.
        _ => unreachable!(),
    }
}

fn build_config(cli: &Cli) -> SearchConfig {
    let mut config = SearchConfig::new(cli.optimal_energy);
    config.replicas = cli.replicas;
    config.t_min = cli.tmin;
    config.t_max = cli.tmax;
    config.pull_probability = cli.rho;
    config.iterations = cli.iterations;
    config.max_rounds = cli.max_rounds;
    if let Some(seed) = cli.seed {
        config.master_seed = seed;
    }
    config
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), HpError> {
    let json = serde_json::to_string_pretty(summary).map_err(|err| {
        HpError::Search(
            ErrorInfo::new("summary-serialize", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    std::fs::write(path, json).map_err(|err| {
        HpError::Search(
            ErrorInfo::new("summary-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
