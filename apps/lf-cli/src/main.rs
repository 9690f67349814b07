use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use lf_core::{CoreError, Real};
use lf_network::{NetworkDoc, load_json, load_yaml};
use lf_solver::fixtures::{REFERENCE_INITIAL_DISCHARGE, reference_network};
use lf_solver::{BalanceConfig, BalanceSolution, SolverResult, balance};

#[derive(Parser)]
#[command(name = "lf-cli")]
#[command(about = "Loopflow CLI - Hardy Cross pipe-network flow balancing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file's syntax and structure
    Validate {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Balance flow in a network loaded from a file
    Balance {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        /// Number of correction sweeps
        #[arg(long, default_value_t = 100)]
        iterations: usize,
        /// Stop early once the largest loop correction drops below this
        #[arg(long)]
        tolerance: Option<Real>,
        /// Initial discharge per pipe; overrides the file's initial_discharge
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        initial: Option<Vec<Real>>,
    },
    /// Balance the built-in 23-pipe reference grid
    Reference {
        /// Number of correction sweeps
        #[arg(long, default_value_t = 100)]
        iterations: usize,
    },
}

fn main() -> SolverResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Balance {
            network_path,
            iterations,
            tolerance,
            initial,
        } => cmd_balance(&network_path, iterations, tolerance, initial),
        Commands::Reference { iterations } => cmd_reference(iterations),
    }
}

fn load_doc(path: &Path) -> SolverResult<NetworkDoc> {
    let doc = if path.extension().is_some_and(|ext| ext == "json") {
        load_json(path)?
    } else {
        load_yaml(path)?
    };
    Ok(doc)
}

fn cmd_validate(path: &Path) -> SolverResult<()> {
    let doc = load_doc(path)?;
    let network = doc.build()?;
    println!(
        "{} is valid: {} pipes, {} loops",
        path.display(),
        network.pipe_count(),
        network.loop_count()
    );
    Ok(())
}

fn cmd_balance(
    path: &Path,
    iterations: usize,
    tolerance: Option<Real>,
    initial: Option<Vec<Real>>,
) -> SolverResult<()> {
    let doc = load_doc(path)?;
    let network = doc.build()?;

    let initial = initial.or(doc.initial_discharge).ok_or(CoreError::InvalidArg {
        what: "initial discharge (pass --initial or add initial_discharge to the file)",
    })?;

    let config = BalanceConfig {
        iterations,
        tolerance,
    };
    let solution = balance(&network, &initial, &config)?;
    print_solution(&network, &solution);
    Ok(())
}

fn cmd_reference(iterations: usize) -> SolverResult<()> {
    let network = reference_network();
    let config = BalanceConfig {
        iterations,
        tolerance: None,
    };
    let solution = balance(&network, &REFERENCE_INITIAL_DISCHARGE, &config)?;
    print_solution(&network, &solution);
    Ok(())
}

fn print_solution(network: &lf_network::Network, solution: &BalanceSolution) {
    info!(
        iterations = solution.iterations,
        max_correction = solution.max_correction,
        "balancing finished"
    );
    println!("{:<6} {:<12} {:>18}", "index", "pipe", "discharge");
    for (pipe, &q) in network.pipes().iter().zip(&solution.discharge) {
        println!("{:<6} {:<12} {:>18.12}", pipe.id, pipe.name, q);
    }
}
