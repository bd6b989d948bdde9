//! Switchnet - switch-level conduction analyzer
//!
//! Loads a transistor network description and reports which outputs are
//! reachable from the supply rail.
//!
//! # Usage
//!
//! ```bash
//! switchnet nand.swn --set A=1 --set B=0
//! switchnet nand.swn --sweep
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn, LevelFilter};
use switchnet_core::{
    dsl,
    error::Result,
    eval::{evaluate, sweep, InputAssignment, SweepConfig, DEFAULT_MAX_SWEEP_SIGNALS},
    report, Network, SwitchError, DESCRIPTION_EXTENSION,
};

/// Switch-level conduction analyzer for MOS transistor networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the network description file (.swn)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Input signal value, e.g. `--set A=1` (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Node to start the traversal from instead of the supply rail
    #[arg(long, value_name = "NODE")]
    start: Option<String>,

    /// Print a truth table over every input combination
    #[arg(long, conflicts_with_all = ["set", "start"])]
    sweep: bool,

    /// Maximum number of signals a sweep may enumerate
    #[arg(long, default_value_t = DEFAULT_MAX_SWEEP_SIGNALS)]
    max_signals: usize,

    /// Evaluate sweep rows on a single thread
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.circuit_file.extension().and_then(|e| e.to_str()) != Some(DESCRIPTION_EXTENSION) {
        warn!(
            "{} does not have the .{} extension",
            args.circuit_file.display(),
            DESCRIPTION_EXTENSION
        );
    }

    // Parse and build the network
    let ast = dsl::parse_file(&args.circuit_file)?;
    let network = Network::from_ast(&ast)?;
    info!(
        "loaded {} nodes, {} edges from {}",
        network.len(),
        network.edge_count(),
        args.circuit_file.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.sweep {
        let signals: Vec<String> = if ast.inputs.is_empty() {
            network.signals().into_iter().map(str::to_string).collect()
        } else {
            ast.inputs.clone()
        };
        let config = SweepConfig::new()
            .with_max_signals(args.max_signals)
            .with_parallel(!args.sequential);
        let table = sweep(&network, &signals, &config)?;
        return report::write_truth_table(&mut out, &network, &table);
    }

    let mut inputs = InputAssignment::new();
    for pair in &args.set {
        inputs.set_pair(pair)?;
    }

    let start = match &args.start {
        Some(name) => network
            .find_node(name)
            .ok_or_else(|| SwitchError::unknown_node(name.as_str()))?,
        None => network.supply().ok_or(SwitchError::MissingSupply)?,
    };

    let result = evaluate(&network, &inputs, start)?;
    report::write_report(&mut out, &network, &inputs, &result)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
