//! Analytics CLI
//!
//! Compare minimax and alpha-beta search costs across depths.

use analytics::{Analyzer, ComparisonReport};
use anyhow::{Context, Result};
use nim_core::INITIAL_STONES;
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    println!("Nim search analytics");
    println!();
    println!("Usage:");
    println!("  analytics compare [PILE] [--seed N] [--save FILE]");
    println!("  analytics report FILE");
    println!();
    println!("Commands:");
    println!("  compare   - run both algorithms at every depth and print the table");
    println!("  report    - print the table from a saved JSON report");
    println!();
    println!("Examples:");
    println!("  analytics compare 9 --seed 42 --save report.json");
    println!("  analytics report report.json");
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn run_compare(args: &[String]) -> Result<()> {
    let mut pile = INITIAL_STONES;
    let mut seed: Option<u64> = None;
    let mut save_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--save" | "-o" => {
                if i + 1 < args.len() {
                    save_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            other => {
                pile = other
                    .parse()
                    .with_context(|| format!("invalid pile size: {}", other))?;
            }
        }
        i += 1;
    }

    let mut analyzer = match seed {
        Some(seed) => Analyzer::with_seed(seed),
        None => Analyzer::new(),
    };

    let report = ComparisonReport::new(pile, analyzer.compare(pile));
    report.print_report();

    if let Some(path) = save_path {
        report
            .save(&path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn run_report(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        eprintln!("Error: report requires a file path");
        print_usage();
        return Ok(());
    };

    let report = ComparisonReport::load(Path::new(path))
        .with_context(|| format!("failed to load {}", path))?;
    report.print_report();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "compare" => run_compare(&args[2..]),
        "report" => run_report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
