//! Headless autoplay CLI for difficulty tuning.
//!
//! Typical invocations:
//!   cargo run --bin simulate                      # 500 runs, OS seed
//!   cargo run --bin simulate -- --runs 50         # quick batch
//!   cargo run --bin simulate -- --seed 42 -v      # reproducible, per-run lines

use flap::sim::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════╗");
        println!("║                     FLAP AUTOPLAY                     ║");
        println!("╚═══════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:       {}", config.num_runs);
        println!("  Max Steps:  {}", config.max_steps_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
        println!("Running...");
        println!();
    }

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        std::fs::write("sim_report.json", json).expect("Failed to write JSON report");
        println!("JSON report saved to: sim_report.json");
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--max-steps" => {
                if i + 1 < args.len() {
                    config.max_steps_per_run = args[i + 1].parse().unwrap_or(36_000);
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Flap Autoplay Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of runs (default: 500)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --max-steps <T>   Max physics steps per run (default: 36,000)");
    println!("    -q, --quiet           Print the report only");
    println!("    -v, --verbose         Print one line per run");
    println!("    --json                Save a JSON report to sim_report.json");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate -- --runs 50");
    println!("    cargo run --bin simulate -- --seed 42 --verbose");
}
