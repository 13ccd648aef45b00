//! showdown CLI - Command-line interface for the showdown engine
//!
//! This binary provides a harness for evaluating hands from card notation,
//! comparing two hands, and measuring evaluator throughput.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use showdown_engine::evaluator::benchmark_throughput;
use showdown_engine::{best_hand, Hand};

#[derive(Parser)]
#[command(author, version, about = "Seven-card hold'em hand evaluator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate seven cards, e.g. `showdown eval Ad Jd 2h 7d 3d Ks 8c`
    Eval {
        #[arg(required = true, num_args = 7)]
        cards: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate two seven-card hands and report the winner
    Compare {
        /// First hand, quoted: "Ad Jd 2h 7d 3d Ks 8c"
        #[arg(long)]
        first: String,

        /// Second hand, quoted
        #[arg(long)]
        second: String,
    },
    /// Run the evaluator throughput benchmark
    Bench {
        /// Number of hands to evaluate
        #[arg(long, default_value_t = 1_000_000)]
        samples: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_hand(s: &str) -> Result<Hand> {
    s.parse().with_context(|| format!("could not read hand {s:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Eval { cards, json } => {
            let hand = parse_hand(&cards.join(" "))?;
            let best = best_hand(&hand).with_context(|| format!("could not evaluate {hand}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&best)?);
            } else {
                println!("{best}");
            }
        }
        Command::Compare { first, second } => {
            let a = best_hand(&parse_hand(&first)?).context("could not evaluate first hand")?;
            let b = best_hand(&parse_hand(&second)?).context("could not evaluate second hand")?;
            println!("first:  {a}");
            println!("second: {b}");
            match a.made.cmp(&b.made) {
                Ordering::Greater => println!("first hand wins"),
                Ordering::Less => println!("second hand wins"),
                Ordering::Equal => println!("tie"),
            }
        }
        Command::Bench { samples } => {
            info!("running hand evaluator benchmark");
            println!("Sample size: {} hands", samples);
            let (evals_per_sec, duration_ms) = benchmark_throughput(samples);

            println!("Results:");
            println!("  Duration: {} ms", duration_ms);
            println!("  Throughput: {:.2} evals/sec", evals_per_sec);
            println!("  Throughput: {:.2}M evals/sec", evals_per_sec / 1_000_000.0);
        }
    }

    Ok(())
}
