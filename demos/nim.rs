//! Picks a move in single-pile Nim with each search form.
//!
//! Run with `RUST_LOG=debug` to see search statistics.

use adversarial_minimax::nim::{Nim, Pile, Side};
use adversarial_minimax::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Best first move in single-pile Nim against several opponents")]
struct Args {
    /// Tokens in the pile at the start.
    #[arg(long, default_value_t = 7)]
    tokens: u32,

    /// Most tokens a player may take per turn.
    #[arg(long, default_value_t = 3)]
    max_take: u32,

    /// Seed for the random opponent. Uses the thread RNG when absent.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let nim = Nim::new(args.max_take);
    let pile = Pile::new(args.tokens, Side::A);
    println!("Initial state: {}", pile);
    println!(
        "Available actions: {}",
        nim.actions(&pile).iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
    );

    let best = best_action(&nim, &pile)?;
    println!("Alpha-beta: {}", best);

    let best = decide(&nim, &pile, &Side::A, None)?;
    println!("Best move vs optimal opponent: {}", best);

    let best = match args.seed {
        Some(seed) => {
            let random = Random::with_rng(StdRng::seed_from_u64(seed));
            decide(&nim, &pile, &Side::A, Some(&random))?
        }
        None => decide(&nim, &pile, &Side::A, Some(&Random::new()))?,
    };
    println!("Best move vs random opponent: {}", best);

    let greedy = Heuristic::new(|p: &Pile| p.tokens as Utility);
    let best = decide(&nim, &pile, &Side::A, Some(&greedy))?;
    println!("Best move vs greedy opponent: {}", best);

    let best = decide(&nim, &pile, &Side::A, Some(&Optimal))?;
    println!("Best move vs Optimal adversary: {}", best);
    Ok(())
}
