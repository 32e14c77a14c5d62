//! Fills a complete tree with random integers and prints it, along with its size and the result of a lookup.
//!
//! ```text
//! cargo run --example populate -- --count 20 --seed 7 --probe 13
//! ```

use anyhow::Result;
use cbtree::CompleteTree;
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "populate", about = "Fill a complete binary tree with random integers and print it")]
struct Cli {
    /// Number of random values to insert below the root (which is always 0).
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Seed for the random source; a fresh one is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Value to look up once the tree is populated.
    #[arg(long, default_value_t = 100)]
    probe: u32,
    /// Put a space after every comma of the printed tree.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    info!(count = cli.count, seed, probe = cli.probe, "populating tree");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = CompleteTree::new(0_u32);
    for _ in 0..cli.count {
        let value = rng.random_range(1..50);
        tree.insert(value);
        debug!(value, size = tree.size(), "inserted");
    }

    println!("My tree:");
    if cli.pretty {
        println!("{:#}", tree);
    } else {
        println!("{}", tree);
    }
    println!("{}", tree.size());
    println!("{}", tree.contains(&cli.probe));

    info!(size = tree.size(), height = tree.height(), "done");
    Ok(())
}
