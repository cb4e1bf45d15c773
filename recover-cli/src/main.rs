//! Recovers the constant term of a polynomial from a JSON file of points,
//! some of which may be wrong.
//!
//! # Usage
//! ```bash
//! recover points.json
//!
//! # Search statistics on stderr, score every subset
//! recover --verbose --exhaustive points.json
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use recover::combinations::Combinations;
use recover::report::JsonReport;
use recover::{SearchConfig, input, search_with};

#[derive(Parser)]
#[command(name = "recover")]
#[command(about = "Reconstructs a secret from points, some of which may be corrupted")]
#[command(version)]
struct Cli {
    /// JSON file with the `keys` record and the points
    input: PathBuf,

    /// Print search statistics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Keep going after a subset agrees with every point
    #[arg(long)]
    exhaustive: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let points = input::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read points from {}", cli.input.display()))?;

    if cli.verbose {
        if let Some(n) = points.declared_n().filter(|&n| n != points.n()) {
            eprintln!("warning: input declares n = {n} but has {} points", points.n());
        }
        eprintln!(
            "n = {}, k = {}: up to {} subsets",
            points.n(),
            points.k(),
            Combinations::count_total(points.n(), points.k())
        );
    }

    let cfg = SearchConfig { stop_on_unanimous: !cli.exhaustive };
    let result = search_with(&points, &cfg)?;

    if cli.verbose {
        eprintln!(
            "scored {} subsets, best {:?} agrees with {} of {} points",
            result.subsets_scored,
            result.subset,
            result.agreement,
            points.n()
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::from(&result))?);
    } else {
        println!("{}", result.report());
    }

    Ok(())
}
