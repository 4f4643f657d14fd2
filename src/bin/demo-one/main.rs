//! Demo of the sequence operations over a list of integers.
//!
//! Usage:
//!   demo-one [VALUES...] [--verbose]

#[path = "../common/logging.rs"]
mod logging;
mod numbers;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use numbers::{find_max, find_min, is_negative, is_odd, square};
use seqops::predicate::equal_to;
use seqops::{every, filter, find, map, reduce, some};

const DEFAULT_INPUT: [i64; 9] = [99, 42, -34, 0, -23, 45, 9, 5, 7];

#[derive(Parser, Debug)]
#[command(
    name = "demo-one",
    about = "Run map, filter, find, reduce, some and every over a list of integers",
    version
)]
struct Args {
    /// Input values (defaults to a built-in sample)
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Value to look for with find
    #[arg(short, long, default_value = "9", allow_negative_numbers = true)]
    target: i64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(args.verbose)?;

    let input = if args.values.is_empty() {
        debug!("no values given, using the built-in sample");
        DEFAULT_INPUT.to_vec()
    } else {
        args.values
    };
    info!(count = input.len(), target = args.target, "running sequence operations");

    display(&input, "Input");

    let negatives = filter(&input, is_negative);
    display(&negatives, "Negatives");

    let squares = map(&input, square);
    display(&squares, "Squares");

    let (found, ok) = find(&input, equal_to(args.target));
    debug!(found = ok, "find finished");
    display(&[found], "Find");

    let max = reduce(&input, find_max, 0);
    display(&[max], "Max");

    let min = reduce(&input, find_min, i64::MAX);
    display(&[min], "Min");

    let has_odd = some(&input, is_odd);
    println!("Does it include at least one odd number? {}", has_odd);

    let all_negative = every(&input, is_negative);
    println!("Does it consist entirely of negative numbers? {}", all_negative);

    Ok(())
}

fn display(values: &[i64], title: &str) {
    println!("--- {}", title);
    println!("{:?}", values);
    println!();
}
