//! Command-line driver: load integer keys from a file into a B+ tree, print
//! the resulting structure and run point lookups.
//!
//! ```text
//! bptree data.txt                    # default lookups: 34 25 55 101
//! bptree data.txt -s 7 -s 42 -q      # custom lookups, no tree dump
//! RUST_LOG=bplus_index=debug bptree data.txt   # log every split
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bplus_index::{loader, render, BPlusTree, ORDER};

/// Keys looked up when no `--search` is given.
const DEFAULT_SEARCH_KEYS: [i32; 4] = [34, 25, 55, 101];

#[derive(Debug, Parser)]
#[command(name = "bptree", version, about = "Load integer keys into an order-5 B+ tree")]
struct Args {
    /// File with one integer key per line; blank lines are skipped.
    input: PathBuf,

    /// Key to look up after loading. May be repeated.
    #[arg(short, long = "search", value_name = "KEY", allow_negative_numbers = true)]
    search: Vec<i32>,

    /// Print the tree after every insertion.
    #[arg(long)]
    trace_inserts: bool,

    /// Skip the final tree dump.
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity: -v for info (duplicates), -vv for debug (splits).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let keys = loader::load_keys(&args.input)
        .with_context(|| format!("failed to load keys from {}", args.input.display()))?;

    let mut tree = BPlusTree::new(ORDER).context("failed to construct tree")?;
    for key in keys {
        tree.insert(key);
        if args.trace_inserts {
            print!("{}", render::render_summary(&tree));
        }
    }

    if !args.quiet {
        println!("Tree after insertion:");
        print!("{}", render::render_summary(&tree));
        println!("{}", tree.stats());
    }

    let lookups = if args.search.is_empty() {
        DEFAULT_SEARCH_KEYS.to_vec()
    } else {
        args.search
    };
    for key in lookups {
        println!("Search for {}: {}", key, tree.search(key));
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
