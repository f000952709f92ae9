// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown matchups CLI.
//!
//! Reads a matchups file with two five cards Poker hands per line,
//! compares the hands, and tallies the wins for each player.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{
    cmp::Ordering,
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use showdown_eval::{HandValue, compare};

mod records;

#[derive(Debug, Parser)]
struct Cli {
    /// The matchups file, one line with both players hands.
    #[clap(default_value = "poker_hands.txt")]
    input: PathBuf,
}

/// Outcome counters for a matchups run.
#[derive(Debug, Default)]
struct Tally {
    p1_wins: u64,
    p2_wins: u64,
    ties: u64,
    invalid: u64,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let file =
        File::open(&cli.input).with_context(|| format!("cannot open {}", cli.input.display()))?;

    let mut tally = Tally::default();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("read error on {}", cli.input.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        match records::parse_matchup(&line) {
            Ok((h1, h2)) => match compare(&h1, &h2) {
                Ordering::Greater => {
                    tally.p1_wins += 1;
                    let rank = HandValue::eval(&h1).rank();
                    println!("{line}: Player 1 wins with {rank} (total {})", tally.p1_wins);
                }
                Ordering::Less => {
                    tally.p2_wins += 1;
                    let rank = HandValue::eval(&h2).rank();
                    println!("{line}: Player 2 wins with {rank} (total {})", tally.p2_wins);
                }
                Ordering::Equal => {
                    tally.ties += 1;
                    println!("{line}: Tie");
                }
            },
            Err(e) => {
                // Keep bad lines out of the ties count.
                tally.invalid += 1;
                error!("Line {}: {e}", lineno + 1);
            }
        }
    }

    println!();
    println!("Final Results:");
    println!("Player 1 won {} times", tally.p1_wins);
    println!("Player 2 won {} times", tally.p2_wins);

    if tally.ties > 0 {
        println!("Ties {}", tally.ties);
    }

    if tally.invalid > 0 {
        println!("Invalid lines {}", tally.invalid);
    }

    Ok(())
}
