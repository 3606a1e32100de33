// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `fock`: inspect and combine Fock-state indices from the command line.
//!
//! ```bash
//! fock decode 9 -m 3          # |2,0,0>
//! fock encode 0 2 1           # 12
//! fock add 3 7 -m 4
//! fock list -m 3 --photons 2
//! RUST_LOG=fock_index=debug fock demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fock_index::codec::FockStates;
use fock_index::ranking::{photon_count, states_with_photons};
use fock_index::{add, decode_into, encode, rank, unrank, FockState, Index};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "fock")]
#[command(about = "Rank, unrank and add photonic Fock states")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the state at an index
    Decode {
        index: Index,
        /// Number of modes
        #[arg(short, long)]
        modes: usize,
    },
    /// Print the index of a state given its photon counts
    Encode {
        #[arg(required = true)]
        counts: Vec<usize>,
    },
    /// Print the separator positions of the state at an index
    Unrank {
        index: Index,
        #[arg(short, long)]
        modes: usize,
    },
    /// Print the index of a state given its separator positions
    Rank {
        #[arg(required = true)]
        positions: Vec<usize>,
    },
    /// Add two states mode-wise
    Add {
        first: Index,
        second: Index,
        #[arg(short, long)]
        modes: usize,
    },
    /// List states in index order
    List {
        #[arg(short, long)]
        modes: usize,
        /// Only states holding exactly this many photons
        #[arg(long)]
        photons: Option<usize>,
        /// Maximum number of states to print
        #[arg(short, long, default_value = "20")]
        count: Index,
    },
    /// Decode and add two sample states of four modes
    Demo,
}

fn state(index: Index, modes: usize) -> Result<FockState> {
    decode_into(index, modes)
        .with_context(|| format!("decoding index {} over {} modes", index, modes))
}

fn run_add(first: Index, second: Index, modes: usize) -> Result<()> {
    let a = state(first, modes)?;
    let b = state(second, modes)?;
    let sum = add(first, second, modes)
        .with_context(|| format!("adding {} and {} over {} modes", first, second, modes))?;
    debug!(first, second, sum, modes, "added");
    println!("{} = {}", first, a);
    println!("{} = {}", second, b);
    println!("{} = {}", sum, state(sum, modes)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fock=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Decode { index, modes } => {
            println!("{}", state(index, modes)?);
        }
        Command::Encode { counts } => {
            let index = encode(&counts).context("encoding occupation vector")?;
            println!("{}", index);
        }
        Command::Unrank { index, modes } => {
            let positions = unrank(index, modes).context("unranking")?;
            println!("{:?}", positions);
        }
        Command::Rank { positions } => {
            let index = rank(&positions, positions.len())
                .context("ranking separator positions")?;
            println!("{}", index);
        }
        Command::Add { first, second, modes } => run_add(first, second, modes)?,
        Command::List {
            modes,
            photons,
            count,
        } => {
            let states = match photons {
                Some(n) => {
                    let total = states_with_photons(n, modes)?;
                    info!(photons = n, modes, total, "listing photon shell");
                    FockStates::with_photons(n, modes)?
                }
                None => FockStates::new(modes)?,
            };
            for (index, occupation) in states.take_states(count) {
                let n = photon_count(index, modes)?;
                println!("{:>6}  {}  ({} photons)", index, FockState::from(occupation), n);
            }
        }
        Command::Demo => {
            info!("adding states 3 and 7 over 4 modes");
            run_add(3, 7, 4)?;
        }
    }
    Ok(())
}
