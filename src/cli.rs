use std::path::PathBuf;

use clap::{Parser, Subcommand};
use netrecon::{EntityKind, NetworkType};

/// netrecon - field-level network reconciliation across inventory sources
#[derive(Parser, Debug)]
#[command(name = "netrecon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./netrecon.toml, then the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report network inconsistencies for a server or cluster
    Check {
        /// Entity kind
        #[arg(value_enum)]
        kind: EntityKind,

        /// Entity id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<String>,

        /// Check every entity of this kind
        #[arg(long)]
        all: bool,

        /// Root directory of the record store
        #[arg(long, value_name = "DIR")]
        store: Option<PathBuf>,

        /// Include networks without findings
        #[arg(long, conflicts_with = "all")]
        return_all: bool,

        /// Only compare these network types
        #[arg(long, value_enum, value_delimiter = ',')]
        types: Option<Vec<NetworkType>>,

        /// Worker threads for --all
        #[arg(long, value_name = "N", value_parser = parse_concurrency)]
        concurrency: Option<usize>,

        /// Exit with status 1 when anything is reported (CI mode)
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective type profiles
    Profiles,
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{value}'")),
    }
}
