//! netrecon CLI - network reconciliation across inventory sources
//!
//! Usage: netrecon <COMMAND>
//!
//! Commands:
//!   check     Report network inconsistencies for a server or cluster
//!   profiles  Print the effective type profiles

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use netrecon::config::Config;
use netrecon::ui::text::render_config_warning;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::check::CheckArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &working_dir)?;
    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning));
    }
    let config = config.with_env_overrides();

    match cli.command {
        Commands::Check {
            kind,
            id,
            all: _,
            store,
            return_all,
            types,
            concurrency,
            strict,
        } => commands::check::cmd_check(
            CheckArgs {
                kind,
                id,
                store,
                return_all,
                types,
                concurrency,
                strict,
            },
            &config,
            cli.json,
        ),
        Commands::Profiles => commands::profiles::cmd_profiles(&config, cli.json),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
