use std::path::PathBuf;

use anyhow::{Context, Result};
use netrecon::application::{CheckUseCase, Reconciler};
use netrecon::config::Config;
use netrecon::domain::ports::StoreError;
use netrecon::infrastructure::FsEntityRepository;
use netrecon::ui::json::emit_json;
use netrecon::ui::text::{render_bulk_report, render_entity_report};
use netrecon::{EntityKind, NetworkType, ReconError};

use super::exit_with;

/// Exit status for an unknown entity id
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub kind: EntityKind,
    pub id: Option<String>,
    pub store: Option<PathBuf>,
    pub return_all: bool,
    pub types: Option<Vec<NetworkType>>,
    pub concurrency: Option<usize>,
    pub strict: bool,
}

pub fn cmd_check(args: CheckArgs, config: &Config, json: bool) -> Result<()> {
    let mut options = config.reconcile_options();
    if args.return_all {
        options = options.with_return_all(true);
    }
    if let Some(types) = args.types {
        options = options.with_types(types);
    }
    if let Some(concurrency) = args.concurrency {
        options = options.with_concurrency(concurrency);
    }

    let profiles = config.profile_registry()?;
    let store = args.store.unwrap_or_else(|| config.store.path.clone());
    tracing::debug!(store = %store.display(), ?options, "running check");

    let use_case = CheckUseCase::new(
        FsEntityRepository::with_path(store),
        Reconciler::new(profiles).with_options(options),
    );

    let has_issues = match args.id {
        Some(id) => {
            let report = match use_case.check_one(args.kind, &id) {
                Ok(report) => report,
                Err(ReconError::Store(err @ StoreError::NotFound { .. })) => {
                    eprintln!("Error: {err}");
                    exit_with(EXIT_NOT_FOUND);
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("failed to check {} '{}'", args.kind, id))
                }
            };

            if json {
                emit_json(&report)?;
            } else {
                print!("{}", render_entity_report(&report));
            }
            report.has_findings()
        }
        None => {
            let bulk = use_case
                .check_all(args.kind)
                .with_context(|| format!("failed to check {}", args.kind.collection()))?;

            if json {
                emit_json(&bulk)?;
            } else {
                print!("{}", render_bulk_report(args.kind, &bulk));
            }
            !bulk.is_clean()
        }
    };

    if args.strict && has_issues {
        exit_with(1);
    }
    Ok(())
}
