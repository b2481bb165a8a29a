//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use roster_ingest::RecordLoader;
use roster_model::{FilterField, FilterSet};
use roster_normalization::decorate_all;
use roster_query::{Facets, SearchOutcome};
use roster_server::ServerConfig;

use crate::cli::{SearchArgs, ServeArgs};

pub fn run_serve(source: &Path, args: &ServeArgs) -> Result<()> {
    let config = ServerConfig {
        source: source.to_path_buf(),
        host: args.host,
        port: args.port,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime
        .block_on(roster_server::serve(config))
        .with_context(|| format!("serve on {}:{}", args.host, args.port))
}

fn criteria_from_args(args: &SearchArgs) -> FilterSet {
    FilterSet::from_optional([
        (FilterField::Name, args.name.as_deref()),
        (FilterField::City, args.city.as_deref()),
        (FilterField::Country, args.country.as_deref()),
        (FilterField::Class, args.class.as_deref()),
        (FilterField::Title, args.title.as_deref()),
        (FilterField::Industry, args.industry.as_deref()),
    ])
}

/// Runs a search and returns flag-decorated matches.
pub fn run_search(source: &Path, args: &SearchArgs) -> Result<SearchOutcome> {
    let records = RecordLoader::new(source)
        .load()
        .with_context(|| format!("load roster from {}", source.display()))?;
    let mut outcome = roster_query::search(&records, &criteria_from_args(args));
    outcome.members = decorate_all(&outcome.members);
    Ok(outcome)
}

pub fn run_facets(source: &Path) -> Result<Facets> {
    let records = RecordLoader::new(source)
        .load()
        .with_context(|| format!("load roster from {}", source.display()))?;
    Ok(Facets::collect(&records))
}
