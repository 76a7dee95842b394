//! geogrant — Command-line interface for geogrant-core
//!
//! Loads the reference dataset (through its binary cache unless
//! `--no-cache`), loads the distributor registry from `--registry`, runs one
//! command and saves the registry again after a successful grant.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geogrant_core::evaluator::check;
use geogrant_core::location;
use geogrant_core::{Direction, Distributor, ErrorKind, GeoStore, GrantError, Registry};
use std::path::PathBuf;

fn direction(exclude: bool) -> Direction {
    if exclude {
        Direction::Exclude
    } else {
        Direction::Include
    }
}

fn load_store(args: &CliArgs) -> anyhow::Result<GeoStore> {
    let path = args.data.as_ref().map(PathBuf::from).unwrap_or_else(|| {
        GeoStore::default_data_dir().join(GeoStore::default_dataset_filename())
    });
    let store = if args.no_cache {
        GeoStore::load_from_path(&path)
    } else {
        GeoStore::load_cached(&path)
    };
    store.with_context(|| format!("loading reference dataset {}", path.display()))
}

/// Adds a spelling hint when the country exists under different casing.
fn explain(err: GrantError, store: &GeoStore) -> anyhow::Error {
    if err.kind() == ErrorKind::InvalidLocation {
        let hint = err
            .location()
            .and_then(|loc| location::parse(loc).ok())
            .and_then(|p| store.canonical_country(p.country()));
        if let Some(name) = hint {
            return anyhow::Error::new(err).context(format!("did you mean country \"{name}\"?"));
        }
    }
    err.into()
}

/// Renders a distributor's parent and grants for `show`.
fn describe_distributor(registry: &Registry, name: &str) -> Result<String, GrantError> {
    let set = registry
        .get(name)
        .ok_or_else(|| GrantError::UnknownDistributor(name.to_string()))?;
    let mut out = match registry.parent_of(name) {
        Some(parent) => format!("{name} (granted by {parent})\n"),
        None => format!("{name} (root)\n"),
    };
    for dir in [Direction::Include, Direction::Exclude] {
        out.push_str(&format!("  {dir}:\n"));
        for (loc, granularity) in set.grants(dir) {
            out.push_str(&format!("    - {loc} [{granularity}]\n"));
        }
    }
    Ok(out)
}

fn load_registry(path: &str) -> anyhow::Result<Registry> {
    Registry::load_json(path).with_context(|| format!("loading registry {path}"))
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose);

    match &args.command {
        Commands::Parse { location } => {
            let parsed = location::parse(location)?;
            println!("Granularity: {}", parsed.granularity());
            for (i, part) in parsed.components().iter().enumerate() {
                println!("  {}. {part}", i + 1);
            }
        }

        Commands::Normalize { text } => {
            println!("{}", geogrant_core::normalize(text));
        }

        Commands::Stats => {
            let store = load_store(&args)?;
            let registry = load_registry(&args.registry)?;
            let stats = store.stats();
            println!("Reference dataset:");
            println!("  Countries: {}", stats.countries);
            println!("  States/Provinces: {}", stats.states);
            println!("  Cities: {}", stats.cities);
            println!("Registry:");
            println!("  Distributors: {}", registry.len());
        }

        Commands::Check {
            distributor,
            location,
            exclude,
        } => {
            let store = load_store(&args)?;
            let registry = load_registry(&args.registry)?;
            let dir = direction(*exclude);
            let permissions = registry
                .get(distributor)
                .ok_or_else(|| GrantError::UnknownDistributor(distributor.clone()))?;
            let held = check(dir, location, permissions, &store).map_err(|e| explain(e, &store))?;
            if held {
                println!("YES: {distributor} has {location} in {dir}");
            } else {
                println!("NO: {distributor} does not have {location} in {dir}");
            }
        }

        Commands::Grant {
            distributor,
            location,
            exclude,
            from,
        } => {
            let store = load_store(&args)?;
            let mut registry = load_registry(&args.registry)?;
            let request = Distributor::new(distributor.as_str(), location.as_str(), direction(*exclude));
            let granularity = registry
                .grant(&request, &store, from.as_deref())
                .map_err(|e| explain(e, &store))?;
            registry
                .save_json(&args.registry)
                .with_context(|| format!("saving registry {}", args.registry))?;
            tracing::info!(registry = %args.registry, "registry saved");
            println!("Granted {dir} {location} ({granularity}) to {distributor}", dir = request.direction);
        }

        Commands::Show { distributor } => {
            let registry = load_registry(&args.registry)?;
            print!("{}", describe_distributor(&registry, distributor)?);
        }
    }

    Ok(())
}
