//! `justnotes` command line
//!
//! ```bash
//! # Load and validate an index
//! justnotes check data/curriculum.json --strict
//!
//! # List every path a static build renders
//! justnotes routes data/curriculum.json --family subject
//!
//! # Print the display facts of one page
//! justnotes show data/curriculum.json /2022/cse/3/bcs301
//!
//! # Write facts for every page plus a routes.json manifest
//! justnotes build data/curriculum.json --out dist/
//! ```

#![allow(missing_docs)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use justnotes_core::{Catalog, CatalogConfig, GeneratedPage};
use justnotes_index::{IndexLoader, ParamSet, RouteFamily};
use justnotes_resolve::EnumerationPolicy;
use serde::Serialize;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "justnotes")]
#[command(version)]
#[command(about = "Inspect, validate and pre-generate a JustNotes content index")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog configuration (TOML)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load an index and report structural issues
    Check {
        /// Index file (.json, .yaml, .yml)
        index: PathBuf,

        /// Fail when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Print enumerated route paths
    Routes {
        /// Index file (.json, .yaml, .yml)
        index: PathBuf,

        /// Only this family: branch, semester, resource-type, scheme,
        /// scheme-branch, scheme-semester, subject
        #[arg(long, short)]
        family: Option<RouteFamily>,

        /// Only semesters the index defines
        #[arg(long)]
        defined_only: bool,
    },

    /// Print the display facts of one page as JSON
    Show {
        /// Index file (.json, .yaml, .yml)
        index: PathBuf,

        /// Page path, e.g. /cse/3/pyqs
        path: String,
    },

    /// Write facts for every resolvable page and a routes.json manifest
    Build {
        /// Index file (.json, .yaml, .yml)
        index: PathBuf,

        /// Output directory
        #[arg(long, short)]
        out: PathBuf,
    },
}

/// Whether a command succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::FAILURE,
        }
    }
}

/// One entry of `routes.json`
#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    family: RouteFamily,
    params: &'a ParamSet,
    path: &'a str,
    file: String,
}

/// Run a parsed command line, writing results to `out`
///
/// # Errors
/// Returns error if the config or index cannot be loaded, or output cannot
/// be written
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Status> {
    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    match &cli.command {
        Command::Check { index, strict } => check(index, *strict || config.strict, out),
        Command::Routes {
            index,
            family,
            defined_only,
        } => {
            let mut config = config;
            if *defined_only {
                config.enumeration = EnumerationPolicy::DefinedOnly;
            }
            routes(&load(index, config)?, *family, out)
        }
        Command::Show { index, path } => show(&load(index, config)?, path, out),
        Command::Build { index, out: dir } => build(&load(index, config)?, dir, out),
    }
}

fn load(index: &Path, config: CatalogConfig) -> Result<Catalog> {
    Catalog::load(index, config).with_context(|| format!("loading index {}", index.display()))
}

fn check(index: &Path, strict: bool, out: &mut impl Write) -> Result<Status> {
    // always lenient here so every issue gets listed
    let content = IndexLoader::new()
        .load_path(index)
        .with_context(|| format!("loading index {}", index.display()))?;

    let stats = content.stats();
    writeln!(
        out,
        "{}: {} flat branches, {} schemes, {} scheme branches, {} subjects, {} resources",
        index.display(),
        stats.flat_branches,
        stats.schemes,
        stats.scheme_branches,
        stats.subjects,
        stats.resources
    )?;

    let issues = content.validate();
    for issue in &issues {
        writeln!(out, "  {issue}")?;
    }

    if issues.is_empty() {
        writeln!(out, "ok")?;
        Ok(Status::Success)
    } else {
        writeln!(out, "{} issue(s)", issues.len())?;
        Ok(if strict { Status::Failure } else { Status::Success })
    }
}

fn routes(catalog: &Catalog, family: Option<RouteFamily>, out: &mut impl Write) -> Result<Status> {
    let sets: Vec<(RouteFamily, ParamSet)> = match family {
        Some(family) => catalog
            .routes_for(family)
            .into_iter()
            .map(|params| (family, params))
            .collect(),
        None => catalog.routes(),
    };

    for (_, params) in &sets {
        writeln!(out, "{}", params.to_path())?;
    }
    tracing::debug!("Printed {} routes", sets.len());
    Ok(Status::Success)
}

fn show(catalog: &Catalog, path: &str, out: &mut impl Write) -> Result<Status> {
    match catalog.page(path) {
        Ok(facts) => {
            serde_json::to_writer_pretty(&mut *out, &facts)?;
            writeln!(out)?;
            Ok(Status::Success)
        }
        Err(err) if err.is_not_found() => {
            writeln!(out, "not found")?;
            Ok(Status::Failure)
        }
        Err(err) => Err(err).with_context(|| format!("showing {path}")),
    }
}

fn build(catalog: &Catalog, dir: &Path, out: &mut impl Write) -> Result<Status> {
    let pages = catalog.generate_all();

    write_json(&dir.join("index.json"), &catalog.home())?;
    let mut manifest = Vec::with_capacity(pages.len());
    for page in &pages {
        let file = page_file(page)?;
        write_json(&dir.join(&file), &page.facts)?;
        manifest.push(ManifestEntry {
            family: page.family,
            params: &page.params,
            path: &page.path,
            file,
        });
    }
    write_json(&dir.join("routes.json"), &manifest)?;

    tracing::info!("Wrote {} pages to {}", pages.len(), dir.display());
    writeln!(out, "{} pages written to {}", pages.len(), dir.display())?;
    Ok(Status::Success)
}

/// `/cse/3/pyqs` → `cse/3/pyqs.json`, relative to the output directory
fn page_file(page: &GeneratedPage) -> Result<String> {
    let file = format!("{}.json", page.path.trim_start_matches('/'));
    let contained = Path::new(&file)
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !contained {
        bail!("page {} maps outside the output directory", page.path);
    }
    Ok(file)
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
