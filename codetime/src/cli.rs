// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Rates, load_profile};
use crate::core::filter::ScanFilter;
use crate::core::projector::{project_all, totals};
use crate::core::scanner::scan_projects;
use crate::report::csv::export_csv;
use crate::report::narrative::{print_banner, print_time_breakdown};
use crate::report::table::print_summary_table;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base directory containing the project folders
    #[arg(short = 'd', long, default_value = ".")]
    pub directory: PathBuf,

    /// Project folder names to scan (comma-separated); defaults to every
    /// subdirectory of the base directory
    #[arg(short = 'p', long)]
    pub projects: Option<String>,

    /// TOML run profile; overrides --directory and --projects
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the full metrics table to this CSV file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print the per-project time breakdown with fleet totals
    #[arg(short = 'b', long)]
    pub breakdown: bool,

    /// Print the methodology banner before the results
    #[arg(long)]
    pub banner: bool,

    /// Directories to exclude from every scan (comma-separated)
    #[arg(short = 'e', long, default_value = "")]
    pub exclude: String,

    /// Glob patterns for files to skip (repeatable)
    #[arg(short = 's', long)]
    pub skip: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,
}

/// Runs the whole pipeline: scan, project, report.
///
/// # Errors
///
/// This function may return an error if:
/// * The run profile cannot be loaded or parsed
/// * The base directory cannot be listed when no project list is given
/// * A skip pattern has invalid glob syntax
/// * The CSV output file cannot be written
pub fn run(args: &Args) -> Result<()> {
    let (base, projects, rates) = if let Some(path) = &args.config {
        let profile = load_profile(path)?;
        (profile.base_path, profile.projects, profile.rates)
    } else {
        let projects = match &args.projects {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            None => subdirectories(&args.directory)?,
        };
        (args.directory.clone(), projects, Rates::default())
    };

    let mut filter = ScanFilter::new();
    filter.exclude_dirs(args.exclude.split(',').map(str::trim));
    for pattern in &args.skip {
        filter.add_skip_pattern(pattern)?;
    }
    filter.skip_hidden(args.skip_hidden);

    if args.banner {
        print_banner(&rates);
    }

    let records = scan_projects(&base, &projects, &filter)
        .with_context(|| format!("Failed to scan projects under: {}", base.display()))?;
    let metrics = project_all(records, &rates);

    print_summary_table(&metrics);

    if let Some(output) = &args.output {
        export_csv(output, &metrics)?;
        println!("\nResults saved to: {}", output.display());
    }

    if args.breakdown {
        let sums = totals(&metrics);
        print_time_breakdown(&metrics, &sums, &rates);
    }

    Ok(())
}

/// Every immediate subdirectory of `base`, sorted by name.
fn subdirectories(base: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(base)
        .with_context(|| format!("Failed to read directory: {}", base.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}
