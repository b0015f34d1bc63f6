// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use java_guidelines::checks::{Checklist, ChecklistConfig};
use java_guidelines::package::ReviewPackage;
use java_guidelines::report::{summarize_report, validate_report, Report};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let package = load_package(&args.snapshot)?;
    let checklist = Checklist::new(&ChecklistConfig {
        applicability: args.java.into(),
        excluded: args.excluded,
    });
    let report = Report::new(&package, &checklist)
        .with_context(|| format!("Failed to check package: {}", args.snapshot.display()))?;
    write_report_to_file(&report, &args.report)?;
    summarize_report(&report);
    validate_report(&report)
}

/// Log to stderr so stdout only carries the summary.
fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log level: {filter}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

/// Load the review snapshot from a filepath.
///
/// # Errors
/// Returns an error if the snapshot cannot be read or parsed.
fn load_package(path: &Path) -> Result<ReviewPackage> {
    info!(snapshot = %path.display(), "Loading review snapshot");
    ReviewPackage::from_file(path)
        .with_context(|| format!("Failed to load review snapshot: {}", path.display()))
}

/// Write the report to a file.
///
/// # Errors
/// Returns an error if the report cannot be serialized to JSON or if the file cannot be created.
fn write_report_to_file(report: &Report, dest: &Path) -> Result<()> {
    info!(file = %dest.display(), "Writing report to file");
    let file = File::create(dest)
        .with_context(|| format!("Failed to create JSON output file: {}", dest.display()))?;
    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("Failed to serialize report to JSON: {}", dest.display()))?;
    Ok(())
}
