// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Formats and prints report summaries to the console.

use comfy_table::{Cell, Color, Table};

use super::Report;
use crate::checks::Verdict;

/// Summarize the report to the console.
///
/// Prints the package, verdict statistics and the result of every check.
pub fn summarize_report(report: &Report) {
    println!("Package: {}-{}", report.package, report.version);
    if !report.applicable {
        println!("Java packaging guidelines do not apply to this package.");
        return;
    }
    println!(
        "Superseded generic checks: {}\n",
        report.deprecates.join(", ")
    );

    println!("{}\n", totals_table(report));
    println!("{}", results_table(report));

    if report.totals.failed_must > 0 {
        println!(
            "\nTotal: {} MUST check(s) failed",
            report.totals.failed_must
        );
    }
}

/// Create a table with the default preset styling.
fn default_table_preset() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL_CONDENSED)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
    table
}

fn bold(text: &str) -> Cell {
    Cell::new(text).add_attribute(comfy_table::Attribute::Bold)
}

/// Create a table showing verdict statistics.
fn totals_table(report: &Report) -> Table {
    let totals = &report.totals;
    let mut table = default_table_preset();
    table
        .set_header(vec![bold("Verdict"), bold("Count")])
        .add_row(vec![Cell::new("Pass"), Cell::new(totals.pass)])
        .add_row(vec![Cell::new("Fail"), Cell::new(totals.fail)])
        .add_row(vec![Cell::new("Pending"), Cell::new(totals.pending)])
        .add_row(vec![
            Cell::new("Not applicable"),
            Cell::new(totals.not_applicable),
        ])
        .add_row(vec![Cell::new("Manual"), Cell::new(totals.manual)])
        .add_row(vec![
            bold("Total"),
            Cell::new(totals.total).add_attribute(comfy_table::Attribute::Bold),
        ]);
    table
}

fn verdict_cell(verdict: Verdict) -> Cell {
    let cell = Cell::new(verdict);
    match verdict {
        Verdict::Pass => cell.fg(Color::Green),
        Verdict::Fail => cell.fg(Color::Red),
        Verdict::Pending | Verdict::Manual => cell.fg(Color::Yellow),
        Verdict::NotApplicable => cell,
    }
}

/// Create a table with one row per check.
fn results_table(report: &Report) -> Table {
    let mut table = default_table_preset();
    table.set_header(vec![
        bold("Group"),
        bold("Check"),
        bold("Type"),
        bold("Verdict"),
        bold("Note"),
    ]);
    for outcome in &report.results {
        table.add_row(vec![
            Cell::new(outcome.metadata.group),
            Cell::new(outcome.metadata.text),
            Cell::new(outcome.metadata.severity),
            verdict_cell(outcome.evaluation.verdict),
            Cell::new(outcome.evaluation.note.as_deref().unwrap_or("")),
        ]);
    }
    table
}
