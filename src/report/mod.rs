// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Report struct and public API for collecting check results.

mod console;
mod totals;
mod validate;

pub use console::summarize_report;
pub use totals::ReportTotals;
pub use validate::validate_report;

use serde::Serialize;

use crate::checks::{CheckContext, CheckOutcome, Checklist};
use crate::package::{PackageResult, ReviewPackage};

#[derive(Debug, Serialize)]
pub struct Report {
    package: String,
    version: String,
    applicable: bool,
    /// Generic checks superseded by the Java checklist.
    deprecates: Vec<&'static str>,
    totals: ReportTotals,
    results: Vec<CheckOutcome>,
}

impl Report {
    /// Run the checklist against a review snapshot.
    ///
    /// # Errors
    /// Returns an error if a check fails to build a file pattern.
    pub fn new(package: &ReviewPackage, checklist: &Checklist) -> PackageResult<Self> {
        Self::from_context(&CheckContext::new(package.spec(), package.rpms()), checklist)
    }

    /// Run the checklist against views supplied by the host.
    ///
    /// # Errors
    /// Returns an error if a check fails to build a file pattern.
    pub fn from_context(ctx: &CheckContext<'_>, checklist: &Checklist) -> PackageResult<Self> {
        let results = checklist.run(ctx)?;
        let applicable = results.is_some();
        let results = results.unwrap_or_default();
        Ok(Self {
            package: ctx.spec.name().to_string(),
            version: ctx.spec.version().to_string(),
            applicable,
            deprecates: if applicable {
                checklist.deprecates().to_vec()
            } else {
                Vec::new()
            },
            totals: ReportTotals::calculate(&results),
            results,
        })
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub fn is_applicable(&self) -> bool {
        self.applicable
    }

    #[must_use]
    pub fn deprecates(&self) -> &[&'static str] {
        &self.deprecates
    }

    #[must_use]
    pub fn totals(&self) -> &ReportTotals {
        &self.totals
    }

    #[must_use]
    pub fn results(&self) -> &[CheckOutcome] {
        &self.results
    }

    /// Find the result of a check by its registered name.
    #[must_use]
    pub fn result(&self, name: &str) -> Option<&CheckOutcome> {
        self.results.iter().find(|r| r.metadata.name == name)
    }
}
