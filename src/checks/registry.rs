// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! The Java checklist: applicability gate, superseded generic checks and evaluation.

use tracing::{info, warn};

use super::predicates::is_java_package;
use super::{CheckContext, CheckMetadata, Evaluation, JavaCheck};
use crate::package::PackageResult;
use serde::Serialize;

/// Generic checks that make no sense for Java packages and are replaced by this checklist.
pub const SUPERSEDED_GENERIC_CHECKS: [&str; 3] =
    ["CheckBuildCompilerFlags", "CheckUsefulDebuginfo", "CheckLargeDocs"];

/// Whether the Java checklist runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Applicability {
    /// Run if the package looks like a Java package.
    #[default]
    Auto,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistConfig {
    pub applicability: Applicability,
    /// Names of checks to leave out.
    pub excluded: Vec<String>,
}

/// One evaluated check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    #[serde(flatten)]
    pub metadata: &'static CheckMetadata,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// The set of checks run for one review.
#[derive(Debug, Clone)]
pub struct Checklist {
    checks: Vec<JavaCheck>,
    applicability: Applicability,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(&ChecklistConfig::default())
    }
}

impl Checklist {
    #[must_use]
    pub fn new(config: &ChecklistConfig) -> Self {
        for name in &config.excluded {
            if JavaCheck::from_name(name).is_none() {
                warn!(check = name.as_str(), "Ignoring exclusion of unknown check");
            }
        }
        let checks = JavaCheck::ALL
            .into_iter()
            .filter(|check| !config.excluded.iter().any(|name| name == check.name()))
            .collect();
        Self {
            checks,
            applicability: config.applicability,
        }
    }

    #[must_use]
    pub fn checks(&self) -> &[JavaCheck] {
        &self.checks
    }

    /// Generic checks this checklist supersedes.
    #[must_use]
    pub fn deprecates(&self) -> &'static [&'static str] {
        &SUPERSEDED_GENERIC_CHECKS
    }

    /// Whether the package under review is subject to the Java guidelines.
    #[must_use]
    pub fn is_applicable(&self, ctx: &CheckContext<'_>) -> bool {
        let applicable = match self.applicability {
            Applicability::Enabled => true,
            Applicability::Disabled => false,
            Applicability::Auto => is_java_package(ctx),
        };
        info!(
            package = ctx.spec.name(),
            applicable,
            mode = ?self.applicability,
            "Java checklist applicability"
        );
        applicable
    }

    /// Evaluate every check once, in order.
    ///
    /// # Errors
    /// Returns an error if a check fails to build a file pattern.
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> PackageResult<Vec<CheckOutcome>> {
        self.checks
            .iter()
            .map(|check| {
                Ok(CheckOutcome {
                    metadata: check.metadata(),
                    evaluation: check.evaluate(ctx)?,
                })
            })
            .collect()
    }

    /// Evaluate the checks if the checklist applies to the package.
    ///
    /// Returns `None` if it does not apply.
    ///
    /// # Errors
    /// Returns an error if a check fails to build a file pattern.
    pub fn run(&self, ctx: &CheckContext<'_>) -> PackageResult<Option<Vec<CheckOutcome>>> {
        if !self.is_applicable(ctx) {
            return Ok(None);
        }
        self.evaluate(ctx).map(Some)
    }
}
