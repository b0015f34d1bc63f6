// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Checks RPM packages against the Java packaging guidelines.
//!
//! This crate provides functionality to:
//! - Read the spec file and built RPM views supplied by a review host
//! - Evaluate the Java and Maven packaging checks over those views
//! - Generate and validate reports of the check verdicts

pub mod checks;
pub mod package;
pub mod report;

// Re-export key types for convenience
pub use checks::{CheckContext, Checklist, ChecklistConfig, JavaCheck, Verdict};
pub use package::{ReviewPackage, RpmView, SpecView};
pub use report::Report;
