// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Validates reports and returns errors for failed MUST checks.

use anyhow::Result;
use tracing::error;

use super::Report;
use crate::checks::{Severity, Verdict};

/// Validate the report.
///
/// # Errors
/// Returns an error if any MUST check failed.
pub fn validate_report(report: &Report) -> Result<()> {
    if report.totals.failed_must == 0 {
        return Ok(());
    }
    for outcome in &report.results {
        if outcome.evaluation.verdict == Verdict::Fail
            && outcome.metadata.severity == Severity::Must
        {
            error!(
                check = outcome.metadata.name,
                note = outcome.evaluation.note.as_deref().unwrap_or(""),
                "{}",
                outcome.metadata.text
            );
        }
    }
    Err(anyhow::anyhow!(
        "Failed MUST checks found in the report: {} failed checks",
        report.totals.failed_must
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Applicability, Checklist, ChecklistConfig};
    use crate::package::{BuiltPackages, PackageFiles, ReviewPackage, RpmPackage, Spec, Subpackage};

    fn create_report(spec: Spec, rpms: BuiltPackages) -> Report {
        let checklist = Checklist::new(&ChecklistConfig {
            applicability: Applicability::Enabled,
            ..ChecklistConfig::default()
        });
        Report::new(&ReviewPackage::new(spec, rpms), &checklist).unwrap()
    }

    #[test]
    fn test_failed_must_check_is_error() {
        // No javadoc subpackage fails CheckJavadoc.
        let report = create_report(Spec::new("foo", "1"), BuiltPackages::new());
        let result = validate_report(&report);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed MUST checks"));
    }

    #[test]
    fn test_clean_report_is_ok() {
        let spec = Spec::new("foo", "1")
            .with_build_requires(["maven-local"])
            .with_package(Subpackage::new("foo").with_tag("arch", "noarch"))
            .with_package(Subpackage::new("foo-javadoc").with_tag("arch", "noarch"))
            .with_section("%build", "%mvn_build\n")
            .with_text("%build\n%mvn_build\n%install\n%mvn_install\n");
        let rpms = BuiltPackages::new()
            .with_package(
                "foo",
                RpmPackage::new(PackageFiles::new([
                    "/usr/share/java/foo.jar",
                    "/usr/share/maven-poms/foo.pom",
                ])),
            )
            .with_package(
                "foo-javadoc",
                RpmPackage::new(PackageFiles::new(["/usr/share/javadoc/foo/index.html"])),
            );
        let report = create_report(spec, rpms);
        assert_eq!(report.totals().fail, 0, "{:?}", report.results());
        assert!(validate_report(&report).is_ok());
    }
}
