// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Verdict counts over all evaluated checks.

use serde::Serialize;

use crate::checks::{CheckOutcome, Severity, Verdict};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub pass: usize,
    pub fail: usize,
    pub pending: usize,
    pub not_applicable: usize,
    pub manual: usize,
    pub total: usize,
    /// Failed checks of MUST severity.
    pub failed_must: usize,
}

impl ReportTotals {
    #[must_use]
    pub(crate) fn calculate(results: &[CheckOutcome]) -> Self {
        results.iter().fold(Self::default(), |mut totals, outcome| {
            match outcome.evaluation.verdict {
                Verdict::Pass => totals.pass += 1,
                Verdict::Fail => {
                    totals.fail += 1;
                    if outcome.metadata.severity == Severity::Must {
                        totals.failed_must += 1;
                    }
                }
                Verdict::Pending => totals.pending += 1,
                Verdict::NotApplicable => totals.not_applicable += 1,
                Verdict::Manual => totals.manual += 1,
            }
            totals.total += 1;
            totals
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Evaluation, JavaCheck};

    fn outcome(check: JavaCheck, verdict: Verdict) -> CheckOutcome {
        CheckOutcome {
            metadata: check.metadata(),
            evaluation: Evaluation {
                verdict,
                note: None,
            },
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(ReportTotals::calculate(&[]), ReportTotals::default());
    }

    #[test]
    fn test_counts() {
        let results = [
            outcome(JavaCheck::Javadoc, Verdict::Pass),
            outcome(JavaCheck::JavadocDirName, Verdict::Fail),
            outcome(JavaCheck::NoArch, Verdict::Fail),
            outcome(JavaCheck::TestSkip, Verdict::Pending),
            outcome(JavaCheck::MvnRpmbuild, Verdict::NotApplicable),
            outcome(JavaCheck::BundledJars, Verdict::Manual),
        ];
        let totals = ReportTotals::calculate(&results);
        assert_eq!(
            totals,
            ReportTotals {
                pass: 1,
                fail: 2,
                pending: 1,
                not_applicable: 1,
                manual: 1,
                total: 6,
                // CheckNoArch is only a SHOULD.
                failed_must: 1,
            }
        );
    }
}
