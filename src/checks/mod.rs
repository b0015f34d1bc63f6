// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Java packaging guideline checks.
//!
//! Every check is a [`JavaCheck`] variant carrying static [`CheckMetadata`] and a
//! pure evaluation over a [`CheckContext`]. A check is evaluated at most once and
//! its first recorded verdict is final.

mod arch;
mod javadoc;
mod manual;
mod maven;
pub mod patterns;
mod predicates;
pub mod registry;
mod requires;

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::package::{PackageResult, RpmView, SpecView};

pub use predicates::{
    find_javadoc_subpackage, is_java_package, is_maven_package, is_xmvn_package,
    javadoc_subpackages, scan_backward_for_comment,
};
pub use registry::{
    Applicability, CheckOutcome, Checklist, ChecklistConfig, SUPERSEDED_GENERIC_CHECKS,
};

/// How binding a guideline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Must,
    Should,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Must => write!(f, "MUST"),
            Self::Should => write!(f, "SHOULD"),
        }
    }
}

/// Report group a check is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckGroup {
    #[serde(rename = "Java.guidelines")]
    Guidelines,
    #[serde(rename = "Maven")]
    Maven,
}

impl fmt::Display for CheckGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guidelines => write!(f, "Java.guidelines"),
            Self::Maven => write!(f, "Maven"),
        }
    }
}

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
    /// A human has to confirm before the check is accepted or rejected.
    Pending,
    NotApplicable,
    /// The check is never decided automatically.
    Manual,
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Pending => "pending",
            Self::NotApplicable => "not applicable",
            Self::Manual => "manual",
        };
        write!(f, "{text}")
    }
}

/// Static description of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMetadata {
    /// Name the review host registers the check under.
    pub name: &'static str,
    pub group: CheckGroup,
    pub text: &'static str,
    pub url: &'static str,
    pub severity: Severity,
    /// Whether the check can be decided without a human.
    pub automatic: bool,
}

/// Final verdict of one check plus an optional explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Records the verdict of a check while it runs.
///
/// The first verdict wins; later writes are ignored.
#[derive(Debug)]
pub struct CheckState {
    name: &'static str,
    evaluation: Option<Evaluation>,
}

impl CheckState {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            evaluation: None,
        }
    }

    /// Record a verdict. Returns `false` if one was already recorded.
    pub fn set(&mut self, verdict: Verdict, note: Option<String>) -> bool {
        if let Some(existing) = &self.evaluation {
            warn!(
                check = self.name,
                recorded = %existing.verdict,
                ignored = %verdict,
                "Verdict already recorded"
            );
            return false;
        }
        self.evaluation = Some(Evaluation { verdict, note });
        true
    }

    pub fn set_passed(&mut self, passed: bool) -> bool {
        self.set(Verdict::from(passed), None)
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.evaluation.as_ref().map(|e| e.verdict)
    }

    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    /// Finish evaluation. A check that recorded nothing is left for a human.
    #[must_use]
    pub fn finish(self) -> Evaluation {
        self.evaluation.unwrap_or_else(|| Evaluation {
            verdict: Verdict::Pending,
            note: Some("Could not be decided automatically".to_string()),
        })
    }
}

/// The read-only views a check evaluates.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub spec: &'a dyn SpecView,
    pub rpms: &'a dyn RpmView,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub fn new(spec: &'a dyn SpecView, rpms: &'a dyn RpmView) -> Self {
        Self { spec, rpms }
    }
}

/// All checks implementing the Java packaging guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaCheck {
    Javadoc,
    JavadocDirName,
    JPackageRequires,
    JavadocJPackageRequires,
    NoOldMavenDepmap,
    AddMavenDepmap,
    UseMavenpomdirMacro,
    UpdateDepmap,
    NoRequiresPost,
    TestSkip,
    MvnRpmbuild,
    BundledJars,
    JarFilename,
    PomInstalled,
    UpstreamBuildMethod,
    NoArch,
    NewStyleMaven,
}

impl JavaCheck {
    /// Every check, in report order.
    pub const ALL: [Self; 17] = [
        Self::Javadoc,
        Self::JavadocDirName,
        Self::JPackageRequires,
        Self::JavadocJPackageRequires,
        Self::NoOldMavenDepmap,
        Self::AddMavenDepmap,
        Self::UseMavenpomdirMacro,
        Self::UpdateDepmap,
        Self::NoRequiresPost,
        Self::TestSkip,
        Self::MvnRpmbuild,
        Self::BundledJars,
        Self::JarFilename,
        Self::PomInstalled,
        Self::UpstreamBuildMethod,
        Self::NoArch,
        Self::NewStyleMaven,
    ];

    #[must_use]
    pub fn metadata(&self) -> &'static CheckMetadata {
        match self {
            Self::Javadoc => &javadoc::JAVADOC,
            Self::JavadocDirName => &javadoc::JAVADOC_DIR_NAME,
            Self::JPackageRequires => &requires::JPACKAGE_REQUIRES,
            Self::JavadocJPackageRequires => &javadoc::JAVADOC_JPACKAGE_REQUIRES,
            Self::NoOldMavenDepmap => &maven::NO_OLD_MAVEN_DEPMAP,
            Self::AddMavenDepmap => &maven::ADD_MAVEN_DEPMAP,
            Self::UseMavenpomdirMacro => &maven::USE_MAVENPOMDIR_MACRO,
            Self::UpdateDepmap => &maven::UPDATE_DEPMAP,
            Self::NoRequiresPost => &requires::NO_REQUIRES_POST,
            Self::TestSkip => &maven::TEST_SKIP,
            Self::MvnRpmbuild => &maven::MVN_RPMBUILD,
            Self::BundledJars => &manual::BUNDLED_JARS,
            Self::JarFilename => &manual::JAR_FILENAME,
            Self::PomInstalled => &manual::POM_INSTALLED,
            Self::UpstreamBuildMethod => &manual::UPSTREAM_BUILD_METHOD,
            Self::NoArch => &arch::NO_ARCH,
            Self::NewStyleMaven => &maven::NEW_STYLE_MAVEN,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    /// Look a check up by its registered name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.name() == name)
    }

    /// Evaluate the check.
    ///
    /// # Errors
    /// Returns an error if a file pattern built from the package metadata is invalid.
    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> PackageResult<Evaluation> {
        let metadata = self.metadata();
        let mut state = CheckState::new(metadata.name);
        match self {
            Self::Javadoc => javadoc::check_javadoc(ctx, &mut state),
            Self::JavadocDirName => javadoc::check_javadoc_dir_name(ctx, &mut state)?,
            Self::JPackageRequires => requires::check_jpackage_requires(ctx, &mut state),
            Self::JavadocJPackageRequires => javadoc::check_javadoc_requires(ctx, &mut state),
            Self::NoOldMavenDepmap => maven::check_no_old_depmap(ctx, &mut state),
            Self::AddMavenDepmap => maven::check_add_maven_depmap(ctx, &mut state),
            Self::UseMavenpomdirMacro => maven::check_mavenpomdir_macro(ctx, &mut state),
            Self::UpdateDepmap => maven::check_update_depmap(ctx, &mut state),
            Self::NoRequiresPost => requires::check_no_requires_post(ctx, &mut state),
            Self::TestSkip => maven::check_test_skip(ctx, &mut state),
            Self::MvnRpmbuild => maven::check_mvn_rpmbuild(ctx, &mut state),
            Self::NoArch => arch::check_noarch(ctx, &mut state),
            Self::NewStyleMaven => maven::check_new_style_maven(ctx, &mut state),
            Self::BundledJars
            | Self::JarFilename
            | Self::PomInstalled
            | Self::UpstreamBuildMethod => {
                state.set(Verdict::Manual, None);
            }
        }
        let evaluation = state.finish();
        debug!(
            check = metadata.name,
            verdict = %evaluation.verdict,
            note = evaluation.note.as_deref().unwrap_or(""),
            "Check evaluated"
        );
        Ok(evaluation)
    }
}
