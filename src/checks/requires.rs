// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Checks on dependencies on the Java packaging tools.

use super::patterns::{JAVAPACKAGES_BR, JAVAPACKAGES_R, JAVA_DOCS_URL, POM_FILES, SCRIPTLET_TOOL};
use super::predicates::{is_maven_package, is_xmvn_package};
use super::{CheckContext, CheckGroup, CheckMetadata, CheckState, Severity, Verdict};

pub(crate) const JPACKAGE_REQUIRES: CheckMetadata = CheckMetadata {
    name: "CheckJPackageRequires",
    group: CheckGroup::Guidelines,
    text: "Packages have proper BuildRequires/Requires on javapackages-tools (jpackage-utils)",
    url: JAVA_DOCS_URL,
    severity: Severity::Must,
    automatic: true,
};

pub(crate) const NO_REQUIRES_POST: CheckMetadata = CheckMetadata {
    name: "CheckNoRequiresPost",
    group: CheckGroup::Maven,
    text: "Packages DO NOT have Requires(post) and Requires(postun) on jpackage-utils for \
           %update_maven_depmap macro",
    url: JAVA_DOCS_URL,
    severity: Severity::Must,
    automatic: true,
};

fn contains_any(haystack: &[String], needles: &[&str]) -> bool {
    haystack
        .iter()
        .any(|item| needles.iter().any(|needle| item.contains(needle)))
}

pub(crate) fn check_jpackage_requires(ctx: &CheckContext<'_>, state: &mut CheckState) {
    let build_requires_found = contains_any(ctx.spec.build_requires(), &JAVAPACKAGES_BR);
    // Only the main package's requires are considered.
    let requires_found = contains_any(ctx.spec.requires(None), &JAVAPACKAGES_R);

    if is_maven_package(ctx.spec) || is_xmvn_package(ctx.spec) {
        // maven-local pulls the packaging tools in.
        let found = build_requires_found || requires_found;
        let note = found.then(|| {
            "Maven packages do not need to (Build)Require jpackage-utils. \
             It is pulled in by maven-local"
                .to_string()
        });
        state.set(Verdict::from(!found), note);
    } else {
        state.set_passed(build_requires_found && requires_found);
    }
}

pub(crate) fn check_no_requires_post(ctx: &CheckContext<'_>, state: &mut CheckState) {
    if ctx.rpms.find(&POM_FILES, None).is_none() {
        state.set(Verdict::NotApplicable, None);
        return;
    }
    let offenders: Vec<&str> = ctx
        .spec
        .packages()
        .into_iter()
        .filter(|package| {
            ctx.rpms.scriptlets(package).is_some_and(|scriptlets| {
                scriptlets.iter().any(|script| script.contains(SCRIPTLET_TOOL))
            })
        })
        .collect();
    if offenders.is_empty() {
        state.set(Verdict::Pass, None);
    } else {
        state.set(
            Verdict::Fail,
            Some(format!(
                "{SCRIPTLET_TOOL} post/postun in {}",
                offenders.join(", ")
            )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{BuiltPackages, PackageFiles, RpmPackage, Spec, Subpackage};

    fn run(
        check: fn(&CheckContext<'_>, &mut CheckState),
        spec: &Spec,
        rpms: &BuiltPackages,
    ) -> (Verdict, Option<String>) {
        let mut state = CheckState::new("CheckTest");
        check(&CheckContext::new(spec, rpms), &mut state);
        let evaluation = state.finish();
        (evaluation.verdict, evaluation.note)
    }

    #[test]
    fn test_maven_package_with_tools_fails() {
        let spec = Spec::new("foo", "1").with_build_requires(["maven-local", "jpackage-utils"]);
        let (verdict, note) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Fail);
        assert!(note.unwrap().contains("pulled in by maven-local"));
    }

    #[test]
    fn test_maven_package_without_tools_passes() {
        let spec = Spec::new("foo", "1").with_build_requires(["maven-local"]);
        let (verdict, note) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Pass);
        assert_eq!(note, None);
    }

    #[test]
    fn test_xmvn_package_with_runtime_tools_fails() {
        let spec = Spec::new("foo", "1")
            .with_text("%mvn_install\n")
            .with_requires("foo", ["javapackages-tools"]);
        let (verdict, _) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Fail);
    }

    #[test]
    fn test_plain_package_requires_tools() {
        let spec = Spec::new("foo", "1").with_build_requires(["ant"]);
        let (verdict, _) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Fail);

        let spec = Spec::new("foo", "1")
            .with_build_requires(["ant", "javapackages-local"])
            .with_requires("foo", ["javapackages-tools"]);
        let (verdict, _) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Pass);
    }

    #[test]
    fn test_plain_package_needs_both() {
        let spec = Spec::new("foo", "1").with_build_requires(["ant", "jpackage-utils"]);
        let (verdict, _) = run(check_jpackage_requires, &spec, &BuiltPackages::new());
        assert_eq!(verdict, Verdict::Fail);
    }

    fn pom_rpms(foo: RpmPackage) -> BuiltPackages {
        BuiltPackages::new().with_package("foo", foo).with_package(
            "foo-parent",
            RpmPackage::new(PackageFiles::new(["/usr/share/maven-poms/foo-parent.pom"]))
                .with_postun("%{_bindir}/jpackage-utils-cleanup"),
        )
    }

    #[test]
    fn test_requires_post_without_poms() {
        let spec = Spec::new("foo", "1");
        let rpms = BuiltPackages::new().with_package(
            "foo",
            RpmPackage::new(PackageFiles::new(["/usr/share/java/foo.jar"]))
                .with_post("jpackage-utils"),
        );
        let (verdict, _) = run(check_no_requires_post, &spec, &rpms);
        assert_eq!(verdict, Verdict::NotApplicable);
    }

    #[test]
    fn test_requires_post_lists_offenders() {
        let spec = Spec::new("foo", "1").with_package(Subpackage::new("foo-parent"));
        let rpms = pom_rpms(
            RpmPackage::new(PackageFiles::new(["/usr/share/java/foo.jar"]))
                .with_post("%update_maven_depmap # jpackage-utils"),
        );
        let (verdict, note) = run(check_no_requires_post, &spec, &rpms);
        assert_eq!(verdict, Verdict::Fail);
        assert_eq!(
            note.as_deref(),
            Some("jpackage-utils post/postun in foo, foo-parent")
        );
    }

    #[test]
    fn test_requires_post_clean() {
        let spec = Spec::new("foo", "1");
        let rpms = BuiltPackages::new().with_package(
            "foo",
            RpmPackage::new(PackageFiles::new(["/usr/share/maven-poms/foo.pom"]))
                .with_post("/sbin/ldconfig"),
        );
        let (verdict, _) = run(check_no_requires_post, &spec, &rpms);
        assert_eq!(verdict, Verdict::Pass);
    }
}
