// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Predicates shared by several checks.

use regex::Regex;

use super::patterns::{
    JAR_FILES, JAVADOC_SUFFIX, JAVA_BUILD_REQUIRES, JAVA_MACROS, MAVEN_LOCAL, POM_FILES,
    XMVN_MACRO,
};
use super::{CheckContext, CheckState, Verdict};
use crate::package::SpecView;

/// Whether the package builds with local Maven support.
#[must_use]
pub fn is_maven_package(spec: &dyn SpecView) -> bool {
    spec.build_requires()
        .iter()
        .any(|build_requires| build_requires.contains(MAVEN_LOCAL))
}

/// Whether the package builds and installs with the XMvn macros.
#[must_use]
pub fn is_xmvn_package(spec: &dyn SpecView) -> bool {
    spec.find_re(&XMVN_MACRO).is_some()
}

/// All declared javadoc subpackages, in declaration order.
#[must_use]
pub fn javadoc_subpackages(spec: &dyn SpecView) -> Vec<&str> {
    spec.packages()
        .into_iter()
        .filter(|name| name.ends_with(JAVADOC_SUFFIX))
        .collect()
}

/// The first declared javadoc subpackage.
#[must_use]
pub fn find_javadoc_subpackage(spec: &dyn SpecView) -> Option<&str> {
    javadoc_subpackages(spec).into_iter().next()
}

/// Whether the package looks like a Java package at all.
#[must_use]
pub fn is_java_package(ctx: &CheckContext<'_>) -> bool {
    ctx.spec
        .build_requires()
        .iter()
        .any(|build_requires| JAVA_BUILD_REQUIRES.is_match(build_requires))
        || ctx.spec.find_re(&JAVA_MACROS).is_some()
        || ctx.rpms.find(&JAR_FILES, None).is_some()
        || ctx.rpms.find(&POM_FILES, None).is_some()
}

/// Check that the line before `pivot` is accepted by `judge`.
///
/// Walks `lines` from the end. Once a line matched `trigger`, the next line
/// matching `pivot` (possibly the same line) is located; the nearest non-blank
/// line before it has to match `judge`.
///
/// Returns `Some(true)` if it does. Returns `Some(false)` and records a failure
/// in `state` if a different line, or the start of `lines`, comes first.
/// Returns `None` if `trigger` or `pivot` never matched.
pub fn scan_backward_for_comment<S: AsRef<str>>(
    lines: &[S],
    trigger: &Regex,
    pivot: &Regex,
    judge: &Regex,
    state: &mut CheckState,
) -> Option<bool> {
    let mut found_trigger = false;
    let mut pivot_line = None;
    for line in lines.iter().rev() {
        let line: &str = line.as_ref();
        if trigger.is_match(line) {
            found_trigger = true;
        }
        if found_trigger && pivot.is_match(line) {
            pivot_line = Some(line);
            continue;
        }
        if pivot_line.is_some() && !line.trim().is_empty() {
            if judge.is_match(line) {
                return Some(true);
            }
            break;
        }
    }
    let pivot_line = pivot_line?;
    state.set(
        Verdict::Fail,
        Some(format!(
            "No explanatory comment before: {}",
            pivot_line.trim()
        )),
    );
    Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{BuiltPackages, PackageFiles, RpmPackage, Spec, Subpackage};

    fn scan(lines: &[&str], state: &mut CheckState) -> Option<bool> {
        let trigger = Regex::new(r"-Dmaven\.test\.skip").unwrap();
        let pivot = Regex::new("mvn-rpmbuild").unwrap();
        let judge = Regex::new("^#").unwrap();
        scan_backward_for_comment(lines, &trigger, &pivot, &judge, state)
    }

    #[test]
    fn test_scan_comment_before_pivot() {
        let mut state = CheckState::new("CheckTest");
        let lines = ["# reason", "mvn-rpmbuild -Dmaven.test.skip"];
        assert_eq!(scan(&lines, &mut state), Some(true));
        assert!(!state.is_evaluated());
    }

    #[test]
    fn test_scan_missing_comment_fails() {
        let mut state = CheckState::new("CheckTest");
        let lines = ["mvn-rpmbuild -Dmaven.test.skip"];
        assert_eq!(scan(&lines, &mut state), Some(false));
        assert_eq!(state.verdict(), Some(Verdict::Fail));
    }

    #[test]
    fn test_scan_non_comment_line_fails() {
        let mut state = CheckState::new("CheckTest");
        let lines = [
            "# reason",
            "export JAVA_HOME=/usr/lib/jvm/java",
            "",
            "mvn-rpmbuild -Dmaven.test.skip",
        ];
        assert_eq!(scan(&lines, &mut state), Some(false));
        assert_eq!(state.verdict(), Some(Verdict::Fail));
    }

    #[test]
    fn test_scan_skips_blank_lines() {
        let mut state = CheckState::new("CheckTest");
        let lines = ["# tests need network", "", "   ", "mvn-rpmbuild -Dmaven.test.skip"];
        assert_eq!(scan(&lines, &mut state), Some(true));
    }

    #[test]
    fn test_scan_trigger_after_pivot_line() {
        let mut state = CheckState::new("CheckTest");
        let lines = ["# tests hang", "mvn-rpmbuild \\", "  -Dmaven.test.skip=true \\", "  install"];
        assert_eq!(scan(&lines, &mut state), Some(true));
    }

    #[test]
    fn test_scan_without_trigger_is_indeterminate() {
        let mut state = CheckState::new("CheckTest");
        let lines = ["mvn-rpmbuild install"];
        assert_eq!(scan(&lines, &mut state), None);
        assert!(!state.is_evaluated());

        let lines = ["ant -Dmaven.test.skip"];
        assert_eq!(scan(&lines, &mut state), None);
        assert!(!state.is_evaluated());
    }

    #[test]
    fn test_is_maven_package() {
        let spec = Spec::new("foo", "1").with_build_requires(["maven-local-openjdk21"]);
        assert!(is_maven_package(&spec));
        let spec = Spec::new("foo", "1").with_build_requires(["ant"]);
        assert!(!is_maven_package(&spec));
    }

    #[test]
    fn test_is_xmvn_package() {
        let spec = Spec::new("foo", "1").with_text("%build\n%mvn_build\n");
        assert!(is_xmvn_package(&spec));
        let spec = Spec::new("foo", "1").with_text("%build\n#%mvn_build\nant\n");
        assert!(!is_xmvn_package(&spec));
    }

    #[test]
    fn test_find_javadoc_subpackage() {
        let spec = Spec::new("foo", "1")
            .with_package(Subpackage::new("foo-javadoc"))
            .with_package(Subpackage::new("foo-bar-javadoc"));
        assert_eq!(find_javadoc_subpackage(&spec), Some("foo-javadoc"));
        assert_eq!(javadoc_subpackages(&spec).len(), 2);
        assert_eq!(find_javadoc_subpackage(&Spec::new("foo", "1")), None);
    }

    #[test]
    fn test_is_java_package() {
        let rpms = BuiltPackages::new();
        let spec = Spec::new("foo", "1").with_build_requires(["gcc"]);
        assert!(!is_java_package(&CheckContext::new(&spec, &rpms)));

        let spec =
            Spec::new("foo", "1").with_text("install -m 644 foo.jar %{buildroot}%{_javadir}/");
        assert!(is_java_package(&CheckContext::new(&spec, &rpms)));

        let spec = Spec::new("foo", "1");
        let rpms = BuiltPackages::new().with_package(
            "foo",
            RpmPackage::new(PackageFiles::new(["/usr/share/java/foo.jar"])),
        );
        assert!(is_java_package(&CheckContext::new(&spec, &rpms)));
    }
}
